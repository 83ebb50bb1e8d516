use clap::Parser;
use pageview::{Properties, PropertyValue};

#[derive(Parser, Debug)]
#[command(name = "pageview")]
#[command(about = "Report page views and custom analytics events")]
#[command(version)]
pub struct Args {
    /// URLs to report as page views
    pub urls: Vec<String>,

    /// Path to client configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Distinct id to attach to every event
    #[arg(short, long)]
    pub distinct_id: Option<String>,

    /// Name of a custom event to capture
    #[arg(short, long)]
    pub event: Option<String>,

    /// Custom event property as key=value (repeatable)
    #[arg(short, long = "prop", value_parser = parse_property)]
    pub props: Vec<(String, String)>,
}

/// Parse a `key=value` property argument
pub fn parse_property(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", arg)),
    }
}

/// Convert parsed `key=value` pairs into event properties
pub fn to_properties(props: &[(String, String)]) -> Properties {
    props
        .iter()
        .map(|(k, v)| (k.clone(), PropertyValue::from(v.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property() {
        assert_eq!(
            parse_property("plan=pro"),
            Ok(("plan".to_string(), "pro".to_string()))
        );
        // Only the first '=' separates key from value
        assert_eq!(
            parse_property("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_property("k="), Ok(("k".to_string(), String::new())));
        assert!(parse_property("novalue").is_err());
        assert!(parse_property("=v").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "pageview",
            "https://example.com/a",
            "https://example.com/b",
            "-d",
            "user-1",
            "-e",
            "signed_up",
            "-p",
            "plan=pro",
            "--prop",
            "seats=5",
        ])
        .unwrap();

        assert_eq!(args.urls.len(), 2);
        assert_eq!(args.distinct_id.as_deref(), Some("user-1"));
        assert_eq!(args.event.as_deref(), Some("signed_up"));

        let properties = to_properties(&args.props);
        assert_eq!(properties.len(), 2);
        assert_eq!(
            properties.get("seats"),
            Some(&PropertyValue::String("5".to_string()))
        );
    }
}
