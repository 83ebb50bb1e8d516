use crate::config::{ClientConfig, SinkConfig};
use crate::error::ConfigError;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ClientConfig = "{}".parse().unwrap();
        assert_eq!(config.distinct_id, None);
        assert_eq!(config.sink, SinkConfig::Stdout);
        assert_eq!(config.channel_capacity, 1024);
    }

    #[test]
    fn test_file_sink_config() {
        let config: ClientConfig = r#"{
            "distinct_id": "user-1",
            "channel_capacity": 16,
            "sink": {"type": "File", "path": "events.jsonl"}
        }"#
        .parse()
        .unwrap();

        assert_eq!(config.distinct_id.as_deref(), Some("user-1"));
        assert_eq!(config.channel_capacity, 16);
        assert_eq!(
            config.sink,
            SinkConfig::File {
                path: "events.jsonl".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let result = "{\"sink\": {\"type\": \"Carrier pigeon\"}}".parse::<ClientConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = ClientConfig::from_file("/nonexistent/pageview/config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "pageview-config-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"sink": {"type": "Log"}}"#).unwrap();

        let config = ClientConfig::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().sink, SinkConfig::Log);
    }

    #[test]
    fn test_env_override() {
        let config = ClientConfig::default().apply_env_value(Some("env-id".to_string()));
        assert_eq!(config.distinct_id.as_deref(), Some("env-id"));

        // Empty values are ignored
        let config = ClientConfig {
            distinct_id: Some("kept".to_string()),
            ..ClientConfig::default()
        }
        .apply_env_value(Some(String::new()));
        assert_eq!(config.distinct_id.as_deref(), Some("kept"));
    }

    #[test]
    fn test_sink_config_builds_sinks() {
        assert!(SinkConfig::Log.build().is_ok());
        assert!(SinkConfig::Stdout.build().is_ok());
        assert!(
            SinkConfig::File {
                path: "/nonexistent/pageview/events.jsonl".to_string()
            }
            .build()
            .is_err()
        );
    }
}
