use crate::capture::Capture;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::CaptureError;
use crate::properties::{Properties, PropertyValue};
use crate::sinks::MemorySink;
use std::sync::Arc;

#[cfg(test)]
mod client_tests {
    use super::*;

    #[test]
    fn test_client_page_delivers_one_event() {
        let sink = Arc::new(MemorySink::new());
        let client = Client::new(sink.clone());

        client.page("https://example.com/pricing").unwrap();

        let events = sink.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "$pageview");
        assert_eq!(events[0].distinct_id, None);
        assert_eq!(
            events[0].properties,
            Properties::new().with("$current_url", "https://example.com/pricing")
        );
        assert!(events[0].timestamp > 0);
    }

    #[test]
    fn test_client_distinct_id_stays_off_properties() {
        let sink = Arc::new(MemorySink::new());
        let client = Client::new(sink.clone()).with_distinct_id("user-42");

        client.page("https://example.com").unwrap();

        let events = sink.take().unwrap();
        assert_eq!(events[0].distinct_id.as_deref(), Some("user-42"));
        assert_eq!(events[0].properties.len(), 1);
        assert!(sink.is_empty().unwrap());
    }

    #[test]
    fn test_client_capture_passes_properties_through() {
        let sink = Arc::new(MemorySink::new());
        let client = Client::new(sink.clone());

        let properties = Properties::new()
            .with("plan", "pro")
            .with("seats", 5)
            .with("trial", false)
            .with("coupon", None::<String>);
        client.capture("signed_up", properties.clone()).unwrap();

        let events = sink.events().unwrap();
        assert_eq!(events[0].event, "signed_up");
        assert_eq!(events[0].properties, properties);
        assert_eq!(
            events[0].properties.get("coupon"),
            Some(&PropertyValue::Null)
        );
    }

    #[test]
    fn test_client_rejects_empty_event_name() {
        let sink = Arc::new(MemorySink::new());
        let client = Client::new(sink.clone());

        let result = client.capture("", Properties::new());
        assert!(matches!(result, Err(CaptureError::EmptyEventName)));
        assert_eq!(sink.len().unwrap(), 0);
    }

    #[test]
    fn test_client_with_config_sets_distinct_id() {
        let config = ClientConfig {
            distinct_id: Some("from-config".to_string()),
            ..ClientConfig::default()
        };
        let client = Client::new(MemorySink::new()).with_config(&config);
        assert_eq!(client.distinct_id(), Some("from-config"));

        // A config without an id keeps the existing one
        let client = Client::new(MemorySink::new())
            .with_distinct_id("explicit")
            .with_config(&ClientConfig::default());
        assert_eq!(client.distinct_id(), Some("explicit"));
    }

    #[test]
    fn test_client_from_config_log_sink() {
        let config: ClientConfig = r#"{"distinct_id": "abc", "sink": {"type": "Log"}}"#
            .parse()
            .unwrap();
        let client = Client::from_config(&config).unwrap();
        assert_eq!(client.distinct_id(), Some("abc"));
        client.page("https://example.com").unwrap();
    }
}
