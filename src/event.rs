use crate::properties::Properties;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A captured event, as handed to a sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name (e.g. `$pageview`)
    pub event: String,

    /// Identifier of the user the event belongs to (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_id: Option<String>,

    /// Event properties, exactly as passed to capture
    #[serde(default)]
    pub properties: Properties,

    /// Capture time in milliseconds since the unix epoch
    pub timestamp: u64,
}

impl Event {
    /// Create a new event stamped with the current time
    pub fn new(event: impl Into<String>, properties: Properties) -> Self {
        Self {
            event: event.into(),
            distinct_id: None,
            properties,
            timestamp: now_millis(),
        }
    }

    pub fn with_distinct_id(mut self, distinct_id: impl Into<String>) -> Self {
        self.distinct_id = Some(distinct_id.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Encode the event as a single line of compact JSON
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn now_millis() -> u64 {
    // A clock set before 1970 is reported as the epoch itself
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
