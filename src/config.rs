use crate::error::ConfigError;
use crate::sinks::{EventSink, JsonLinesSink, LogSink};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Environment variable overriding the configured distinct id
pub const DISTINCT_ID_ENV: &str = "PAGEVIEW_DISTINCT_ID";

/// Configuration for the analytics client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Distinct id stamped on every event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_id: Option<String>,

    /// Where events are written
    #[serde(default)]
    pub sink: SinkConfig,

    /// Capacity of the in-process event channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

/// Output destination for captured events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SinkConfig {
    /// JSON lines on standard output
    #[default]
    Stdout,

    /// Records on the `log` facade
    Log,

    /// JSON lines appended to a file
    File { path: String },
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            distinct_id: None,
            sink: SinkConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Default value for channel_capacity
fn default_channel_capacity() -> usize {
    1024
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        contents.parse()
    }

    /// Override settings from the environment
    pub fn apply_env(self) -> Self {
        self.apply_env_value(std::env::var(DISTINCT_ID_ENV).ok())
    }

    pub(crate) fn apply_env_value(mut self, distinct_id: Option<String>) -> Self {
        if let Some(id) = distinct_id.filter(|id| !id.is_empty()) {
            self.distinct_id = Some(id);
        }
        self
    }
}

impl FromStr for ClientConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl SinkConfig {
    /// Create the sink described by this configuration
    pub fn build(&self) -> Result<Box<dyn EventSink + Send + Sync>, ConfigError> {
        let sink: Box<dyn EventSink + Send + Sync> = match self {
            SinkConfig::Stdout => Box::new(JsonLinesSink::stdout()),
            SinkConfig::Log => Box::new(LogSink),
            SinkConfig::File { path } => Box::new(JsonLinesSink::create(path)?),
        };
        Ok(sink)
    }
}

