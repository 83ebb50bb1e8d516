use crate::capture::Capture;
use crate::config::ClientConfig;
use crate::error::{CaptureError, ConfigError};
use crate::event::Event;
use crate::properties::Properties;
use crate::sinks::EventSink;

/// Analytics client that turns captures into events and hands them to a sink
pub struct Client {
    sink: Box<dyn EventSink + Send + Sync>,
    distinct_id: Option<String>,
}

impl Client {
    /// Create a client delivering events to `sink`
    pub fn new(sink: impl EventSink + Send + Sync + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            distinct_id: None,
        }
    }

    /// Set the distinct id stamped on every captured event
    pub fn with_distinct_id(mut self, distinct_id: impl Into<String>) -> Self {
        self.distinct_id = Some(distinct_id.into());
        self
    }

    /// Apply the non-sink settings of a configuration
    pub fn with_config(mut self, config: &ClientConfig) -> Self {
        if let Some(distinct_id) = &config.distinct_id {
            self.distinct_id = Some(distinct_id.clone());
        }
        self
    }

    /// Build a client, including its sink, from a configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let sink = config.sink.build()?;
        Ok(Self {
            sink,
            distinct_id: None,
        }
        .with_config(config))
    }

    pub fn distinct_id(&self) -> Option<&str> {
        self.distinct_id.as_deref()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("distinct_id", &self.distinct_id)
            .finish_non_exhaustive()
    }
}

impl Capture for Client {
    fn capture(&self, event: &str, properties: Properties) -> Result<(), CaptureError> {
        if event.is_empty() {
            ::log::warn!("Rejected capture with empty event name");
            return Err(CaptureError::EmptyEventName);
        }

        let mut built = Event::new(event, properties);
        built.distinct_id = self.distinct_id.clone();

        ::log::debug!(
            "Capturing {} with {} properties",
            built.event,
            built.properties.len()
        );
        self.sink.send(built)
    }
}
