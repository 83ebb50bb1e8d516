use thiserror::Error;

/// Errors that can occur while capturing an event
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Event name must not be empty")]
    EmptyEventName,

    #[error("Event channel is full")]
    ChannelFull,

    #[error("Event channel is closed")]
    ChannelClosed,

    #[error("Failed to write event: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Event sink lock was poisoned")]
    Poisoned,
}

/// Errors that can occur while loading client configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
