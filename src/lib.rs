pub mod capture;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod page;
pub mod properties;
pub mod sinks;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use capture::Capture;
pub use client::Client;
pub use config::{ClientConfig, SinkConfig};
pub use error::{CaptureError, ConfigError};
pub use event::Event;
pub use page::{CURRENT_URL, PAGEVIEW_EVENT, report_page_view};
pub use properties::{Properties, PropertyValue};
