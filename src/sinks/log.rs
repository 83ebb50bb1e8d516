use crate::error::CaptureError;
use crate::event::Event;
use crate::sinks::EventSink;

/// Log target used for emitted events
pub const EVENT_TARGET: &str = "pageview::event";

/// Sink that writes each event to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn send(&self, event: Event) -> Result<(), CaptureError> {
        let line = event.to_json_line()?;
        ::log::info!(target: EVENT_TARGET, "{}", line);
        Ok(())
    }
}
