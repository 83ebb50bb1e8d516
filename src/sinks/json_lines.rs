use crate::error::CaptureError;
use crate::event::Event;
use crate::sinks::EventSink;
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

/// Sink that writes one JSON document per line to a writer
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Return the wrapped writer
    pub fn into_inner(self) -> Result<W, CaptureError> {
        self.writer.into_inner().map_err(|_| CaptureError::Poisoned)
    }
}

impl JsonLinesSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonLinesSink<File> {
    /// Open `path` for appending, creating it if needed
    pub fn create(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::new(file))
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn send(&self, event: Event) -> Result<(), CaptureError> {
        let line = event.to_json_line()?;
        let mut writer = self.writer.lock().map_err(|_| CaptureError::Poisoned)?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        ::log::debug!("Wrote {} event ({} bytes)", event.event, line.len());
        Ok(())
    }
}
