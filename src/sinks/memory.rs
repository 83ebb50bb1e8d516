use crate::error::CaptureError;
use crate::event::Event;
use crate::sinks::EventSink;
use std::sync::{Mutex, MutexGuard};

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Result<Vec<Event>, CaptureError> {
        Ok(self.lock()?.clone())
    }

    /// Remove and return all recorded events
    pub fn take(&self) -> Result<Vec<Event>, CaptureError> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    pub fn len(&self) -> Result<usize, CaptureError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CaptureError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Event>>, CaptureError> {
        self.events.lock().map_err(|_| CaptureError::Poisoned)
    }
}

impl EventSink for MemorySink {
    fn send(&self, event: Event) -> Result<(), CaptureError> {
        self.lock()?.push(event);
        Ok(())
    }
}
