use crate::error::CaptureError;
use crate::event::Event;
use std::sync::Arc;

/// Destination for fully-built events
pub trait EventSink {
    /// Deliver a single event
    fn send(&self, event: Event) -> Result<(), CaptureError>;
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn send(&self, event: Event) -> Result<(), CaptureError> {
        (**self).send(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn send(&self, event: Event) -> Result<(), CaptureError> {
        (**self).send(event)
    }
}
