use crate::error::CaptureError;
use crate::event::Event;
use crate::sinks::EventSink;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Sink that forwards events into a bounded tokio channel.
///
/// Sending never blocks: a full channel is reported as
/// [`CaptureError::ChannelFull`] instead of waiting for capacity.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Event>,
}

impl ChannelSink {
    /// Create a sink and the receiver that yields its events
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel::<Event>(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Wrap an existing sender
    pub fn from_sender(tx: mpsc::Sender<Event>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn send(&self, event: Event) -> Result<(), CaptureError> {
        match self.tx.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(event)) => {
                ::log::warn!("Event channel full, dropping {}", event.event);
                Err(CaptureError::ChannelFull)
            }
            Err(TrySendError::Closed(_)) => Err(CaptureError::ChannelClosed),
        }
    }
}
