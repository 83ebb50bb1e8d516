use crate::capture::Capture;
use crate::client::Client;
use crate::properties::Properties;
use crate::sinks::{ChannelSink, EventSink};
use tokio::sync::mpsc;

/// Events requested in a single run
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// URLs to report as page views
    pub urls: Vec<String>,

    /// Optional custom event with its properties
    pub event: Option<(String, Properties)>,
}

impl Batch {
    /// Number of events this batch will capture
    pub fn len(&self) -> usize {
        self.urls.len() + usize::from(self.event.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of dispatching a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Events written to the output
    pub written: usize,

    /// Captures or writes that failed
    pub failures: usize,
}

/// Capture every event of `batch` and drain them into `output`.
///
/// The channel between client and output is sized to hold the whole batch,
/// so no event is dropped for lack of capacity regardless of
/// `channel_capacity`.
pub async fn dispatch<S>(
    batch: &Batch,
    distinct_id: Option<String>,
    channel_capacity: usize,
    output: S,
) -> Summary
where
    S: EventSink + Send + 'static,
{
    let capacity = channel_capacity.max(batch.len()).max(1);
    let (tx, mut rx) = mpsc::channel(capacity);

    let mut client = Client::new(ChannelSink::from_sender(tx));
    if let Some(distinct_id) = distinct_id {
        client = client.with_distinct_id(distinct_id);
    }

    // Drain the channel into the output
    let writer = tokio::spawn(async move {
        let mut summary = Summary::default();
        while let Some(event) = rx.recv().await {
            match output.send(event) {
                Ok(()) => summary.written += 1,
                Err(e) => {
                    ::log::error!("{}", e);
                    summary.failures += 1;
                }
            }
        }
        summary
    });

    let mut failures = 0;
    for url in &batch.urls {
        if let Err(e) = client.page(url) {
            ::log::error!("Failed to report page view for {}: {}", url, e);
            failures += 1;
        }
    }

    if let Some((event, properties)) = &batch.event {
        if let Err(e) = client.capture(event, properties.clone()) {
            ::log::error!("Failed to capture {}: {}", event, e);
            failures += 1;
        }
    }

    // Dropping the client closes the channel so the writer can finish
    drop(client);

    match writer.await {
        Ok(summary) => Summary {
            written: summary.written,
            failures: summary.failures + failures,
        },
        Err(e) => {
            ::log::error!("Event writer task failed: {}", e);
            Summary {
                written: 0,
                failures: failures + batch.len(),
            }
        }
    }
}
