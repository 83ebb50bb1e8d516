use crate::error::CaptureError;
use crate::page;
use crate::properties::Properties;
use std::sync::Arc;

/// Generic event-capture entry point of an analytics client
pub trait Capture {
    /// Record an event with the given name and properties
    fn capture(&self, event: &str, properties: Properties) -> Result<(), CaptureError>;

    /// Record a page view for `url`.
    ///
    /// Errors from [`Capture::capture`] are returned unchanged.
    fn page(&self, url: &str) -> Result<(), CaptureError> {
        page::report_page_view(self, url)
    }
}

impl<C: Capture + ?Sized> Capture for &C {
    fn capture(&self, event: &str, properties: Properties) -> Result<(), CaptureError> {
        (**self).capture(event, properties)
    }
}

impl<C: Capture + ?Sized> Capture for Box<C> {
    fn capture(&self, event: &str, properties: Properties) -> Result<(), CaptureError> {
        (**self).capture(event, properties)
    }
}

impl<C: Capture + ?Sized> Capture for Arc<C> {
    fn capture(&self, event: &str, properties: Properties) -> Result<(), CaptureError> {
        (**self).capture(event, properties)
    }
}
