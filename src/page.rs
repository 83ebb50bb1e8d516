use crate::capture::Capture;
use crate::error::CaptureError;
use crate::properties::Properties;

/// Event name used for page views
pub const PAGEVIEW_EVENT: &str = "$pageview";

/// Property key holding the viewed URL
pub const CURRENT_URL: &str = "$current_url";

/// Build the property map for a page view of `url`.
///
/// The URL is stored as-is; it is not parsed or normalized.
pub fn pageview_properties(url: &str) -> Properties {
    Properties::new().with(CURRENT_URL, url)
}

/// Report a page view of `url` through `capture`
pub fn report_page_view<C: Capture + ?Sized>(capture: &C, url: &str) -> Result<(), CaptureError> {
    ::log::trace!("Reporting page view: {}", url);
    capture.capture(PAGEVIEW_EVENT, pageview_properties(url))
}
