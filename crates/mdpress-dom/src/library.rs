//! Library backend: virtual document for non-browser contexts.

use crate::document::{DocumentBackend, ParsedDocument, PassthroughDocument};
use crate::error::DomError;
#[cfg(feature = "virtual-dom")]
use crate::virtual_dom::VirtualDom;

/// Document backend for server-side rendering.
///
/// Parses with the shared [`VirtualDom`](crate::VirtualDom) handle. When the
/// library is unavailable (built without the `virtual-dom` feature, or
/// disabled with [`LibraryBackend::unavailable`]), documents pass through
/// unchanged and images are left as they are.
#[derive(Clone, Copy, Debug)]
pub struct LibraryBackend {
    enabled: bool,
}

impl LibraryBackend {
    /// Backend that uses the virtual document library when it is available.
    #[must_use]
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Backend that behaves as if the library were missing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { enabled: false }
    }

    /// Whether documents will be parsed rather than passed through.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.enabled && cfg!(feature = "virtual-dom")
    }

    #[cfg(feature = "virtual-dom")]
    fn parse_virtual(&self, html: &str) -> Option<Result<Box<dyn ParsedDocument>, DomError>> {
        if !self.enabled {
            return None;
        }
        Some(
            VirtualDom::shared()
                .parse(html)
                .map(|doc| Box::new(doc) as Box<dyn ParsedDocument>),
        )
    }

    #[cfg(not(feature = "virtual-dom"))]
    #[allow(clippy::unused_self)]
    fn parse_virtual(&self, _html: &str) -> Option<Result<Box<dyn ParsedDocument>, DomError>> {
        None
    }
}

impl Default for LibraryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBackend for LibraryBackend {
    fn name(&self) -> &'static str {
        "library"
    }

    fn parse(&self, html: &str) -> Result<Box<dyn ParsedDocument>, DomError> {
        if let Some(result) = self.parse_virtual(html) {
            return result;
        }
        tracing::debug!("Virtual document unavailable, passing HTML through");
        Ok(Box::new(PassthroughDocument::new(html)))
    }
}
