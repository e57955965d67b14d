//! Backend selection.

use crate::context::ExecutionContext;
use crate::document::{DocumentBackend, ImageElement, ParsedDocument};
use crate::error::DomError;
use crate::library::LibraryBackend;

/// Parses and serializes HTML with the backend chosen for the current context.
///
/// The backend is fixed at construction. Callers never branch on which one is
/// in use.
pub struct DocumentAdapter {
    backend: Box<dyn DocumentBackend>,
}

impl DocumentAdapter {
    /// Adapter with the backend for `context`.
    ///
    /// Asking for the browser backend outside a browser build falls back to
    /// the library backend.
    #[must_use]
    pub fn for_context(context: ExecutionContext) -> Self {
        let adapter = match context {
            ExecutionContext::Browser => browser_adapter(),
            ExecutionContext::Server => Self::with_backend(LibraryBackend::new()),
        };
        tracing::debug!(?context, backend = adapter.backend_name(), "Selected document backend");
        adapter
    }

    /// Adapter for the detected execution context.
    #[must_use]
    pub fn detect() -> Self {
        Self::for_context(ExecutionContext::detect())
    }

    /// Adapter around an explicit backend.
    #[must_use]
    pub fn with_backend(backend: impl DocumentBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn parse(&self, html: &str) -> Result<Box<dyn ParsedDocument>, DomError> {
        self.backend.parse(html)
    }

    pub fn serialize(&self, doc: Box<dyn ParsedDocument>) -> Result<String, DomError> {
        self.backend.serialize(doc)
    }

    /// Image elements of `doc` in document order.
    pub fn query_images<'d>(&self, doc: &'d mut dyn ParsedDocument) -> Vec<&'d mut dyn ImageElement> {
        doc.images()
    }
}

impl Default for DocumentAdapter {
    fn default() -> Self {
        Self::detect()
    }
}

impl std::fmt::Debug for DocumentAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAdapter")
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_adapter() -> DocumentAdapter {
    DocumentAdapter::with_backend(crate::native::NativeBackend)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_adapter() -> DocumentAdapter {
    tracing::warn!("Browser document backend requested outside a browser, using library backend");
    DocumentAdapter::with_backend(LibraryBackend::new())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_server_context_uses_library() {
        assert_eq!(DocumentAdapter::detect().backend_name(), "library");
        assert_eq!(
            DocumentAdapter::for_context(ExecutionContext::Server).backend_name(),
            "library"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_browser_context_falls_back_outside_browser() {
        let adapter = DocumentAdapter::for_context(ExecutionContext::Browser);
        assert_eq!(adapter.backend_name(), "library");
    }

    #[test]
    fn test_unavailable_backend_round_trip() {
        let adapter = DocumentAdapter::with_backend(LibraryBackend::unavailable());
        let html = "<p><img src=\"a.png\"></p>";
        let mut doc = adapter.parse(html).unwrap();
        assert!(adapter.query_images(doc.as_mut()).is_empty());
        assert_eq!(adapter.serialize(doc).unwrap(), html);
    }

    #[cfg(feature = "virtual-dom")]
    #[test]
    fn test_query_images() {
        let adapter = DocumentAdapter::with_backend(LibraryBackend::new());
        let mut doc = adapter
            .parse(r#"<img src="a.png"><p><img src="b.png" width="10"></p>"#)
            .unwrap();
        let images = adapter.query_images(doc.as_mut());
        assert_eq!(images.len(), 2);
        assert_eq!(images[1].get_attribute("width"), Some("10".to_owned()));
    }
}
