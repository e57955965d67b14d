//! Backend-neutral document model.
//!
//! A [`DocumentBackend`] turns HTML text into a [`ParsedDocument`] and back.
//! Callers only see documents through [`ParsedDocument::images`] and the
//! [`ImageElement`] attribute accessors, so attribute presence behaves the
//! same whichever backend produced the document.

use crate::error::DomError;

/// Attribute access on an `<img>` element.
///
/// An absent attribute and an attribute set to the empty string are distinct:
/// `has_attribute` is true for the latter.
pub trait ImageElement {
    /// Whether the attribute is present (with any value, including empty).
    fn has_attribute(&self, name: &str) -> bool;

    /// Attribute value, or `None` when absent.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute, replacing any existing value.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), DomError>;
}

/// A mutable document owned by a single render call.
pub trait ParsedDocument {
    /// All image elements, in document order.
    fn images(&mut self) -> Vec<&mut dyn ImageElement>;

    /// Serialize the document back to an HTML fragment.
    fn to_html(&self) -> Result<String, DomError>;
}

/// Converts between HTML text and [`ParsedDocument`]s.
pub trait DocumentBackend: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Parse an HTML fragment.
    fn parse(&self, html: &str) -> Result<Box<dyn ParsedDocument>, DomError>;

    /// Serialize a document produced by [`parse`](Self::parse).
    fn serialize(&self, doc: Box<dyn ParsedDocument>) -> Result<String, DomError> {
        doc.to_html()
    }
}

/// Document returned when no parser is available.
///
/// Has no images and serializes to exactly the HTML it was created from.
#[derive(Clone, Debug)]
pub struct PassthroughDocument {
    html: String,
}

impl PassthroughDocument {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl ParsedDocument for PassthroughDocument {
    fn images(&mut self) -> Vec<&mut dyn ImageElement> {
        Vec::new()
    }

    fn to_html(&self) -> Result<String, DomError> {
        Ok(self.html.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_is_identity() {
        let html = r#"<p>Text <img src="a.png"> &amp; more</p>"#;
        let mut doc = PassthroughDocument::new(html);
        assert!(doc.images().is_empty());
        assert_eq!(doc.to_html().unwrap(), html);
    }

    #[test]
    fn test_passthrough_preserves_malformed_input() {
        let html = "<div><p>unclosed <b>tags";
        let doc = PassthroughDocument::new(html);
        assert_eq!(doc.to_html().unwrap(), html);
    }
}
