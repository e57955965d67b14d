//! Virtual document tree backed by `markup5ever_rcdom`.

use std::cell::RefCell;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

use crate::document::{ImageElement, ParsedDocument};
use crate::error::DomError;

/// HTML fragment parsed by [`VirtualDom`](crate::VirtualDom).
///
/// The fragment is the children of the parsed document's `<body>`, and
/// serialization writes only those children.
pub struct VirtualDocument {
    body: Handle,
    images: Vec<VirtualImage>,
}

impl VirtualDocument {
    pub(crate) fn new(body: Handle) -> Self {
        Self {
            body,
            images: Vec::new(),
        }
    }

    /// Number of top-level nodes in the fragment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.children.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ParsedDocument for VirtualDocument {
    fn images(&mut self) -> Vec<&mut dyn ImageElement> {
        self.images.clear();
        collect_images(&self.body, &mut self.images);
        self.images
            .iter_mut()
            .map(|image| image as &mut dyn ImageElement)
            .collect()
    }

    fn to_html(&self) -> Result<String, DomError> {
        let mut out = Vec::new();
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..SerializeOpts::default()
        };
        serialize(&mut out, &SerializableHandle::from(self.body.clone()), opts)?;
        Ok(String::from_utf8(out)?)
    }
}

/// `<img>` elements under `node`, in document order.
fn collect_images(node: &Handle, images: &mut Vec<VirtualImage>) {
    for child in node.children.borrow().iter() {
        if let NodeData::Element { ref name, .. } = child.data {
            if name.local.as_ref() == "img" {
                images.push(VirtualImage {
                    node: child.clone(),
                });
            }
        }
        collect_images(child, images);
    }
}

/// `<img>` element of a [`VirtualDocument`].
///
/// Attribute names are matched ASCII case-insensitively. Values are the
/// decoded text, so `a &amp; b` reads as `a & b`.
pub struct VirtualImage {
    node: Handle,
}

impl VirtualImage {
    fn attrs(&self) -> Option<&RefCell<Vec<Attribute>>> {
        match self.node.data {
            NodeData::Element { ref attrs, .. } => Some(attrs),
            _ => None,
        }
    }
}

impl ImageElement for VirtualImage {
    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attrs()?
            .borrow()
            .iter()
            .find(|attr| (*attr.name.local).eq_ignore_ascii_case(name))
            .map(|attr| attr.value.to_string())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        let attrs = self.attrs().ok_or(DomError::MissingElement("img"))?;
        let mut attrs = attrs.borrow_mut();
        match attrs
            .iter_mut()
            .find(|attr| (*attr.name.local).eq_ignore_ascii_case(name))
        {
            Some(attr) => attr.value = StrTendril::from_slice(value),
            None => attrs.push(Attribute {
                name: QualName::new(
                    None,
                    Namespace::from(""),
                    LocalName::from(name.to_ascii_lowercase()),
                ),
                value: StrTendril::from_slice(value),
            }),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::virtual_dom::VirtualDom;

    fn parse(html: &str) -> VirtualDocument {
        VirtualDom::shared().parse(html).unwrap()
    }

    #[test]
    fn test_untouched_fragment_round_trips() {
        let html = "<h1 id=\"t\">Title</h1>\n<p>a &amp; b <em>c</em></p>\n<hr>";
        assert_eq!(parse(html).to_html().unwrap(), html);
    }

    #[test]
    fn test_images_in_document_order() {
        let mut doc = parse(r#"<div><p><img src="a.png"></p></div><img src="b.png">"#);
        let sources: Vec<_> = doc
            .images()
            .iter()
            .map(|image| image.get_attribute("src"))
            .collect();
        assert_eq!(sources, [Some("a.png".to_owned()), Some("b.png".to_owned())]);
    }

    #[test]
    fn test_attribute_values_are_decoded() {
        let mut doc = parse(r#"<img alt="a &amp; b" title='x "y"'>"#);
        let images = doc.images();
        assert_eq!(images[0].get_attribute("alt").as_deref(), Some("a & b"));
        assert_eq!(images[0].get_attribute("title").as_deref(), Some("x \"y\""));
    }

    #[test]
    fn test_attribute_names_ignore_case() {
        let mut doc = parse(r#"<IMG SRC="a.png" Width="5">"#);
        let images = doc.images();
        assert!(images[0].has_attribute("width"));
        assert!(images[0].has_attribute("WIDTH"));
        assert!(!images[0].has_attribute("height"));
    }

    #[test]
    fn test_set_attribute_appends_and_replaces() {
        let mut doc = parse(r#"<img src="a.png" width="1">"#);
        for image in doc.images() {
            image.set_attribute("WIDTH", "2").unwrap();
            image.set_attribute("height", "3").unwrap();
        }
        assert_eq!(
            doc.to_html().unwrap(),
            r#"<img src="a.png" width="2" height="3">"#
        );
    }

    #[test]
    fn test_set_attribute_value_is_escaped() {
        let mut doc = parse("<img>");
        for image in doc.images() {
            image.set_attribute("alt", "\"quoted\" & more").unwrap();
        }
        assert_eq!(
            doc.to_html().unwrap(),
            r#"<img alt="&quot;quoted&quot; &amp; more">"#
        );
    }

    #[test]
    fn test_text_with_angle_bracket_is_not_markup() {
        let mut doc = parse("<div>\n1 < 2 <img src=\"a.png\">\n</div>");
        assert_eq!(doc.images().len(), 1);
        assert_eq!(
            doc.to_html().unwrap(),
            "<div>\n1 &lt; 2 <img src=\"a.png\">\n</div>"
        );
    }

    #[test]
    fn test_script_content_is_raw_text() {
        let html = "<script>if (a<b) { x(); }</script><img src=\"a.png\">";
        let mut doc = parse(html);
        assert_eq!(doc.images().len(), 1);
        assert_eq!(doc.to_html().unwrap(), html);
    }

    #[test]
    fn test_img_inside_script_is_not_an_image() {
        let mut doc = parse("<script>document.write('<img src=\"x.png\">')</script>");
        assert!(doc.images().is_empty());
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        let mut doc = parse("<!-- draft note\n\n<img src=\"b.png\">\n");
        assert!(doc.images().is_empty());
        assert_eq!(
            doc.to_html().unwrap(),
            "<!-- draft note\n\n<img src=\"b.png\">\n-->"
        );
    }

    #[test]
    fn test_leading_style_stays_in_fragment() {
        let html = "<style>p { color: red; }</style><p>x</p>";
        assert_eq!(parse(html).to_html().unwrap(), html);
    }

    #[test]
    fn test_unclosed_tags_are_closed() {
        let doc = parse("<p><em>open");
        assert_eq!(doc.to_html().unwrap(), "<p><em>open</em></p>");
    }

    #[test]
    fn test_empty_fragment() {
        let doc = parse("");
        assert!(doc.is_empty());
        assert_eq!(doc.to_html().unwrap(), "");
    }
}
