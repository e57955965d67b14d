//! Browser backend using the native DOM through `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, DomParser, Element, HtmlElement, SupportedType};

use crate::document::{DocumentBackend, ImageElement, ParsedDocument};
use crate::error::DomError;

/// Document backend for code running in a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeBackend;

impl DocumentBackend for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn parse(&self, html: &str) -> Result<Box<dyn ParsedDocument>, DomError> {
        // Leading `<script>`, `<style>` or `<meta>` would otherwise move to the head.
        let input = format!("<body>{html}");
        let parser = DomParser::new().map_err(js_error)?;
        let document = parser
            .parse_from_string(&input, SupportedType::TextHtml)
            .map_err(js_error)?;
        let body = document.body().ok_or(DomError::MissingElement("body"))?;
        Ok(Box::new(NativeDocument {
            body,
            images: Vec::new(),
        }))
    }
}

/// Document parsed by the browser's `DOMParser`.
///
/// Fragment content lives in the body; serialization is `body.innerHTML`.
pub struct NativeDocument {
    body: HtmlElement,
    images: Vec<Element>,
}

impl ParsedDocument for NativeDocument {
    fn images(&mut self) -> Vec<&mut dyn ImageElement> {
        let collection = self.body.get_elements_by_tag_name("img");
        self.images = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect();
        self.images
            .iter_mut()
            .map(|image| image as &mut dyn ImageElement)
            .collect()
    }

    fn to_html(&self) -> Result<String, DomError> {
        Ok(self.body.inner_html())
    }
}

impl ImageElement for Element {
    fn has_attribute(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        Element::get_attribute(self, name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        Element::set_attribute(self, name, value).map_err(js_error)
    }
}

/// Exception message thrown by the DOM, or its debug form.
fn js_error(value: JsValue) -> DomError {
    let message = value
        .as_string()
        .or_else(|| value.dyn_ref::<DomException>().map(DomException::message))
        .unwrap_or_else(|| format!("{value:?}"));
    DomError::Native(message)
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;
    use crate::library::LibraryBackend;

    wasm_bindgen_test_configure!(run_in_browser);

    const HTML: &str = concat!(
        "<p><img src=\"a.png\"></p>",
        "<p><img src=\"b.png\" width=\"100\" height=\"50\"></p>",
        "<img src=\"c.png\" width=\"10\"><img src=\"d.png\" height=\"\">",
    );

    fn fill_defaults(backend: &dyn DocumentBackend) -> Vec<(Option<String>, Option<String>)> {
        let mut doc = backend.parse(HTML).unwrap();
        for image in doc.images() {
            if !image.has_attribute("height") {
                image.set_attribute("height", "320").unwrap();
            }
            if !image.has_attribute("width") {
                image.set_attribute("width", "40").unwrap();
            }
        }
        let html = backend.serialize(doc).unwrap();

        let mut reparsed = backend.parse(&html).unwrap();
        reparsed
            .images()
            .iter()
            .map(|image| (image.get_attribute("height"), image.get_attribute("width")))
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_native_finds_images_in_order() {
        let mut doc = NativeBackend.parse(HTML).unwrap();
        let sources: Vec<_> = doc
            .images()
            .iter()
            .map(|image| image.get_attribute("src"))
            .collect();
        assert_eq!(
            sources,
            ["a.png", "b.png", "c.png", "d.png"].map(|s| Some(s.to_owned()))
        );
    }

    #[wasm_bindgen_test]
    fn test_rejected_attribute_reports_dom_message() {
        let mut doc = NativeBackend.parse("<img>").unwrap();
        let mut images = doc.images();
        let err = images[0].set_attribute("1bad", "x").unwrap_err();
        assert!(matches!(err, DomError::Native(ref message) if !message.is_empty()));
    }

    #[wasm_bindgen_test]
    fn test_native_keeps_leading_style_in_body() {
        let html = "<style>p { color: red; }</style><p>x</p>";
        let doc = NativeBackend.parse(html).unwrap();
        assert_eq!(doc.to_html().unwrap(), html);
    }

    #[cfg(feature = "virtual-dom")]
    #[wasm_bindgen_test]
    fn test_native_and_library_agree() {
        let native = fill_defaults(&NativeBackend);
        let library = fill_defaults(&LibraryBackend::new());
        assert_eq!(native, library);
        assert_eq!(
            native[3],
            (Some(String::new()), Some("40".to_owned()))
        );
    }
}
