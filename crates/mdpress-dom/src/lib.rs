//! HTML document adapter.
//!
//! Parses rendered HTML into a mutable document, exposes its images, and
//! serializes it back, using whichever backend suits the execution context:
//!
//! - [`NativeBackend`] (wasm32 only): the browser's `DOMParser`
//! - [`LibraryBackend`]: a virtual document built on `html5ever`, enabled by
//!   the default `virtual-dom` feature
//!
//! When no parser is available the library backend returns a
//! [`PassthroughDocument`], which has no images and serializes to its input
//! unchanged.
//!
//! # Example
//!
//! ```
//! use mdpress_dom::{DocumentAdapter, ExecutionContext};
//!
//! let adapter = DocumentAdapter::for_context(ExecutionContext::Server);
//! let mut doc = adapter.parse(r#"<p><img src="a.png"></p>"#).unwrap();
//! for image in adapter.query_images(doc.as_mut()) {
//!     if !image.has_attribute("width") {
//!         image.set_attribute("width", "40").unwrap();
//!     }
//! }
//! let html = adapter.serialize(doc).unwrap();
//! ```

mod adapter;
mod context;
mod document;
mod error;
mod library;
#[cfg(target_arch = "wasm32")]
mod native;

#[cfg(feature = "virtual-dom")]
mod tree;
#[cfg(feature = "virtual-dom")]
mod virtual_dom;

pub use adapter::DocumentAdapter;
pub use context::ExecutionContext;
pub use document::{DocumentBackend, ImageElement, ParsedDocument, PassthroughDocument};
pub use error::DomError;
pub use library::LibraryBackend;
#[cfg(target_arch = "wasm32")]
pub use native::{NativeBackend, NativeDocument};
#[cfg(feature = "virtual-dom")]
pub use tree::{VirtualDocument, VirtualImage};
#[cfg(feature = "virtual-dom")]
pub use virtual_dom::VirtualDom;
