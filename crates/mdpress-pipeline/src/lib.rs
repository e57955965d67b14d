//! Markdown to HTML with explicit image dimensions.
//!
//! [`RenderPipeline`] renders markdown (typesetting `math` fences), parses the
//! HTML with a [`DocumentAdapter`](mdpress_dom::DocumentAdapter), gives every
//! `<img>` a `height` and `width` if it lacks one, and serializes the result.
//!
//! # Quick Start
//!
//! ```no_run
//! use mdpress_pipeline::{RenderConfig, render_markdown};
//!
//! let html = render_markdown("![logo](logo.png)", &RenderConfig::default()).unwrap();
//! assert!(html.contains(r#"height="320""#));
//! ```

mod config;
mod inject;
mod pipeline;

pub use config::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, InvalidDimension, RenderConfig};
pub use inject::{InjectionReport, inject};
pub use pipeline::{RenderError, RenderOutput, RenderPipeline, render_markdown};
