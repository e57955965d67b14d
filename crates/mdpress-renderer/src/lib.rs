//! Markdown to HTML rendering with fenced math typesetting.
//!
//! This crate provides a generic [`MarkdownRenderer`] that produces HTML
//! through the [`RenderBackend`] trait, and a [`MathProcessor`] that renders
//! ```` ```math ```` fences with KaTeX.
//!
//! # Architecture
//!
//! - [`HtmlBackend`]: HTML5 output; plain code blocks are `<pre><code>` without
//!   any syntax highlighting
//! - [`CodeBlockProcessor`]: seam for fenced blocks that need special output
//! - [`MathProcessor`] / [`MathTypesetter`]: math fences, with a literal-text
//!   fallback when the typesetter fails
//!
//! # Example
//!
//! ```no_run
//! use mdpress_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let markdown = "# Hello\n\n```math\nx^2\n```";
//! let result = MarkdownRenderer::<HtmlBackend>::math_aware().render_markdown(markdown);
//! assert!(result.html.contains("katex"));
//! ```

mod backend;
mod code_block;
mod html;
mod math;
mod renderer;
mod state;
mod util;

pub use backend::RenderBackend;
pub use code_block::{CodeBlockProcessor, ProcessResult};
pub use html::HtmlBackend;
pub use math::{KatexTypesetter, MATH_LANGUAGE, MathError, MathProcessor, MathTypesetter};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{escape_html, slugify};
