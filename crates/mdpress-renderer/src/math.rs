//! Typesetting for fenced `math` code blocks.
//!
//! A block tagged `math` is handed to a [`MathTypesetter`]. The default
//! [`KatexTypesetter`] runs KaTeX with `throw_on_error` disabled, so malformed
//! TeX is rendered in KaTeX's error style instead of failing. If the engine
//! itself fails, [`MathProcessor`] emits the escaped block source and records
//! a warning; the error never leaves the renderer.
//!
//! Attribute `display=inline` on the fence (```` ```math display=inline ````)
//! selects inline mode; blocks are typeset in display mode otherwise.

use std::collections::HashMap;

use crate::code_block::{CodeBlockProcessor, ProcessResult};
use crate::html::HtmlBackend;
use crate::renderer::MarkdownRenderer;
use crate::state::escape_html;

/// Fence language that selects math typesetting.
pub const MATH_LANGUAGE: &str = "math";

/// Error from a math typesetting engine.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MathError {
    /// Engine options could not be built.
    #[error("invalid typesetter options: {0}")]
    Options(String),

    /// The engine failed to produce output.
    #[error("typesetting failed: {0}")]
    Engine(String),
}

/// Converts math notation into an HTML fragment.
pub trait MathTypesetter {
    /// Typeset `source`, in display (block) mode when `display` is true.
    fn typeset(&self, source: &str, display: bool) -> Result<String, MathError>;
}

/// KaTeX-backed typesetter producing HTML plus MathML.
#[derive(Clone, Copy, Debug, Default)]
pub struct KatexTypesetter;

impl MathTypesetter for KatexTypesetter {
    fn typeset(&self, source: &str, display: bool) -> Result<String, MathError> {
        let opts = katex::Opts::builder()
            .display_mode(display)
            .throw_on_error(false)
            .build()
            .map_err(|e| MathError::Options(e.to_string()))?;
        katex::render_with_opts(source, &opts).map_err(|e| MathError::Engine(e.to_string()))
    }
}

/// Code block processor for `math` fences.
pub struct MathProcessor<T: MathTypesetter = KatexTypesetter> {
    typesetter: T,
    warnings: Vec<String>,
}

impl<T: MathTypesetter> MathProcessor<T> {
    /// Create a processor around the given typesetter.
    #[must_use]
    pub fn new(typesetter: T) -> Self {
        Self {
            typesetter,
            warnings: Vec::new(),
        }
    }
}

impl Default for MathProcessor<KatexTypesetter> {
    fn default() -> Self {
        Self::new(KatexTypesetter)
    }
}

impl<T: MathTypesetter> CodeBlockProcessor for MathProcessor<T> {
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult {
        if language != MATH_LANGUAGE {
            return ProcessResult::PassThrough;
        }

        let display = attrs.get("display").is_none_or(|mode| mode != "inline");
        match self.typesetter.typeset(source, display) {
            Ok(html) => ProcessResult::Inline(html),
            Err(e) => {
                tracing::warn!(index, error = %e, "Math typesetting failed, emitting source text");
                self.warnings.push(format!("math block {index}: {e}"));
                ProcessResult::Inline(escape_html(source))
            }
        }
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl MarkdownRenderer<HtmlBackend> {
    /// HTML renderer that typesets `math` fences with KaTeX.
    #[must_use]
    pub fn math_aware() -> Self {
        Self::math_aware_with(KatexTypesetter)
    }

    /// HTML renderer that typesets `math` fences with the given typesetter.
    #[must_use]
    pub fn math_aware_with<T: MathTypesetter + 'static>(typesetter: T) -> Self {
        Self::new().with_processor(MathProcessor::new(typesetter))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Typesetter that wraps the source so output is predictable.
    struct EchoTypesetter {
        last_display: Cell<Option<bool>>,
    }

    impl EchoTypesetter {
        fn new() -> Self {
            Self {
                last_display: Cell::new(None),
            }
        }
    }

    impl MathTypesetter for EchoTypesetter {
        fn typeset(&self, source: &str, display: bool) -> Result<String, MathError> {
            self.last_display.set(Some(display));
            Ok(format!(r#"<span class="math">{}</span>"#, source.trim().len()))
        }
    }

    struct FailingTypesetter;

    impl MathTypesetter for FailingTypesetter {
        fn typeset(&self, _source: &str, _display: bool) -> Result<String, MathError> {
            Err(MathError::Engine("engine unavailable".to_owned()))
        }
    }

    #[test]
    fn test_non_math_language_passes_through() {
        let mut processor = MathProcessor::new(EchoTypesetter::new());
        let result = processor.process("js", &HashMap::new(), "console.log(1)\n", 0);
        assert_eq!(result, ProcessResult::PassThrough);
    }

    #[test]
    fn test_language_match_is_exact() {
        let mut processor = MathProcessor::new(EchoTypesetter::new());
        let result = processor.process("Math", &HashMap::new(), "x^2\n", 0);
        assert_eq!(result, ProcessResult::PassThrough);
    }

    #[test]
    fn test_math_uses_typesetter_output() {
        let mut processor = MathProcessor::new(EchoTypesetter::new());
        let result = processor.process("math", &HashMap::new(), "x^2\n", 0);
        assert_eq!(
            result,
            ProcessResult::Inline(r#"<span class="math">3</span>"#.to_owned())
        );
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_display_mode_by_default() {
        let mut processor = MathProcessor::new(EchoTypesetter::new());
        processor.process("math", &HashMap::new(), "x", 0);
        assert_eq!(processor.typesetter.last_display.get(), Some(true));
    }

    #[test]
    fn test_inline_display_attribute() {
        let mut processor = MathProcessor::new(EchoTypesetter::new());
        let attrs = HashMap::from([("display".to_owned(), "inline".to_owned())]);
        processor.process("math", &attrs, "x", 0);
        assert_eq!(processor.typesetter.last_display.get(), Some(false));
    }

    #[test]
    fn test_failure_falls_back_to_source_text() {
        let mut processor = MathProcessor::new(FailingTypesetter);
        let result = processor.process("math", &HashMap::new(), "x^2\n", 3);
        assert_eq!(result, ProcessResult::Inline("x^2\n".to_owned()));
        assert_eq!(
            processor.warnings(),
            ["math block 3: typesetting failed: engine unavailable".to_owned()]
        );
    }

    #[test]
    fn test_failure_fallback_is_escaped() {
        let mut processor = MathProcessor::new(FailingTypesetter);
        let result = processor.process("math", &HashMap::new(), "a<b", 0);
        assert_eq!(result, ProcessResult::Inline("a&lt;b".to_owned()));
    }

    #[test]
    fn test_renderer_math_fallback() {
        let mut renderer = MarkdownRenderer::math_aware_with(FailingTypesetter);
        let result = renderer.render_markdown("```math\nx^2\n```");
        assert_eq!(result.html, "x^2\n");
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_renderer_non_math_block_untouched() {
        let mut renderer = MarkdownRenderer::math_aware_with(FailingTypesetter);
        let result = renderer.render_markdown("```js\nconsole.log(1)\n```");
        assert_eq!(result.html, "<pre><code>console.log(1)\n</code></pre>");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_katex_typesets_math_block() {
        let mut renderer = MarkdownRenderer::math_aware();
        let result = renderer.render_markdown("```math\nx^2\n```");
        assert!(result.html.contains("katex"));
        assert!(!result.html.contains("<pre>"));
        assert!(result.warnings.is_empty());

        // The TeX source survives only as the MathML annotation.
        let (before, rest) = result.html.split_once("<annotation").unwrap();
        let (annotation, after) = rest.split_once("</annotation>").unwrap();
        assert!(annotation.contains("x^2"));
        assert!(!before.contains("x^2"));
        assert!(!after.contains("x^2"));
    }

    #[test]
    fn test_katex_does_not_fail_on_bad_tex() {
        let result = KatexTypesetter.typeset(r"\frac{", true);
        assert!(result.is_ok());
    }
}
