//! Markdown to HTML pipeline.

use mdpress_dom::{DocumentAdapter, DomError};
use mdpress_renderer::{HtmlBackend, MarkdownRenderer};

use crate::config::RenderConfig;
use crate::inject::inject;

/// Error returned when the pipeline cannot produce HTML.
///
/// Math typesetting failures and a missing document backend are handled
/// inside the pipeline and never surface here.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The document backend failed while parsing, modifying, or serializing.
    #[error("document processing failed")]
    Document(#[from] DomError),
}

/// Result of [`RenderPipeline::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutput {
    /// Final HTML fragment.
    pub html: String,
    /// Non-fatal problems, such as math blocks emitted as plain text.
    pub warnings: Vec<String>,
    /// Number of images in the fragment.
    pub images: usize,
}

/// Renders markdown and gives every image explicit dimensions.
///
/// The document backend is chosen when the pipeline is built. A pipeline can
/// be shared between threads; each call renders into its own document.
#[derive(Debug)]
pub struct RenderPipeline {
    adapter: DocumentAdapter,
    gfm: bool,
}

impl RenderPipeline {
    #[must_use]
    pub fn new(adapter: DocumentAdapter) -> Self {
        Self { adapter, gfm: true }
    }

    /// Pipeline with the backend for the detected execution context.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(DocumentAdapter::detect())
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.adapter.backend_name()
    }

    /// Render markdown to an HTML fragment.
    pub fn render_markdown(&self, markdown: &str, config: &RenderConfig) -> Result<String, RenderError> {
        self.render(markdown, config).map(|output| output.html)
    }

    /// Render markdown, keeping warnings and the image count.
    pub fn render(&self, markdown: &str, config: &RenderConfig) -> Result<RenderOutput, RenderError> {
        let rendered = MarkdownRenderer::<HtmlBackend>::math_aware()
            .with_gfm(self.gfm)
            .render_markdown(markdown);
        for warning in &rendered.warnings {
            tracing::debug!(warning = %warning, "Markdown render warning");
        }

        let mut doc = self.adapter.parse(&rendered.html)?;
        let report = inject(doc.as_mut(), config)?;
        tracing::debug!(
            backend = self.adapter.backend_name(),
            images = report.images,
            attributes_set = report.attributes_set,
            "Injected image dimensions"
        );
        let html = self.adapter.serialize(doc)?;

        Ok(RenderOutput {
            html,
            warnings: rendered.warnings,
            images: report.images,
        })
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::detect()
    }
}

/// Render markdown with a pipeline for the detected execution context.
pub fn render_markdown(markdown: &str, config: &RenderConfig) -> Result<String, RenderError> {
    RenderPipeline::detect().render_markdown(markdown, config)
}
