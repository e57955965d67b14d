//! `mdpress render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use mdpress_config::{CliSettings, Config};
use mdpress_pipeline::{RenderOutput, RenderPipeline};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render, or `-` for stdin (default: stdin).
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Height for images without one (overrides config).
    #[arg(long, env = "MDPRESS_IMAGE_HEIGHT")]
    height: Option<String>,

    /// Width for images without one (overrides config).
    #[arg(long, env = "MDPRESS_IMAGE_WIDTH")]
    width: Option<String>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Path to configuration file (default: auto-discover mdpress.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show INFO logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            default_height: self.height.clone(),
            default_width: self.width.clone(),
            gfm: self.no_gfm.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let markdown = read_input(self.input.as_deref())?;
        let rendered = render(&markdown, &config)?;

        output.render_warnings(&rendered.warnings);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered.html)?;
                tracing::info!(
                    path = %path.display(),
                    images = rendered.images,
                    "Wrote rendered HTML"
                );
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.html.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Render markdown with the pipeline for the current context.
fn render(markdown: &str, config: &Config) -> Result<RenderOutput, CliError> {
    let pipeline = RenderPipeline::detect().with_gfm(config.markdown.gfm);
    tracing::info!(backend = pipeline.backend_name(), "Rendering markdown");
    Ok(pipeline.render(markdown, &config.images)?)
}

/// Read markdown from a file, or from stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut markdown = String::new();
            std::io::stdin().read_to_string(&mut markdown)?;
            Ok(markdown)
        }
    }
}

#[cfg(test)]
mod tests {
    use mdpress_pipeline::RenderConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        std::fs::write(&path, "# Title\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "# Title\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("missing.md"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_render_uses_config() {
        let config = Config {
            images: RenderConfig {
                default_height: "11".to_owned(),
                default_width: "22".to_owned(),
            },
            ..Config::default()
        };
        let rendered = render("![a](a.png)", &config).unwrap();
        assert_eq!(
            rendered.html,
            r#"<p><img src="a.png" alt="a" height="11" width="22"></p>"#
        );
        assert_eq!(rendered.images, 1);
    }
}
