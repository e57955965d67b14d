//! `mdpress check-config` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdpress_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check-config command.
#[derive(Args)]
pub(crate) struct CheckConfigArgs {
    /// Path to configuration file (default: auto-discover mdpress.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckConfigArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        output.config_source(config.config_path.as_deref());
        output.setting("images.default_height", &config.images.default_height);
        output.setting("images.default_width", &config.images.default_width);
        output.setting("markdown.gfm", config.markdown.gfm);
        output.success("Configuration is valid");
        Ok(())
    }
}
