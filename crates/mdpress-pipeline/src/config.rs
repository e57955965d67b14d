//! Image dimension defaults.

use serde::Deserialize;

/// Default `height` for images that lack one.
pub const DEFAULT_IMAGE_HEIGHT: &str = "320";
/// Default `width` for images that lack one.
pub const DEFAULT_IMAGE_WIDTH: &str = "40";

/// Values injected into images missing `height` or `width`.
///
/// Values are written verbatim. [`RenderConfig::validate`] checks they are
/// decimal pixel counts, but rendering does not require it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub default_height: String,
    pub default_width: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_height: DEFAULT_IMAGE_HEIGHT.to_owned(),
            default_width: DEFAULT_IMAGE_WIDTH.to_owned(),
        }
    }
}

/// A default dimension that is not a decimal pixel count.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{field} must be a pixel count made of digits, got {value:?}")]
pub struct InvalidDimension {
    pub field: &'static str,
    pub value: String,
}

impl RenderConfig {
    /// Check both defaults are non-empty ASCII digit strings.
    pub fn validate(&self) -> Result<(), InvalidDimension> {
        check_dimension("default_height", &self.default_height)?;
        check_dimension("default_width", &self.default_width)
    }
}

fn check_dimension(field: &'static str, value: &str) -> Result<(), InvalidDimension> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(InvalidDimension {
            field,
            value: value.to_owned(),
        })
    }
}
