//! Image dimension injection.

use mdpress_dom::{DomError, ParsedDocument};

use crate::config::RenderConfig;

const HEIGHT: &str = "height";
const WIDTH: &str = "width";

/// Counts from one [`inject`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InjectionReport {
    /// Images visited.
    pub images: usize,
    /// `height` and `width` attributes added.
    pub attributes_set: usize,
}

/// Give every image in `doc` a `height` and a `width`.
///
/// Each attribute is set from `config` only when absent. Present attributes
/// are never changed, even when empty, so running this twice is the same as
/// running it once.
pub fn inject(
    doc: &mut dyn ParsedDocument,
    config: &RenderConfig,
) -> Result<InjectionReport, DomError> {
    let mut report = InjectionReport::default();
    for image in doc.images() {
        report.images += 1;
        if !image.has_attribute(HEIGHT) {
            image.set_attribute(HEIGHT, &config.default_height)?;
            report.attributes_set += 1;
        }
        if !image.has_attribute(WIDTH) {
            image.set_attribute(WIDTH, &config.default_width)?;
            report.attributes_set += 1;
        }
    }
    Ok(report)
}
