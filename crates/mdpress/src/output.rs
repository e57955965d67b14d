//! Colored terminal output for the render and check-config commands.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Width of the name column in `check-config` listings.
const SETTING_WIDTH: usize = 22;

/// Terminal output formatter.
///
/// Writes to stderr so rendered HTML on stdout stays clean.
pub(crate) struct Output {
    term: Term,
    key: Style,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            key: Style::new().cyan(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print the warnings collected while rendering, one per line.
    pub(crate) fn render_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            self.line(&self.yellow.apply_to(warning_line(warning)));
        }
    }

    /// Print where the configuration came from.
    pub(crate) fn config_source(&self, path: Option<&Path>) {
        match path {
            Some(path) => self.setting("config", path.display()),
            None => self.setting("config", "none found, using defaults"),
        }
    }

    /// Print one effective setting as an aligned `name value` row.
    pub(crate) fn setting(&self, name: &str, value: impl Display) {
        self.line(&self.key.apply_to(setting_line(name, value)));
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.green.apply_to(msg));
    }

    /// Print a fatal error (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&self.red.apply_to(format!("Error: {err}")));
    }

    fn line(&self, msg: &dyn Display) {
        let _ = self.term.write_line(&msg.to_string());
    }
}

fn warning_line(warning: &str) -> String {
    format!("warning: {warning}")
}

fn setting_line(name: &str, value: impl Display) -> String {
    format!("{name:<SETTING_WIDTH$} {value}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_setting_line_aligns_values() {
        assert_eq!(setting_line("markdown.gfm", true), "markdown.gfm           true");
        assert_eq!(setting_line("images.default_height", 320), "images.default_height  320");
    }

    #[test]
    fn test_long_setting_name_is_not_truncated() {
        let name = "a".repeat(SETTING_WIDTH + 3);
        assert_eq!(setting_line(&name, "x"), format!("{name} x"));
    }

    #[test]
    fn test_warning_line() {
        assert_eq!(
            warning_line("math block 1: parse error"),
            "warning: math block 1: parse error"
        );
    }
}
