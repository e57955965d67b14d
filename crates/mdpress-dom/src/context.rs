//! Execution context detection.

/// Where the code is running, which decides the document backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// A browser with native DOM APIs.
    Browser,
    /// Any other host process.
    Server,
}

impl ExecutionContext {
    /// Detect the current context: wasm32 with a `window` is a browser.
    #[must_use]
    pub fn detect() -> Self {
        if has_window() {
            Self::Browser
        } else {
            Self::Server
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn has_window() -> bool {
    web_sys::window().is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn has_window() -> bool {
    false
}
