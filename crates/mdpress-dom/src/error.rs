//! Error types for document parsing and serialization.

/// Unexpected failure inside a document backend.
///
/// Missing backends are not errors: they degrade to a pass-through document.
/// Anything reported here means the backend itself broke its contract.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DomError {
    /// The virtual document could not be written out.
    #[cfg(feature = "virtual-dom")]
    #[error("HTML serialization failed")]
    Serialize(#[from] std::io::Error),

    /// Serialized HTML was not valid UTF-8.
    #[cfg(feature = "virtual-dom")]
    #[error("serialized HTML is not UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A parsed document lacks an element the backend relies on.
    #[error("parsed document has no <{0}> element")]
    MissingElement(&'static str),

    /// The browser DOM rejected an operation.
    #[error("browser DOM error: {0}")]
    Native(String),
}
