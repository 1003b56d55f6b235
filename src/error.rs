//! Error types for prsum.
//!
//! The extraction core degrades instead of failing: sparse or malformed pages
//! produce empty fields, never an `Err`. The variants below cover input
//! validation and the collaborator-facing helpers (settings, engine keys).

use crate::settings::Engine;

/// Error type for prsum operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page location could not be parsed as an absolute URL.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied property-mining pattern failed to compile.
    #[error("Invalid property pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Stored settings could not be decoded.
    #[error("Settings could not be parsed: {0}")]
    Settings(#[from] serde_json::Error),

    /// An engine name that is neither `chatgpt` nor `gemini`.
    #[error("Unknown summarization engine: {0}")]
    UnknownEngine(String),

    /// The selected summarization engine has no API key configured.
    #[error("Missing {} API key. Set it in Options.", engine.provider_name())]
    MissingApiKey {
        /// Engine that was selected for the request.
        engine: Engine,
    },

    /// The page belongs to the browser itself and its content cannot be read.
    #[error("This appears to be a browser/system page ({0}), whose content cannot be read. Try summarizing a normal webpage.")]
    RestrictedPage(String),
}

/// Result type alias for prsum operations.
pub type Result<T> = std::result::Result<T, Error>;
