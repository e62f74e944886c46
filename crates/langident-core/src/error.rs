use thiserror::Error;

/// Errors that can occur during language identification.
#[derive(Debug, Error)]
pub enum LangIdError {
    /// A list input contained at least one element that is not a string.
    #[error("Not all objects in given input list are strings.")]
    NonStringElement,

    /// The input is neither a string nor a list of strings.
    #[error("Given text is neither a str nor a list.")]
    UnsupportedInput,

    /// The model artifact could not be loaded.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The classifier failed while scoring a text.
    #[error("inference error: {0}")]
    Inference(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// An identifier configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LangIdError {
    /// Returns `true` for the two input validation failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NonStringElement | Self::UnsupportedInput)
    }
}

impl From<std::convert::Infallible> for LangIdError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Result type alias for language identification operations.
pub type Result<T> = std::result::Result<T, LangIdError>;
