use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all SCIF operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ScifError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An app name that is not part of the loaded recipe.
    #[error("{app} is not a valid app. Found {}", .valid.join(" "))]
    #[diagnostic(help("Use one of the apps defined in the recipe"))]
    UnknownApp { app: String, valid: Vec<String> },

    /// Invalid or malformed configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your scif config file for syntax errors"))]
    Config { message: String },

    /// Recipe object could not be deserialized.
    #[error("Recipe error: {message}")]
    Recipe { message: String },
}

impl ScifError {
    /// Build an [`ScifError::UnknownApp`] from any iterable of valid names.
    pub fn unknown_app<I, S>(app: impl Into<String>, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownApp {
            app: app.into(),
            valid: valid.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type ScifResult<T> = miette::Result<T>;
