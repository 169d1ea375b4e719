use std::path::PathBuf;

/// Convenience result type used across tracegif.
pub type TraceGifResult<T> = Result<T, TraceGifError>;

/// Top-level error taxonomy used by the pipeline stages.
#[derive(thiserror::Error, Debug)]
pub enum TraceGifError {
    /// Invalid user-provided options or data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The log produced no updates for the requested tool.
    #[error("no update events found in {}", path.display())]
    NoUpdates {
        /// Log file that was scanned.
        path: PathBuf,
    },

    /// An explicitly requested font could not be loaded or shaped.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization failures.
    #[error("render error: {0}")]
    Render(String),

    /// Image encoding failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraceGifError {
    /// Build a [`TraceGifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TraceGifError::NoUpdates`] value for `path`.
    pub fn no_updates(path: impl Into<PathBuf>) -> Self {
        Self::NoUpdates { path: path.into() }
    }

    /// Build a [`TraceGifError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`TraceGifError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TraceGifError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

impl From<image::ImageError> for TraceGifError {
    fn from(e: image::ImageError) -> Self {
        Self::Encode(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
