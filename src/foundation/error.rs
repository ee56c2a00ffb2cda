/// Convenience result type used across Smudge.
pub type SmudgeResult<T> = Result<T, SmudgeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SmudgeError {
    /// Invalid user-provided configuration or tuning data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The raster surface could not be initialized.
    ///
    /// Reported upward once; the host layer decides whether to omit the effect.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors while fetching or decoding a source texture.
    ///
    /// These never escape [`TextureCache`](crate::cache::texture::TextureCache) — the cache
    /// substitutes the neutral-gray fallback — but loader implementations surface them
    /// internally.
    #[error("resource error: {0}")]
    Resource(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SmudgeError {
    /// Build a [`SmudgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SmudgeError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`SmudgeError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
