/// Convenience result type used across shapewatch.
pub type ShapewatchResult<T> = Result<T, ShapewatchError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShapewatchError {
    /// Invalid user-provided data (bad colors, bad settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry that cannot be rasterized.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Surfaces that cannot be allocated or whose buffers do not line up.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors when serializing or deserializing shape lists.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors while reading shape lists or writing frames.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapewatchError {
    /// Build a [`ShapewatchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShapewatchError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ShapewatchError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`ShapewatchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ShapewatchError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
