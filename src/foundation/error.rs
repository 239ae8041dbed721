/// Convenience result type used across framerect.
pub type FrameRectResult<T> = Result<T, FrameRectError>;

/// Error taxonomy for the fallible surfaces around the resolver.
///
/// Resolving a rectangle never fails; these errors come from loading and
/// validating host models and from their lookups.
#[derive(thiserror::Error, Debug)]
pub enum FrameRectError {
    /// Invalid user-provided geometry or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Inconsistent scene graph (dangling ids, cyclic frame chains).
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameRectError {
    /// Build a [`FrameRectError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrameRectError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`FrameRectError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FrameRectError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
