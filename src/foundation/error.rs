/// Convenience result type used across brushfx.
pub type BrushResult<T> = Result<T, BrushError>;

/// Top-level error taxonomy used by engine and collaborator APIs.
///
/// Effect entry points never return these: a refused read or write aborts the
/// dab silently. They surface only from boundary helpers (validation, history,
/// script and image IO).
#[derive(thiserror::Error, Debug)]
pub enum BrushError {
    /// Invalid user-provided brush, settings or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The backing pixel store refused a read or write.
    #[error("access error: {0}")]
    Access(String),

    /// Collaborator used out of order (empty history, size mismatch).
    #[error("state error: {0}")]
    State(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrushError {
    /// Build a [`BrushError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrushError::Access`] value.
    pub fn access(msg: impl Into<String>) -> Self {
        Self::Access(msg.into())
    }

    /// Build a [`BrushError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build a [`BrushError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
