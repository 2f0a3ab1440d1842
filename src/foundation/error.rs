/// Crate-wide result alias.
pub type TrifillResult<T> = Result<T, TrifillError>;

/// Error taxonomy for the stage pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TrifillError {
    /// Invalid configuration or viewport.
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation state machine misuse.
    #[error("animation error: {0}")]
    Animation(String),

    /// Rasterization or surface failure.
    #[error("render error: {0}")]
    Render(String),

    /// Serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrifillError {
    /// Build a [`TrifillError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrifillError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`TrifillError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TrifillError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
