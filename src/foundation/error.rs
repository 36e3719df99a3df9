/// Convenience result type used across the crate.
pub type LogoResult<T> = Result<T, LogoError>;

/// Top-level error taxonomy used by the logo APIs.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// The drawing target is absent or cannot host a surface.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// A surface dimension cannot be represented by the backend.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Invalid user-provided configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors raised by a drawing backend while executing a plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogoError {
    /// Build a [`LogoError::InvalidTarget`] value.
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }

    /// Build a [`LogoError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`LogoError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LogoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LogoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
