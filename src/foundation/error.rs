/// Convenience result type used across pixeldrift.
pub type DriftResult<T> = Result<T, DriftError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DriftError {
    /// A loop duration of zero frames.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// Zero-area canvas, or a parameter combination producing non-finite
    /// phase or displacement math.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Invalid user-provided configuration or raster data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriftError {
    /// Build a [`DriftError::InvalidDuration`] value.
    pub fn duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    /// Build a [`DriftError::DegenerateGeometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::DegenerateGeometry(msg.into())
    }

    /// Build a [`DriftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DriftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
