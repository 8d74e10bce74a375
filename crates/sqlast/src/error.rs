use thiserror::Error;

/// Construction-time failures. Rendering itself never fails.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("SELECT requires at least one projection item")]
    EmptyProjection,

    #[error("object name requires at least one identifier")]
    EmptyObjectName,

    #[error("double literal must be finite, got {0}")]
    NonFiniteDouble(f64),

    #[error("failed to decode query tree: {0}")]
    Decode(#[from] serde_json::Error),
}
