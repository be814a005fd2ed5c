use thiserror::Error;

/// Failure raised by a brush during render, effects or finalize.
#[derive(Error, Debug)]
pub enum BrushError {
    #[error("gradient is not usable: needs at least two finite stops and a non-degenerate axis")]
    InvalidGradient,

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrushError {
    pub fn msg(message: impl Into<String>) -> Self {
        BrushError::Message(message.into())
    }
}
