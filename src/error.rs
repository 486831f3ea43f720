use thiserror::Error;

/// Errors surfaced by the spiral pipeline and its renderers
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpiralError {
    /// The configuration cannot produce a spiral
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A coordinate or radius stopped being a finite number
    #[error("non-finite value at sample {index} during {stage}")]
    Numeric { stage: &'static str, index: usize },

    /// Rasterizing a rendered document failed
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, SpiralError>;

impl SpiralError {
    pub fn config(msg: impl Into<String>) -> Self {
        SpiralError::Config(msg.into())
    }
}
