use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid sample count {got}: need at least 2")]
    InvalidSamples { got: usize },

    #[error("invalid canvas {width}x{height}: need at least 2x2")]
    InvalidCanvas { width: usize, height: usize },

    #[error("failed to serialize plot data: {0}")]
    Json(#[from] serde_json::Error),
}
