use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpreadGraphError {
    #[error("vertex out of range: {0}")]
    VertexOutOfRange(String),
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SpreadGraphError {
    pub fn vertex_out_of_range<T: Into<String>>(msg: T) -> Self {
        SpreadGraphError::VertexOutOfRange(msg.into())
    }

    pub fn invalid_threshold<T: Into<String>>(msg: T) -> Self {
        SpreadGraphError::InvalidThreshold(msg.into())
    }

    pub fn invalid_range<T: Into<String>>(msg: T) -> Self {
        SpreadGraphError::InvalidRange(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        SpreadGraphError::InvalidInput(msg.into())
    }
}
