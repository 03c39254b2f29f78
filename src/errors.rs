use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl GraphError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::NotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        GraphError::Io(msg.into())
    }

    pub fn encoding<T: Into<String>>(msg: T) -> Self {
        GraphError::Encoding(msg.into())
    }
}
