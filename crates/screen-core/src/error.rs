use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
