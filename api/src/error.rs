use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid Solana address: '{0}'")]
    InvalidAddress(String),

    #[error("Malformed account data: expected at least {expected} bytes, found {actual}")]
    MalformedAccountData { expected: usize, actual: usize },
}
