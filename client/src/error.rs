use solana_client::client_error::ClientError;
use solxen_api::error::ApiError;
use thiserror::Error;
use tokio::time::Duration;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Max retries reached after {attempts} attempts. Unable to fetch account info.")]
    RetriesExhausted { attempts: u32 },

    #[error("RPC request failed: {0}")]
    Transport(#[from] ClientError),

    #[error("RPC request timed out after {0:?}")]
    Timeout(Duration),
}
