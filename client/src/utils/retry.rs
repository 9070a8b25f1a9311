use std::future::Future;
use log::{debug, error, warn};
use solana_client::client_error::{ClientError, ClientErrorKind};
use tokio::time::{sleep, timeout, Duration};

use crate::consts::*;
use crate::error::CheckError;

/// Decides whether an RPC failure is the provider asking us to slow down.
pub type RateLimitPredicate = fn(&ClientError) -> bool;

/// Default rate-limit detection: an HTTP 429 status, or the provider's
/// "429 Too Many Requests" text for errors that only carry a message.
pub fn is_rate_limited(err: &ClientError) -> bool {
    if let ClientErrorKind::Reqwest(e) = err.kind() {
        if e.status().map(|status| status.as_u16()) == Some(429) {
            return true;
        }
    }
    err.to_string().contains("429 Too Many Requests")
}

#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub request_delay: Duration,
    pub timeout: Duration,
    pub is_rate_limited: RateLimitPredicate,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_backoff: INITIAL_BACKOFF,
            request_delay: REQUEST_DELAY,
            timeout: REQUEST_TIMEOUT,
            is_rate_limited,
        }
    }
}

impl RetryPolicy {
    /// Backoff before the given retry, counting from 1.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }

    fn classify(&self, err: ClientError) -> CheckError {
        if (self.is_rate_limited)(&err) {
            CheckError::RateLimited
        } else {
            CheckError::Transport(err)
        }
    }
}

/// Runs an RPC read, retrying with exponential backoff while the provider
/// reports rate limiting. Every completed read, rate-limited or not, is
/// followed by `request_delay`. Any other failure is returned immediately.
pub async fn fetch_with_retry<F, Fut, T>(policy: &RetryPolicy, f: F) -> Result<T, CheckError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut retries = 0;

    loop {
        let outcome = match timeout(policy.timeout, f()).await {
            Ok(result) => result.map_err(|e| policy.classify(e)),
            Err(_) => Err(CheckError::Timeout(policy.timeout)),
        };

        match outcome {
            Ok(value) => {
                sleep(policy.request_delay).await;
                return Ok(value);
            }
            Err(CheckError::RateLimited) => {
                sleep(policy.request_delay).await;

                if retries >= policy.max_retries {
                    error!("Rate limited on all {} attempts", retries + 1);
                    return Err(CheckError::RetriesExhausted { attempts: retries + 1 });
                }

                retries += 1;
                let backoff = policy.backoff(retries);
                warn!(
                    "Rate limit exceeded. Retrying in {} seconds...",
                    backoff.as_secs_f64()
                );
                debug!("Retry {}/{}", retries, policy.max_retries);
                sleep(backoff).await;
            }
            Err(e) => return Err(e),
        }
    }
}
