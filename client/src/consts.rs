use std::time::Duration;

/// Spacing enforced after every account read, successful or rate-limited.
pub const REQUEST_DELAY: Duration          = Duration::from_millis(500);

/// Rate-limited reads are retried this many times before giving up; the first
/// attempt is not counted, so a read is tried at most `MAX_RETRIES + 1` times.
pub const MAX_RETRIES: u32                 = 5;

/// Backoff before the first retry; doubled for each retry after it.
pub const INITIAL_BACKOFF: Duration        = Duration::from_millis(5_000);

/// Upper bound on a single account read.
pub const REQUEST_TIMEOUT: Duration        = Duration::from_secs(30);
