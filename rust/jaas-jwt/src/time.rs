use crate::error::JwtError;
use std::time::{SystemTime, UNIX_EPOCH};

/// The current POSIX time in seconds. Fails if the system clock reads
/// earlier than the Unix epoch.
pub fn now() -> Result<i64, JwtError> {
    seconds_since_epoch(SystemTime::now())
}

fn seconds_since_epoch(time: SystemTime) -> Result<i64, JwtError> {
    let duration = time.duration_since(UNIX_EPOCH).map_err(|error| {
        tracing::warn!("System clock is behind the Unix epoch: {}", error);
        JwtError::configuration("The system clock is set before the Unix epoch")
    })?;

    i64::try_from(duration.as_secs())
        .map_err(|_| JwtError::configuration("The system clock is too far in the future"))
}
