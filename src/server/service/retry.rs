//! Retry logic with exponential backoff for database reads.
//!
//! [`RetryContext`] runs a read up to a fixed number of times, retrying only errors that
//! [`Error::to_retry_strategy`] classifies as transient (lost or exhausted database
//! connections). Writes run inside transactions and are not retried.

use std::{future::Future, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Retry settings for one database read.
///
/// - **Max attempts**: 3
/// - **Backoff**: exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Permanent failures**: errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new();
/// let db = self.db.clone();
///
/// ctx.execute_with_retry("get team ID 3", || {
///     let db = db.clone();
///
///     Box::pin(async move { Ok(TeamRepository::new(&db).find_by_id(3).await?) })
/// })
/// .await?;
/// ```
pub struct RetryContext {
    max_attempts: u32,
    /// Wait before the first retry, doubled for each one after
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Runs `operation`, starting it again after a backoff while it fails transiently.
    ///
    /// # Arguments
    /// - `description` - What is being read, for logging (e.g. "get team ID 3")
    /// - `operation` - Produces a fresh future for every attempt
    ///
    /// # Returns
    /// - `Ok(R)` - An attempt succeeded
    /// - `Err(Error)` - The error was permanent or every attempt failed
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut backoff = self.initial_backoff;

        for attempt in 1..=self.max_attempts {
            let err = match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => err,
            };

            if matches!(err.to_retry_strategy(), ErrorRetryStrategy::Fail) {
                return Err(err);
            }
            if attempt == self.max_attempts {
                tracing::error!(
                    attempts = self.max_attempts,
                    error = ?err,
                    "Giving up on {}",
                    description
                );
                return Err(err);
            }

            tracing::warn!(
                attempt,
                max_attempts = self.max_attempts,
                ?backoff,
                error = ?err,
                "Retrying {}",
                description
            );

            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }

        Err(Error::InternalError(format!(
            "No attempt was made for {}",
            description
        )))
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}
