//! Bounded retry with exponential backoff.

use std::time::Duration;

use cascade_core::config::ReasonerConfig;
use cascade_core::errors::ReasonerError;
use cascade_core::traits::IReasoner;
use tracing::{debug, warn};

/// Call the reasoner with bounded retries on transient errors.
///
/// Backoff is seeded from the rate-limit hint when the service sent one,
/// otherwise `backoff_base_ms` doubled per attempt. The total time spent
/// sleeping is capped by `backoff_cap_ms`; non-transient errors return
/// immediately.
pub fn with_retry(
    reasoner: &dyn IReasoner,
    config: &ReasonerConfig,
    prompt: &str,
    schema: &serde_json::Value,
) -> Result<String, ReasonerError> {
    let attempts = config.max_attempts.max(1);
    let mut slept_ms: u64 = 0;

    for attempt in 1..=attempts {
        match reasoner.reason(prompt, schema) {
            Ok(text) => return Ok(text),
            Err(err) if err.is_transient() && attempt < attempts => {
                let hinted = match &err {
                    ReasonerError::RateLimited {
                        retry_after_ms: Some(ms),
                    } => *ms,
                    _ => config.backoff_base_ms.saturating_mul(1 << (attempt - 1)),
                };
                let budget_left = config.backoff_cap_ms.saturating_sub(slept_ms);
                let wait = hinted.min(budget_left);
                if wait == 0 {
                    warn!(attempt, "backoff budget exhausted");
                    return Err(ReasonerError::RetriesExhausted { attempts: attempt });
                }
                debug!(attempt, wait_ms = wait, error = %err, "transient reasoner error, backing off");
                std::thread::sleep(Duration::from_millis(wait));
                slept_ms += wait;
            }
            Err(err) if err.is_transient() => {
                warn!(attempts, error = %err, "reasoner retries exhausted");
                return Err(ReasonerError::RetriesExhausted { attempts });
            }
            Err(err) => return Err(err),
        }
    }
    Err(ReasonerError::RetriesExhausted { attempts })
}
