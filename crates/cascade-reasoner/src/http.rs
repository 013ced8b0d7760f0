//! Blocking HTTP implementation of [`IReasoner`].

use cascade_core::config::ReasonerConfig;
use cascade_core::errors::ReasonerError;
use cascade_core::traits::IReasoner;
use serde::Deserialize;
use tracing::debug;

/// Shape the reasoning service answers with.
#[derive(Debug, Deserialize)]
struct ReasonResponse {
    text: String,
}

/// Talks to the external reasoning service over HTTP. One POST per call,
/// request timeout from config, no connection reuse assumptions.
pub struct HttpReasoner {
    client: reqwest::blocking::Client,
    config: ReasonerConfig,
}

impl HttpReasoner {
    pub fn new(config: ReasonerConfig) -> Result<Self, ReasonerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ReasonerError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self { client, config })
    }

    fn retry_after_ms(response: &reqwest::blocking::Response) -> Option<u64> {
        response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000)
    }
}

impl IReasoner for HttpReasoner {
    fn reason(&self, prompt: &str, schema: &serde_json::Value) -> Result<String, ReasonerError> {
        if !self.config.enabled {
            return Err(ReasonerError::Disabled);
        }

        let body = serde_json::json!({ "prompt": prompt, "schema": schema });
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ReasonerError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    ReasonerError::Transport {
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ReasonerError::RateLimited {
                retry_after_ms: Self::retry_after_ms(&response),
            });
        }
        if !status.is_success() {
            return Err(ReasonerError::Transport {
                reason: format!("unexpected status {status}"),
            });
        }

        let raw = response.text().map_err(|e| ReasonerError::Transport {
            reason: e.to_string(),
        })?;
        debug!(bytes = raw.len(), "reasoner response received");
        match serde_json::from_str::<ReasonResponse>(&raw) {
            Ok(parsed) => Ok(parsed.text),
            Err(_) => Err(ReasonerError::MalformedResponse { body: raw }),
        }
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled && !self.config.endpoint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_short_circuits() {
        let reasoner = HttpReasoner::new(ReasonerConfig::default()).unwrap();
        assert!(!reasoner.is_enabled());
        let err = reasoner
            .reason("why", &serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, ReasonerError::Disabled));
    }
}
