use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::{Config, RetryPolicy};

use super::provider::{CompletionProvider, DisabledProvider, OpenAiProvider};

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no API credential configured")]
    NotConfigured,
    #[error("completion failed after {attempts} attempt(s): {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

/// Wraps a provider with the retry policy.
pub struct CompletionClient {
    provider: Box<dyn CompletionProvider>,
    retry: RetryPolicy,
}

impl CompletionClient {
    pub fn new(provider: Box<dyn CompletionProvider>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider: Box<dyn CompletionProvider> = match config.api_key.as_deref() {
            Some(api_key) => Box::new(OpenAiProvider::new(api_key, config)),
            None => Box::new(DisabledProvider),
        };
        Self::new(provider, config.retry)
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if !self.is_configured() {
            debug!("No credential configured; skipping completion");
            return Err(CompletionError::NotConfigured);
        }

        let max_attempts = self.retry.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.provider.complete(prompt).await {
                Ok(text) => {
                    debug!(attempt, response_length = text.len(), "Received completion");
                    return Ok(text);
                }
                Err(err) => {
                    let message = format!("{err:#}");
                    if attempt < max_attempts {
                        let delay = self.retry.delay_after(attempt);
                        warn!(
                            attempt,
                            max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            error = %message,
                            "Completion attempt failed; retrying"
                        );
                        sleep(delay).await;
                    } else {
                        warn!(attempt, error = %message, "Completion attempt failed; giving up");
                    }
                    last_error = Some(message);
                }
            }
        }

        Err(CompletionError::Exhausted {
            attempts: max_attempts,
            last_error: last_error.unwrap_or_else(|| "no attempts were allowed".to_string()),
        })
    }
}
