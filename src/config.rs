use std::env;
use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::utils::{mask_secret, trim_line};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const API_BASE_ENV: &str = "OPENAI_API_BASE";
pub const MODEL_ENV: &str = "QUIZ_WORKER_MODEL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.2;
pub const MAX_OUTPUT_TOKENS: u32 = 800;

const DEFAULT_MAX_ATTEMPTS: u32 = 2;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(800);

/// Linear backoff: the wait after failed attempt `n` (1-based) is `n * base_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }

    /// Total time spent waiting when every attempt fails.
    pub fn total_backoff(&self) -> Duration {
        (1..self.max_attempts).map(|n| self.delay_after(n)).sum()
    }
}

/// Everything the completion path needs, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            retry: RetryPolicy::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(mask_secret))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .as_deref()
                .and_then(trim_line)
                .map(str::to_string)
        };

        Self {
            api_key: read(API_KEY_ENV),
            api_base: read(API_BASE_ENV),
            model: read(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ..Self::default()
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn log_summary(&self) {
        debug!(
            has_credential = self.has_credential(),
            credential = %self.api_key.as_deref().map(mask_secret).unwrap_or_else(|| "<unset>".to_string()),
            api_base = ?self.api_base,
            model = %self.model,
            max_attempts = self.retry.max_attempts,
            worst_case_backoff_ms = self.retry.total_backoff().as_millis() as u64,
            "Loaded configuration"
        );
    }
}
