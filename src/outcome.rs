use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::info;

use crate::llm::CompletionError;

/// Why the placeholder content was used instead of the model's answer.
#[derive(Debug, thiserror::Error)]
pub enum FallbackReason {
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error("completion was empty")]
    EmptyCompletion,
    #[error("completion was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result of one generation request.
///
/// Remote content is passed through exactly as the model produced it; no shape
/// validation is applied. Both variants serialize as the bare content.
#[derive(Debug)]
pub enum Generation<T> {
    Remote(Value),
    Fallback { content: T, reason: FallbackReason },
}

impl<T> Generation<T> {
    /// Uses the completion if it parses as JSON, otherwise builds the placeholder.
    pub fn resolve<F>(completion: Result<String, CompletionError>, fallback: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match completion
            .map_err(FallbackReason::from)
            .and_then(parse_completion)
        {
            Ok(value) => Generation::Remote(value),
            Err(reason) => {
                info!(reason = %reason, "Using placeholder content");
                Generation::Fallback {
                    content: fallback(),
                    reason,
                }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generation::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Generation::Remote(_) => None,
            Generation::Fallback { reason, .. } => Some(reason),
        }
    }
}

fn parse_completion(text: String) -> Result<Value, FallbackReason> {
    if text.is_empty() {
        return Err(FallbackReason::EmptyCompletion);
    }
    Ok(serde_json::from_str(&text)?)
}

impl<T: Serialize> Serialize for Generation<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Generation::Remote(value) => value.serialize(serializer),
            Generation::Fallback { content, .. } => content.serialize(serializer),
        }
    }
}
