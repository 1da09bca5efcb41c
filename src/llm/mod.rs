pub mod client;
pub mod feedback;
pub mod provider;
pub mod quiz;

pub use client::{CompletionClient, CompletionError};
pub use feedback::build_feedback_prompt;
pub use provider::{CompletionProvider, DisabledProvider, OpenAiProvider};
pub use quiz::build_quiz_prompt;
