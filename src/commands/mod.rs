pub mod generate_feedback;
pub mod generate_quiz;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::input::{FeedbackRequest, Payload, QuizRequest};
use crate::llm::CompletionClient;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Produce a multiple-choice quiz
    #[value(name = "generate_quiz")]
    GenerateQuiz,
    /// Produce feedback for a quiz score
    #[value(name = "generate_feedback")]
    GenerateFeedback,
}

/// Runs one action and returns its compact JSON rendering.
pub async fn dispatch(
    action: Action,
    client: &CompletionClient,
    payload: &Payload,
) -> Result<String> {
    let rendered = match action {
        Action::GenerateQuiz => {
            let request = QuizRequest::from_payload(payload);
            let generation = generate_quiz::run(client, &request).await;
            serde_json::to_string(&generation)
        }
        Action::GenerateFeedback => {
            let request = FeedbackRequest::from_payload(payload);
            let generation = generate_feedback::run(client, &request).await;
            serde_json::to_string(&generation)
        }
    };

    rendered.with_context(|| format!("Failed to serialize {action:?} output"))
}
