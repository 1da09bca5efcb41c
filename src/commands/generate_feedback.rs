use tracing::warn;

use crate::feedback::{Feedback, fallback_feedback, looks_like_feedback};
use crate::input::FeedbackRequest;
use crate::llm::{CompletionClient, build_feedback_prompt};
use crate::outcome::Generation;

pub async fn run(client: &CompletionClient, request: &FeedbackRequest) -> Generation<Feedback> {
    let prompt = build_feedback_prompt(&request.topic, &request.score, &request.total);
    let completion = client.complete(&prompt).await;

    let generation = Generation::resolve(completion, || {
        fallback_feedback(&request.topic, &request.score, &request.total)
    });

    if let Generation::Remote(value) = &generation
        && !looks_like_feedback(value)
    {
        warn!(topic = %request.topic, "Model returned JSON without a feedback string; passing it through");
    }

    generation
}
