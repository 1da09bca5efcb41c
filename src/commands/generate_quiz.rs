use tracing::warn;

use crate::input::QuizRequest;
use crate::llm::{CompletionClient, build_quiz_prompt};
use crate::outcome::Generation;
use crate::quiz::{Quiz, fallback_quiz, looks_like_quiz};

pub async fn run(client: &CompletionClient, request: &QuizRequest) -> Generation<Quiz> {
    let prompt = build_quiz_prompt(&request.topic, request.count);
    let completion = client.complete(&prompt).await;

    let generation = Generation::resolve(completion, || {
        fallback_quiz(&request.topic, request.count)
    });

    if let Generation::Remote(value) = &generation
        && !looks_like_quiz(value)
    {
        warn!(topic = %request.topic, "Model returned JSON that does not look like a quiz; passing it through");
    }

    generation
}
