use serde_json::Number;

pub fn build_feedback_prompt(topic: &str, score: &Number, total: &Number) -> String {
    format!(
        r#"
Given topic: "{topic}", score: {score}, total: {total}, produce JSON:
{{"feedback": string}}
Only output valid JSON.
"#
    )
}
