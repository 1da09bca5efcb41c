pub fn build_quiz_prompt(topic: &str, count: usize) -> String {
    format!(
        r#"
Generate {count} multiple-choice questions about the topic: "{topic}".
Return output as JSON with the following structure:
{{
    "questions": [
        {{
            "prompt": string,
            "options": [string, ...],
            "answer_index": integer  // index into options array for correct answer
        }}
    ]
}}
Only output valid JSON. No extra commentary.
"#
    )
}
