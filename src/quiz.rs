use serde::Serialize;
use serde_json::Value;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

/// Deterministic placeholder quiz: `count` questions, four options each, answers cycling A..D.
pub fn fallback_quiz(topic: &str, count: usize) -> Quiz {
    Quiz {
        questions: (0..count)
            .map(|index| placeholder_question(topic, index))
            .collect(),
    }
}

fn placeholder_question(topic: &str, index: usize) -> Question {
    let number = index + 1;
    let options: Vec<String> = OPTION_LABELS
        .iter()
        .map(|label| format!("Option {label} for {number}"))
        .collect();

    Question {
        prompt: format!("What is example {number} about {topic}?"),
        answer_index: index % options.len(),
        options,
    }
}

/// Loose structural check for quiz JSON coming back from the model.
pub fn looks_like_quiz(value: &Value) -> bool {
    let Some(questions) = value.get("questions").and_then(Value::as_array) else {
        return false;
    };
    if questions.is_empty() {
        return false;
    }

    questions.iter().all(|question| {
        let has_prompt = question.get("prompt").is_some_and(Value::is_string);
        let has_options = question
            .get("options")
            .and_then(Value::as_array)
            .is_some_and(|options| options.len() >= 2);
        let has_answer = question.get("answer_index").is_some_and(Value::is_number);
        has_prompt && has_options && has_answer
    })
}
