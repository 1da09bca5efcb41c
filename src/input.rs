use std::io::Read;

use serde_json::{Map, Number, Value};
use tracing::debug;

pub type Payload = Map<String, Value>;

pub const DEFAULT_TOPIC: &str = "General Knowledge";
pub const DEFAULT_COUNT: usize = 5;
pub const DEFAULT_SCORE: u64 = 0;
pub const DEFAULT_TOTAL: u64 = 5;

/// Reads the whole request. Anything that is not a JSON object yields an empty payload.
pub fn read_payload<R: Read>(mut reader: R) -> Payload {
    let mut raw = Vec::new();
    if let Err(err) = reader.read_to_end(&mut raw) {
        debug!(error = %err, "Failed to read request; using defaults");
        return Payload::new();
    }
    parse_payload(&raw)
}

pub fn parse_payload(raw: &[u8]) -> Payload {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Payload::new();
    }

    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            debug!("Request is not a JSON object; using defaults");
            Payload::new()
        }
        Err(err) => {
            debug!(error = %err, "Request is not valid JSON; using defaults");
            Payload::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizRequest {
    pub topic: String,
    pub count: usize,
}

impl QuizRequest {
    pub fn from_payload(payload: &Payload) -> Self {
        Self {
            topic: topic_from(payload),
            count: count_from(payload),
        }
    }
}

/// `score` and `total` keep the number exactly as it was sent so it can be echoed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRequest {
    pub topic: String,
    pub score: Number,
    pub total: Number,
}

impl FeedbackRequest {
    pub fn from_payload(payload: &Payload) -> Self {
        Self {
            topic: topic_from(payload),
            score: number_from(payload, "score").unwrap_or_else(|| DEFAULT_SCORE.into()),
            total: number_from(payload, "total").unwrap_or_else(|| DEFAULT_TOTAL.into()),
        }
    }
}

fn topic_from(payload: &Payload) -> String {
    match payload.get("topic") {
        Some(Value::String(topic)) => topic.clone(),
        Some(Value::Null) | None => DEFAULT_TOPIC.to_string(),
        // Wrong-typed topics are rendered, not rejected.
        Some(other) => other.to_string(),
    }
}

fn count_from(payload: &Payload) -> usize {
    let Some(Value::Number(count)) = payload.get("count") else {
        return DEFAULT_COUNT;
    };

    if let Some(count) = count.as_u64() {
        return usize::try_from(count).unwrap_or(usize::MAX);
    }
    if count.as_i64().is_some() {
        // Only negative integers reach here; they produce an empty quiz.
        return 0;
    }
    DEFAULT_COUNT
}

fn number_from(payload: &Payload, key: &str) -> Option<Number> {
    match payload.get(key) {
        Some(Value::Number(number)) => Some(number.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn empty_and_malformed_input_yield_empty_payload() {
        assert!(parse_payload(b"").is_empty());
        assert!(parse_payload(b"  \n\t").is_empty());
        assert!(parse_payload(b"{not json").is_empty());
        assert!(parse_payload(b"[1, 2, 3]").is_empty());
        assert!(parse_payload(b"\"topic\"").is_empty());
        assert!(parse_payload(&[0xff, 0xfe, 0x7b]).is_empty());
    }

    #[test]
    fn reads_object_from_reader() {
        let parsed = read_payload(&br#"{"topic": "Math", "count": 2}"#[..]);
        assert_eq!(parsed.get("topic"), Some(&json!("Math")));
        assert_eq!(parsed.get("count"), Some(&json!(2)));
    }

    #[test]
    fn quiz_request_defaults() {
        let request = QuizRequest::from_payload(&Payload::new());
        assert_eq!(
            request,
            QuizRequest {
                topic: DEFAULT_TOPIC.to_string(),
                count: DEFAULT_COUNT,
            }
        );
    }

    #[test]
    fn quiz_request_reads_fields() {
        let request = QuizRequest::from_payload(&payload(json!({"topic": "Rust", "count": 3})));
        assert_eq!(request.topic, "Rust");
        assert_eq!(request.count, 3);
    }

    #[test]
    fn negative_count_means_no_questions() {
        let request = QuizRequest::from_payload(&payload(json!({"count": -4})));
        assert_eq!(request.count, 0);
    }

    #[test]
    fn non_integer_count_falls_back_to_default() {
        for value in [json!("3"), json!(2.5), json!(null), json!([1])] {
            let request = QuizRequest::from_payload(&payload(json!({ "count": value })));
            assert_eq!(request.count, DEFAULT_COUNT);
        }
    }

    #[test]
    fn wrong_typed_topic_is_rendered() {
        let request = QuizRequest::from_payload(&payload(json!({"topic": 42})));
        assert_eq!(request.topic, "42");

        let request = QuizRequest::from_payload(&payload(json!({"topic": null})));
        assert_eq!(request.topic, DEFAULT_TOPIC);
    }

    #[test]
    fn feedback_request_defaults_and_fields() {
        let request = FeedbackRequest::from_payload(&Payload::new());
        assert_eq!(request.score, Number::from(DEFAULT_SCORE));
        assert_eq!(request.total, Number::from(DEFAULT_TOTAL));
        assert_eq!(request.topic, DEFAULT_TOPIC);

        let request = FeedbackRequest::from_payload(&payload(
            json!({"topic": "Math", "score": 4, "total": 5}),
        ));
        assert_eq!(request.score, Number::from(4));
        assert_eq!(request.total, Number::from(5));
        assert_eq!(request.topic, "Math");
    }

    #[test]
    fn scores_keep_their_written_form() {
        let request = FeedbackRequest::from_payload(&parse_payload(
            br#"{"score": 4.0, "total": 12345678901234567891}"#,
        ));
        assert_eq!(request.score.to_string(), "4.0");
        assert_eq!(request.total.to_string(), "12345678901234567891");
    }

    #[test]
    fn non_numeric_scores_use_defaults() {
        let request =
            FeedbackRequest::from_payload(&payload(json!({"score": "4", "total": false})));
        assert_eq!(request.score, Number::from(DEFAULT_SCORE));
        assert_eq!(request.total, Number::from(DEFAULT_TOTAL));
    }
}
