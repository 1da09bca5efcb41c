use serde::Serialize;
use serde_json::{Number, Value};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub feedback: String,
}

/// Score bands used by the placeholder feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// 80% and above
    Strong,
    /// 50% up to 80%
    Fair,
    Weak,
}

impl Band {
    pub fn for_score(score: f64, total: f64) -> Self {
        let pct = percentage(score, total);
        if pct >= 80.0 {
            Band::Strong
        } else if pct >= 50.0 {
            Band::Fair
        } else {
            Band::Weak
        }
    }
}

/// A zero total counts as 0%.
pub fn percentage(score: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        score / total * 100.0
    }
}

/// Picks the band from the numeric values but echoes `score` and `total` as they were written.
pub fn fallback_feedback(topic: &str, score: &Number, total: &Number) -> Feedback {
    let band = Band::for_score(
        score.as_f64().unwrap_or_default(),
        total.as_f64().unwrap_or_default(),
    );
    let feedback = match band {
        Band::Strong => format!(
            "Great job! You scored {score}/{total} on {topic}. You're well above average. Keep it up!"
        ),
        Band::Fair => format!(
            "Not bad — you scored {score}/{total} on {topic}. A little more review and you'll be solid."
        ),
        Band::Weak => format!(
            "You scored {score}/{total} on {topic}. Don't worry — focus on key concepts and try again."
        ),
    };
    Feedback { feedback }
}

pub fn looks_like_feedback(value: &Value) -> bool {
    value.get("feedback").is_some_and(Value::is_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn feedback_for(topic: &str, score: Value, total: Value) -> String {
        let (Value::Number(score), Value::Number(total)) = (score, total) else {
            panic!("score and total must be numbers");
        };
        fallback_feedback(topic, &score, &total).feedback
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(Band::for_score(4.0, 5.0), Band::Strong);
        assert_eq!(Band::for_score(8.0, 10.0), Band::Strong);
        assert_eq!(Band::for_score(5.0, 5.0), Band::Strong);
        assert_eq!(Band::for_score(1.0, 2.0), Band::Fair);
        assert_eq!(Band::for_score(79.999, 100.0), Band::Fair);
        assert_eq!(Band::for_score(49.999, 100.0), Band::Weak);
        assert_eq!(Band::for_score(0.0, 5.0), Band::Weak);
    }

    #[test]
    fn zero_total_is_weak() {
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert_eq!(Band::for_score(3.0, 0.0), Band::Weak);

        assert_eq!(
            feedback_for("Math", json!(3), json!(0)),
            "You scored 3/0 on Math. Don't worry — focus on key concepts and try again."
        );
    }

    #[test]
    fn strong_message_mentions_score_and_topic() {
        let feedback = feedback_for("Math", json!(4), json!(5));
        assert!(feedback.starts_with("Great job!"));
        assert!(feedback.contains("4/5"));
        assert!(feedback.contains("Math"));
    }

    #[test]
    fn fair_message() {
        assert_eq!(
            feedback_for("Tech Trends", json!(3), json!(5)),
            "Not bad — you scored 3/5 on Tech Trends. A little more review and you'll be solid."
        );
    }

    #[test]
    fn fractional_scores_are_rendered_verbatim() {
        let feedback = feedback_for("Physics", json!(2.5), json!(10));
        assert!(feedback.contains("2.5/10"));
    }

    #[test]
    fn whole_valued_floats_keep_their_decimal_point() {
        let feedback = feedback_for("Math", json!(4.0), json!(5));
        assert!(feedback.starts_with("Great job!"));
        assert!(feedback.contains("4.0/5"));
    }

    #[test]
    fn large_integers_are_not_rounded() {
        let score: Number = "12345678901234567891".parse().unwrap();
        let feedback = fallback_feedback("Math", &score, &score).feedback;
        assert!(feedback.contains("12345678901234567891/12345678901234567891"));
        assert!(feedback.starts_with("Great job!"));
    }

    #[test]
    fn serializes_as_single_field() {
        let value = serde_json::to_value(fallback_feedback("Math", &1.into(), &5.into())).unwrap();
        assert!(looks_like_feedback(&value));
        assert_eq!(value.as_object().map(|o| o.len()), Some(1));
    }

    #[test]
    fn shape_check_rejects_non_string_feedback() {
        assert!(!looks_like_feedback(&json!({"feedback": 3})));
        assert!(!looks_like_feedback(&json!({"message": "hi"})));
        assert!(looks_like_feedback(&json!({"feedback": "hi"})));
    }
}
