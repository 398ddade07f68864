use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for an uploaded or recorded media answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMarker {
    pub media: String,
}

/// A value recorded for one step.
///
/// In JSON a string is a text or single-choice answer, an array of strings a
/// multiple-choice answer and `{"media": "..."}` a media placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choices(Vec<String>),
    Media(MediaMarker),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Choices(values.into_iter().map(Into::into).collect())
    }

    pub fn media(placeholder: impl Into<String>) -> Self {
        AnswerValue::Media(MediaMarker {
            media: placeholder.into(),
        })
    }

    /// The single selected value, if this answer names exactly one.
    pub fn selected(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value.as_str()),
            AnswerValue::Choices(values) if values.len() == 1 => Some(values[0].as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Text(value) => write!(f, "{}", value),
            AnswerValue::Choices(values) => write!(f, "[{}]", values.join(", ")),
            AnswerValue::Media(marker) => write!(f, "<media {}>", marker.media),
        }
    }
}

pub type AnswerSet = AHashMap<String, AnswerValue>;

/// Where a traversal stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState<'f> {
    InProgress { current: &'f str },
    /// End of flow. A normal, successful outcome.
    Terminal,
}

/// What a call to `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<'f> {
    Moved { from: &'f str, to: &'f str },
    Completed { from: &'f str },
    /// The session was already terminal.
    Idle,
}

/// Position information for "Step N of approximately M".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total_estimate: usize,
    pub completed: bool,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            write!(f, "Completed after {} step(s)", self.position)
        } else {
            write!(
                f,
                "Step {} of approximately {}",
                self.position, self.total_estimate
            )
        }
    }
}

/// The outcome of a traversal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Whether the end of the flow was reached.
    pub completed: bool,
    /// Visited step ids, in order.
    pub path: Vec<String>,
    pub answers: AnswerSet,
    /// A human-readable rendering of the path.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_parse_from_json_shapes() {
        let text: AnswerValue = serde_json::from_str(r#""yes""#).unwrap();
        let choices: AnswerValue = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        let media: AnswerValue = serde_json::from_str(r#"{"media": "plate.jpg"}"#).unwrap();
        assert_eq!(text, AnswerValue::text("yes"));
        assert_eq!(choices, AnswerValue::choices(["a", "b"]));
        assert_eq!(media, AnswerValue::media("plate.jpg"));
    }

    #[test]
    fn selected_only_for_single_values() {
        assert_eq!(AnswerValue::text("x").selected(), Some("x"));
        assert_eq!(AnswerValue::choices(["x"]).selected(), Some("x"));
        assert_eq!(AnswerValue::choices(["x", "y"]).selected(), None);
        assert_eq!(AnswerValue::media("m").selected(), None);
    }

    #[test]
    fn progress_display() {
        let p = Progress {
            position: 2,
            total_estimate: 5,
            completed: false,
        };
        assert_eq!(p.to_string(), "Step 2 of approximately 5");
    }
}
