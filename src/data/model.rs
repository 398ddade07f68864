use crate::session::{AnswerSet, AnswerValue};
use serde::{Deserialize, Serialize};
use std::fs;

/// Scripted answers for previewing a flow, keyed by step id.
///
/// ```json
/// { "answers": { "breakfast": "yes", "foods": ["oats", "fruit"], "plate": {"media": "plate.jpg"} } }
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AnswerScript {
    #[serde(default)]
    pub answers: AnswerSet,
}

impl AnswerScript {
    /// Load a script from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let script = serde_json::from_str(&content)?;
        Ok(script)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_answer(mut self, step_id: &str, value: AnswerValue) -> Self {
        self.answers.insert(step_id.to_string(), value);
        self
    }

    pub fn answer(&self, step_id: &str) -> Option<&AnswerValue> {
        self.answers.get(step_id)
    }
}
