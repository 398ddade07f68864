use serde::{Deserialize, Serialize};
use std::fs;

/// Settings for the preview runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Upper bound on visited steps, so cyclic flows cannot run forever.
    pub max_steps: usize,
    /// Step to begin at instead of the flow's first step.
    pub start_step: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_steps: 256,
            start_step: None,
        }
    }
}

impl PreviewConfig {
    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_start_step(mut self, step_id: impl Into<String>) -> Self {
        self.start_step = Some(step_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PreviewConfig = serde_json::from_str(r#"{"startStep": "intro"}"#).unwrap();
        assert_eq!(config.max_steps, 256);
        assert_eq!(config.start_step.as_deref(), Some("intro"));
    }
}
