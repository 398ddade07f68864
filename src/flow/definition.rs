use super::registry::StepKind;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

/// Free-form layout coordinate of a step on the builder canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One selectable answer on a choice-like step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
    /// Step to jump to when this option is chosen on a branching step.
    #[serde(default)]
    pub next_step_id: Option<String>,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            next_step_id: None,
        }
    }

    pub fn leading_to(mut self, step_id: impl Into<String>) -> Self {
        self.next_step_id = Some(step_id.into());
        self
    }
}

/// Kind-dependent configuration of a step. Fields a kind does not use stay empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepConfig {
    /// Text shown to the respondent (question or information body).
    pub prompt: Option<String>,
    pub options: Vec<ChoiceOption>,
    pub placeholder: Option<String>,
    pub media_url: Option<String>,
    /// Size of a rating scale.
    pub scale: Option<u8>,
    /// Variable name the answer is exposed under.
    pub variable: Option<String>,
    pub default_next_step_id: Option<String>,
}

impl StepConfig {
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Every step id this config points at, options first.
    pub fn referenced_step_ids(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter_map(|option| option.next_step_id.as_deref())
            .chain(self.default_next_step_id.as_deref())
    }
}

/// A node in a flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub config: StepConfig,
    #[serde(default)]
    pub position: Position,
}

impl Step {
    pub fn new(id: impl Into<String>, kind: StepKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            config: StepConfig::default(),
            position: Position::default(),
        }
    }

    /// The label used when rendering paths: the title, or the id when untitled.
    pub fn display_name(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// An ordered set of steps owned by one specialist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nutritionist_id: String,
    #[serde(default)]
    pub status: FlowStatus,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Flow {
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn step_mut(&mut self, id: &str) -> Option<&mut Step> {
        self.steps.iter_mut().find(|step| step.id == id)
    }

    pub fn contains_step(&self, id: &str) -> bool {
        self.step(id).is_some()
    }

    /// The step a traversal normally begins at.
    pub fn first_step(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Builds an id -> position lookup. On duplicate ids the first step wins,
    /// matching `Flow::step`.
    pub fn step_index(&self) -> AHashMap<&str, usize> {
        let mut index = AHashMap::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            index.entry(step.id.as_str()).or_insert(i);
        }
        index
    }
}
