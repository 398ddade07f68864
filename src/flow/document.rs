use super::conversion::IntoFlow;
use super::definition::{Flow, FlowStatus, Position, Step, StepConfig};
use super::registry::KindRegistry;
use crate::error::FlowConversionError;
use ahash::{AHashMap, AHashSet};
use chrono::{DateTime, Utc};
use serde::Deserialize;

// Shape of a flow as stored by the clinic dashboard. Step types are free-form
// strings and layout may live in a separate `positions` map.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDocument {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "ownerId")]
    pub nutritionist_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepDocument>,
    #[serde(default)]
    pub positions: AHashMap<String, Position>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct StepDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub config: StepConfig,
    #[serde(default)]
    pub position: Option<Position>,
}

impl FlowDocument {
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        serde_json::from_str(json).map_err(|e| FlowConversionError::JsonParseError(e.to_string()))
    }

    /// Converts the document, resolving step types through `registry`.
    pub fn into_flow_with(self, registry: &KindRegistry) -> Result<Flow, FlowConversionError> {
        let status = match self.status.as_deref() {
            None | Some("") | Some("draft") => FlowStatus::Draft,
            Some("active") => FlowStatus::Active,
            Some("archived") => FlowStatus::Archived,
            Some(other) => {
                return Err(FlowConversionError::ValidationError(format!(
                    "unknown flow status '{}'",
                    other
                )));
            }
        };

        let mut seen = AHashSet::with_capacity(self.steps.len());
        let mut steps = Vec::with_capacity(self.steps.len());
        for raw in self.steps {
            if raw.id.is_empty() {
                return Err(FlowConversionError::ValidationError(
                    "step without an id".to_string(),
                ));
            }
            if !seen.insert(raw.id.clone()) {
                return Err(FlowConversionError::ValidationError(format!(
                    "duplicate step id '{}'",
                    raw.id
                )));
            }
            let kind = registry.resolve(&raw.type_name).ok_or_else(|| {
                FlowConversionError::UnknownStepKind {
                    step_id: raw.id.clone(),
                    type_name: raw.type_name.clone(),
                }
            })?;
            let position = raw
                .position
                .or_else(|| self.positions.get(&raw.id).copied())
                .unwrap_or_default();
            steps.push(Step {
                id: raw.id,
                kind,
                title: raw.title,
                config: raw.config,
                position,
            });
        }

        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ok(Flow {
            id: self.id,
            name: self.name,
            nutritionist_id: self.nutritionist_id,
            status,
            steps,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        })
    }
}

impl IntoFlow for FlowDocument {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        self.into_flow_with(&KindRegistry::default())
    }
}
