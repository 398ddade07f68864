use super::definition::{Flow, FlowStatus, Position, Step, StepConfig};
use super::registry::StepKind;
use crate::error::FlowError;
use crate::lint::{LintReport, lint};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

impl Flow {
    /// Creates an empty draft flow with a fresh id.
    pub fn new(name: impl Into<String>, nutritionist_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            nutritionist_id: nutritionist_id.into(),
            status: FlowStatus::Draft,
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a new step of `kind` and returns its generated id.
    pub fn add_step(&mut self, kind: StepKind, title: &str) -> Result<String, FlowError> {
        self.ensure_editable()?;
        let id = self.next_step_id();
        self.steps.push(Step::new(id.clone(), kind, title));
        self.touch();
        debug!(flow = %self.id, step = %id, %kind, "step added");
        Ok(id)
    }

    /// Appends a fully built step. Its id must be unused.
    pub fn insert_step(&mut self, step: Step) -> Result<(), FlowError> {
        self.ensure_editable()?;
        if self.contains_step(&step.id) {
            return Err(FlowError::DuplicateStepId(step.id));
        }
        self.steps.push(step);
        self.touch();
        Ok(())
    }

    /// Removes a step and clears every branch pointer that targeted it.
    pub fn remove_step(&mut self, step_id: &str) -> Result<Step, FlowError> {
        self.ensure_editable()?;
        let position = self
            .steps
            .iter()
            .position(|step| step.id == step_id)
            .ok_or_else(|| FlowError::StepNotFound(step_id.to_string()))?;
        let removed = self.steps.remove(position);

        for step in &mut self.steps {
            let config = &mut step.config;
            if config.default_next_step_id.as_deref() == Some(step_id) {
                config.default_next_step_id = None;
            }
            for option in &mut config.options {
                if option.next_step_id.as_deref() == Some(step_id) {
                    option.next_step_id = None;
                }
            }
        }

        self.touch();
        debug!(flow = %self.id, step = %step_id, "step removed");
        Ok(removed)
    }

    /// Edits a step's configuration in place.
    pub fn update_config<F>(&mut self, step_id: &str, edit: F) -> Result<(), FlowError>
    where
        F: FnOnce(&mut StepConfig),
    {
        self.ensure_editable()?;
        let step = self
            .step_mut(step_id)
            .ok_or_else(|| FlowError::StepNotFound(step_id.to_string()))?;
        edit(&mut step.config);
        self.touch();
        Ok(())
    }

    pub fn rename_step(&mut self, step_id: &str, title: &str) -> Result<(), FlowError> {
        self.ensure_editable()?;
        let step = self
            .step_mut(step_id)
            .ok_or_else(|| FlowError::StepNotFound(step_id.to_string()))?;
        step.title = title.to_string();
        self.touch();
        Ok(())
    }

    pub fn move_step(&mut self, step_id: &str, position: Position) -> Result<(), FlowError> {
        self.ensure_editable()?;
        let step = self
            .step_mut(step_id)
            .ok_or_else(|| FlowError::StepNotFound(step_id.to_string()))?;
        step.position = position;
        self.touch();
        Ok(())
    }

    /// Lints the flow and marks it active when no errors were found.
    ///
    /// The report is returned on success so callers can surface warnings.
    pub fn publish(&mut self) -> Result<LintReport, FlowError> {
        self.ensure_editable()?;
        let report = lint(self);
        if let Some(first) = report.errors().first() {
            return Err(FlowError::PublishRejected {
                flow_id: self.id.clone(),
                error_count: report.errors().len(),
                first: first.to_string(),
            });
        }
        self.status = FlowStatus::Active;
        self.touch();
        info!(flow = %self.id, warnings = report.warnings().len(), "flow published");
        Ok(report)
    }

    pub fn archive(&mut self) {
        self.status = FlowStatus::Archived;
        self.touch();
        info!(flow = %self.id, "flow archived");
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn ensure_editable(&self) -> Result<(), FlowError> {
        match self.status {
            FlowStatus::Archived => Err(FlowError::NotEditable(self.id.clone())),
            _ => Ok(()),
        }
    }

    fn next_step_id(&self) -> String {
        let mut n = self.steps.len() + 1;
        loop {
            let candidate = format!("step-{}", n);
            if !self.contains_step(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Fluent construction of flows in code.
///
/// ```rust
/// use nutriflow::prelude::*;
///
/// let flow = FlowBuilder::new("Intake")
///     .owner("nutritionist-7")
///     .step(
///         Step::new("a", StepKind::SingleChoice, "Breakfast?").with_options(vec![
///             ChoiceOption::new("yes", "Yes").leading_to("c"),
///             ChoiceOption::new("no", "No"),
///         ]).with_default_next("b"),
///     )
///     .step(Step::new("b", StepKind::Information, "Tip").with_default_next("c"))
///     .step(Step::new("c", StepKind::TextInput, "Anything else?"))
///     .build();
///
/// assert_eq!(flow.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FlowBuilder {
    flow: Flow,
}

impl FlowBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            flow: Flow::new(name, ""),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.flow.id = id.into();
        self
    }

    pub fn owner(mut self, nutritionist_id: impl Into<String>) -> Self {
        self.flow.nutritionist_id = nutritionist_id.into();
        self
    }

    pub fn status(mut self, status: FlowStatus) -> Self {
        self.flow.status = status;
        self
    }

    /// Adds a step as-is; duplicate ids are kept so malformed flows can be
    /// modeled.
    pub fn step(mut self, step: Step) -> Self {
        self.flow.steps.push(step);
        self
    }

    pub fn build(self) -> Flow {
        self.flow
    }
}

impl Step {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = Some(prompt.into());
        self
    }

    pub fn with_options(mut self, options: Vec<super::ChoiceOption>) -> Self {
        self.config.options = options;
        self
    }

    pub fn with_default_next(mut self, step_id: impl Into<String>) -> Self {
        self.config.default_next_step_id = Some(step_id.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        self.config.variable = Some(name.into());
        self
    }

    pub fn with_scale(mut self, scale: u8) -> Self {
        self.config.scale = Some(scale);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }
}
