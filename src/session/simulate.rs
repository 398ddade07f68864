use super::state::AnswerSet;
use super::{Transition, TraversalSession};
use crate::config::PreviewConfig;
use crate::data::AnswerScript;
use crate::error::PreviewError;
use crate::flow::Flow;
use crate::trace::PathFormatter;
use tracing::debug;

/// The result of running a flow against scripted answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub completed: bool,
    pub path: Vec<String>,
    pub answers: AnswerSet,
    /// Visited steps that collect an answer but had none in the script.
    pub unanswered: Vec<String>,
    pub reason: String,
}

/// Drives a `TraversalSession` to the end of a flow without a UI.
pub struct Simulator<'f> {
    flow: &'f Flow,
    config: PreviewConfig,
}

impl<'f> Simulator<'f> {
    pub fn new(flow: &'f Flow, config: PreviewConfig) -> Self {
        Self { flow, config }
    }

    /// Walks the flow, recording each visited step's scripted answer before
    /// advancing, until the flow ends or `max_steps` steps were visited.
    pub fn run(&self, script: &AnswerScript) -> Result<SimulationReport, PreviewError> {
        let mut session = match &self.config.start_step {
            Some(start) => TraversalSession::start(self.flow, start),
            None => TraversalSession::start_at_first(self.flow),
        };
        let mut unanswered = Vec::new();

        while let Some(step) = session.current_step() {
            if session.depth() > self.config.max_steps {
                return Err(PreviewError::StepLimitExceeded {
                    limit: self.config.max_steps,
                    path: PathFormatter::format_path(self.flow, session.history(), false),
                });
            }

            match script.answer(&step.id) {
                Some(value) => {
                    session.record_answer(&step.id, value.clone());
                }
                None if step.kind.collects_answer() => {
                    if !unanswered.contains(&step.id) {
                        unanswered.push(step.id.clone());
                    }
                }
                None => {}
            }

            if let Transition::Idle = session.advance() {
                break;
            }
        }

        let summary = session.summary();
        debug!(
            flow = %self.flow.id,
            steps = summary.path.len(),
            completed = summary.completed,
            "preview finished"
        );
        Ok(SimulationReport {
            completed: summary.completed,
            path: summary.path,
            answers: summary.answers,
            unanswered,
            reason: summary.reason,
        })
    }
}
