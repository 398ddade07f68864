//! The traversal engine.
//!
//! A `TraversalSession` walks one respondent through a flow: it holds the
//! current step, the visit history used for going back, and the answers
//! recorded so far. Every operation is a synchronous state transition and
//! none of them fail. Broken branch pointers end the flow instead.

pub mod branch;
pub mod simulate;
pub mod state;

pub use branch::{resolve_next, successors};
pub use simulate::{SimulationReport, Simulator};
pub use state::{
    AnswerSet, AnswerValue, MediaMarker, Progress, SessionSummary, TraversalState, Transition,
};

use crate::flow::{Flow, Step};
use crate::trace::PathFormatter;
use ahash::AHashMap;
use tracing::{debug, warn};

/// Runtime state of walking a flow's steps in response to answers.
#[derive(Debug, Clone)]
pub struct TraversalSession<'f> {
    flow: &'f Flow,
    index: AHashMap<&'f str, usize>,
    state: TraversalState<'f>,
    history: Vec<&'f str>,
    answers: AnswerSet,
}

impl<'f> TraversalSession<'f> {
    /// Starts a session at `initial_step_id`.
    ///
    /// If the id does not name a step of the flow the session is terminal
    /// right away; a flow without steps therefore always starts terminal.
    pub fn start(flow: &'f Flow, initial_step_id: &str) -> Self {
        let mut session = Self {
            flow,
            index: flow.step_index(),
            state: TraversalState::Terminal,
            history: Vec::new(),
            answers: AnswerSet::new(),
        };
        session.restart(initial_step_id);
        session
    }

    /// Starts at the flow's first step.
    pub fn start_at_first(flow: &'f Flow) -> Self {
        let first = flow.first_step().map(|s| s.id.as_str()).unwrap_or_default();
        Self::start(flow, first)
    }

    /// Resets history and answers and begins again at `initial_step_id`.
    pub fn restart(&mut self, initial_step_id: &str) {
        self.history.clear();
        self.answers.clear();
        match self.resolve(initial_step_id) {
            Some(id) => {
                self.history.push(id);
                self.state = TraversalState::InProgress { current: id };
                debug!(flow = %self.flow.id, step = %id, "traversal started");
            }
            None => {
                self.state = TraversalState::Terminal;
                debug!(
                    flow = %self.flow.id,
                    initial = %initial_step_id,
                    "initial step not found, traversal finished"
                );
            }
        }
    }

    /// Stores `value` under `step_id`, returning the value it replaced.
    ///
    /// Values are not checked against the step's kind and history is left
    /// untouched.
    pub fn record_answer(&mut self, step_id: &str, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(step_id.to_string(), value)
    }

    /// Moves to the step that follows the current one.
    ///
    /// A missing or dangling pointer ends the flow. Calling this on a
    /// terminal session does nothing.
    pub fn advance(&mut self) -> Transition<'f> {
        let TraversalState::InProgress { current } = self.state else {
            return Transition::Idle;
        };
        let Some(step) = self.step(current) else {
            self.state = TraversalState::Terminal;
            return Transition::Completed { from: current };
        };

        let next = resolve_next(step, self.answers.get(current));
        match next.and_then(|id| self.resolve(id)) {
            Some(to) => {
                self.history.push(to);
                self.state = TraversalState::InProgress { current: to };
                debug!(flow = %self.flow.id, from = %current, to = %to, "advanced");
                Transition::Moved { from: current, to }
            }
            None => {
                if let Some(missing) = next {
                    warn!(
                        flow = %self.flow.id,
                        step = %current,
                        target = %missing,
                        "next step does not exist, ending flow"
                    );
                } else {
                    debug!(flow = %self.flow.id, step = %current, "end of flow");
                }
                self.state = TraversalState::Terminal;
                Transition::Completed { from: current }
            }
        }
    }

    /// Steps back to the previously visited step. Returns whether it moved.
    ///
    /// Answers are kept, so advancing again re-evaluates branching with
    /// whatever is recorded then.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.pop();
        if let Some(previous) = self.history.last().copied() {
            self.state = TraversalState::InProgress { current: previous };
            debug!(flow = %self.flow.id, step = %previous, "went back");
        }
        true
    }

    pub fn state(&self) -> TraversalState<'f> {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, TraversalState::Terminal)
    }

    pub fn can_go_back(&self) -> bool {
        !self.is_terminal() && self.history.len() > 1
    }

    pub fn current_step_id(&self) -> Option<&'f str> {
        match self.state {
            TraversalState::InProgress { current } => Some(current),
            TraversalState::Terminal => None,
        }
    }

    pub fn current_step(&self) -> Option<&'f Step> {
        self.current_step_id().and_then(|id| self.step(id))
    }

    pub fn history(&self) -> &[&'f str] {
        &self.history
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn flow(&self) -> &'f Flow {
        self.flow
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answer(&self, step_id: &str) -> Option<&AnswerValue> {
        self.answers.get(step_id)
    }

    /// Answers keyed by the variable name their step declares.
    pub fn variables(&self) -> AnswerSet {
        self.flow
            .steps
            .iter()
            .filter_map(|step| {
                let name = step.config.variable.as_deref()?;
                let value = self.answers.get(&step.id)?;
                Some((name.to_string(), value.clone()))
            })
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.history.len(),
            total_estimate: self.flow.len(),
            completed: self.is_terminal(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let completed = self.is_terminal();
        SessionSummary {
            completed,
            path: self.history.iter().map(|id| id.to_string()).collect(),
            answers: self.answers.clone(),
            reason: PathFormatter::format_path(self.flow, &self.history, completed),
        }
    }

    fn step(&self, id: &str) -> Option<&'f Step> {
        self.index.get(id).map(|i| &self.flow.steps[*i])
    }

    /// Maps an arbitrary id onto the flow-owned id, if the step exists.
    fn resolve(&self, id: &str) -> Option<&'f str> {
        self.step(id).map(|step| step.id.as_str())
    }
}
