use super::state::AnswerValue;
use crate::flow::Step;

/// Picks the id of the step that follows `step`, given its recorded answer.
///
/// Branching kinds (single choice, emoji and rating scales) follow the
/// `next_step_id` of the option whose value equals the answer. Everything
/// else, including a branching step whose option has no pointer, falls back
/// to `default_next_step_id`. Multiple-choice steps always use the default.
///
/// The returned id is not checked against the flow.
pub fn resolve_next<'f>(step: &'f Step, answer: Option<&AnswerValue>) -> Option<&'f str> {
    if step.kind.branches_on_answer() {
        let branch = answer
            .and_then(AnswerValue::selected)
            .and_then(|value| step.config.option(value))
            .and_then(|option| option.next_step_id.as_deref());
        if branch.is_some() {
            return branch;
        }
    }
    step.config.default_next_step_id.as_deref()
}

/// Every step id `resolve_next` could return for `step`.
pub fn successors(step: &Step) -> impl Iterator<Item = &str> {
    let options = step
        .config
        .options
        .iter()
        .filter(move |_| step.kind.branches_on_answer())
        .filter_map(|option| option.next_step_id.as_deref());
    options.chain(step.config.default_next_step_id.as_deref())
}
