use crate::flow::Flow;
use itertools::Itertools;

/// Formats traversal paths into human-readable strings.
pub struct PathFormatter;

impl PathFormatter {
    /// Renders visited step ids as `"Breakfast? -> Tip -> (end)"`.
    ///
    /// Steps are named by title, falling back to their id; ids no longer in
    /// the flow are shown as-is.
    pub fn format_path<S: AsRef<str>>(flow: &Flow, history: &[S], completed: bool) -> String {
        let mut parts: Vec<String> = history
            .iter()
            .map(|id| Self::step_label(flow, id.as_ref()))
            .collect();

        match (parts.is_empty(), completed) {
            (true, true) => "No step was shown".to_string(),
            (true, false) => "Not started".to_string(),
            (false, true) => {
                parts.push("(end)".to_string());
                parts.iter().join(" -> ")
            }
            (false, false) => parts.iter().join(" -> "),
        }
    }

    fn step_label(flow: &Flow, id: &str) -> String {
        flow.step(id)
            .map(|step| step.display_name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
