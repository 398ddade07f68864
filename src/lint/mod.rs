//! Publish-time validation of flows.
//!
//! The traversal engine absorbs broken branch pointers by ending the flow. The
//! linter is where those mistakes become visible: run it before a flow goes
//! live (`Flow::publish` does) or from the CLI while authoring.

mod rules;
mod types;

pub use types::{Diagnostic, LintReport, Severity};

use crate::flow::Flow;
use tracing::debug;

/// Checks a flow for broken references, unusable steps and suspicious topology.
pub fn lint(flow: &Flow) -> LintReport {
    let mut diagnostics = Vec::new();
    rules::duplicate_step_ids(flow, &mut diagnostics);
    rules::dangling_references(flow, &mut diagnostics);
    rules::option_configuration(flow, &mut diagnostics);
    rules::topology(flow, &mut diagnostics);

    debug!(
        flow = %flow.id,
        findings = diagnostics.len(),
        "lint finished"
    );
    LintReport { diagnostics }
}
