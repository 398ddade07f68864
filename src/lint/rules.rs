use super::types::Diagnostic;
use crate::flow::{Flow, StepKind};
use crate::session::branch::successors;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;

pub(super) fn duplicate_step_ids(flow: &Flow, diags: &mut Vec<Diagnostic>) {
    for id in flow.steps.iter().map(|s| s.id.as_str()).duplicates() {
        diags.push(Diagnostic::error(
            "E001",
            format!("step id '{}' is used more than once", id),
            Some(id),
        ));
    }
}

pub(super) fn dangling_references(flow: &Flow, diags: &mut Vec<Diagnostic>) {
    let known: AHashSet<&str> = flow.steps.iter().map(|s| s.id.as_str()).collect();

    for step in &flow.steps {
        for option in &step.config.options {
            if let Some(target) = option.next_step_id.as_deref() {
                if !known.contains(target) {
                    diags.push(Diagnostic::error(
                        "E002",
                        format!(
                            "option '{}' leads to unknown step '{}'",
                            option.value, target
                        ),
                        Some(&step.id),
                    ));
                }
            }
        }
        if let Some(target) = step.config.default_next_step_id.as_deref() {
            if !known.contains(target) {
                diags.push(Diagnostic::error(
                    "E003",
                    format!("default next step '{}' does not exist", target),
                    Some(&step.id),
                ));
            }
        }
    }
}

pub(super) fn option_configuration(flow: &Flow, diags: &mut Vec<Diagnostic>) {
    for step in &flow.steps {
        let descriptor = step.kind.descriptor();
        let options = &step.config.options;

        let scale_only = step.kind == StepKind::RatingScale
            && step.config.scale.is_some_and(|n| n > 0);
        if descriptor.requires_options && options.is_empty() && !scale_only {
            diags.push(Diagnostic::error(
                "E004",
                format!("{} step has no options", step.kind),
                Some(&step.id),
            ));
        }

        if step.kind == StepKind::MultipleChoice {
            let branching = options
                .iter()
                .filter(|o| o.next_step_id.is_some())
                .map(|o| o.value.as_str())
                .join(", ");
            if !branching.is_empty() {
                diags.push(Diagnostic::warning(
                    "W002",
                    format!(
                        "multiple-choice options never branch; next step on [{}] is ignored",
                        branching
                    ),
                    Some(&step.id),
                ));
            }
        }

        for value in options.iter().map(|o| o.value.as_str()).duplicates() {
            diags.push(Diagnostic::warning(
                "W003",
                format!("option value '{}' appears more than once", value),
                Some(&step.id),
            ));
        }

        if successors(step).any(|target| target == step.id) {
            diags.push(Diagnostic::warning(
                "W006",
                "step leads back to itself".to_string(),
                Some(&step.id),
            ));
        }
    }
}

/// Reachability and cycle checks, both rooted at the first step.
pub(super) fn topology(flow: &Flow, diags: &mut Vec<Diagnostic>) {
    let Some(first) = flow.first_step() else {
        diags.push(Diagnostic::warning(
            "W005",
            "flow has no steps".to_string(),
            None,
        ));
        return;
    };

    let index = flow.step_index();
    let out_edges: AHashMap<&str, Vec<&str>> = flow
        .steps
        .iter()
        .map(|step| {
            let targets = successors(step)
                .filter(|t| *t != step.id && index.contains_key(t))
                .unique()
                .collect();
            (step.id.as_str(), targets)
        })
        .collect();

    let reachable = bfs_reachable(&first.id, &out_edges);
    for step in &flow.steps {
        if !reachable.contains(step.id.as_str()) {
            diags.push(Diagnostic::warning(
                "W001",
                "step is unreachable from the first step".to_string(),
                Some(&step.id),
            ));
        }
    }

    if let Some(cycle) = find_cycle(&first.id, &out_edges) {
        diags.push(Diagnostic::warning(
            "W004",
            format!("cycle detected: {}", cycle.iter().join(" -> ")),
            cycle.first().copied(),
        ));
    }
}

fn bfs_reachable<'a>(
    start: &'a str,
    out_edges: &AHashMap<&'a str, Vec<&'a str>>,
) -> AHashSet<&'a str> {
    let mut reachable = AHashSet::new();
    let mut queue = VecDeque::new();
    reachable.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for next in out_edges.get(node).into_iter().flatten() {
            if reachable.insert(*next) {
                queue.push_back(*next);
            }
        }
    }
    reachable
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Iterative DFS. Returns the first cycle found as a closed path
/// (`a -> b -> a`).
fn find_cycle<'a>(
    start: &'a str,
    out_edges: &AHashMap<&'a str, Vec<&'a str>>,
) -> Option<Vec<&'a str>> {
    let mut marks: AHashMap<&str, Mark> = AHashMap::new();
    let mut path: Vec<&str> = vec![start];
    let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
    marks.insert(start, Mark::Visiting);

    while let Some((node, next_child)) = stack.last_mut() {
        let children = out_edges.get(*node).map(Vec::as_slice).unwrap_or(&[]);
        if let Some(child) = children.get(*next_child).copied() {
            *next_child += 1;
            match marks.get(child) {
                Some(Mark::Visiting) => {
                    let from = path.iter().position(|n| *n == child).unwrap_or(0);
                    let mut cycle = path[from..].to_vec();
                    cycle.push(child);
                    return Some(cycle);
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(child, Mark::Visiting);
                    path.push(child);
                    stack.push((child, 0));
                }
            }
        } else {
            marks.insert(*node, Mark::Done);
            path.pop();
            stack.pop();
        }
    }
    None
}
