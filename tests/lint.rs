//! Publish-time lint rules.
mod common;
use common::*;
use nutriflow::prelude::*;

#[test]
fn test_well_formed_flows_are_clean() {
    let report = lint(&create_abc_flow());
    assert!(report.is_valid());
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);

    let report = lint(&create_intake_flow());
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn test_dangling_default_is_an_error() {
    let report = lint(&create_dangling_flow());
    assert!(!report.is_valid());
    let errors = report.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E003");
    assert_eq!(errors[0].step_id.as_deref(), Some("A"));
    assert!(errors[0].message.contains("'Z'"));
}

#[test]
fn test_dangling_option_is_an_error() {
    let flow = FlowBuilder::new("f")
        .step(
            Step::new("A", StepKind::SingleChoice, "Pick")
                .with_options(vec![ChoiceOption::new("x", "X").leading_to("ghost")]),
        )
        .build();
    let report = lint(&flow);
    assert!(report.has_code("E002"));
}

#[test]
fn test_duplicate_ids_are_errors() {
    let flow = FlowBuilder::new("f")
        .step(Step::new("A", StepKind::Information, "one"))
        .step(Step::new("A", StepKind::Information, "two"))
        .build();
    let report = lint(&flow);
    assert!(report.has_code("E001"));
    assert!(!report.is_valid());
}

#[test]
fn test_choice_without_options_is_an_error() {
    let flow = FlowBuilder::new("f")
        .step(Step::new("A", StepKind::SingleChoice, "Pick").with_default_next("B"))
        .step(Step::new("B", StepKind::RatingScale, "Rate").with_scale(5))
        .build();
    let report = lint(&flow);
    let errors = report.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E004");
    assert_eq!(errors[0].step_id.as_deref(), Some("A"));
}

#[test]
fn test_unreachable_step_is_a_warning() {
    let flow = FlowBuilder::new("f")
        .step(Step::new("A", StepKind::Information, "Start"))
        .step(Step::new("orphan", StepKind::TextInput, "Never shown"))
        .build();
    let report = lint(&flow);
    assert!(report.is_valid());
    let warnings = report.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, "W001");
    assert_eq!(warnings[0].step_id.as_deref(), Some("orphan"));
}

#[test]
fn test_multiple_choice_branch_pointers_are_flagged() {
    let flow = FlowBuilder::new("f")
        .step(
            Step::new("A", StepKind::MultipleChoice, "Pick some")
                .with_options(vec![
                    ChoiceOption::new("x", "X").leading_to("B"),
                    ChoiceOption::new("y", "Y"),
                ])
                .with_default_next("B"),
        )
        .step(Step::new("B", StepKind::Information, "Done"))
        .build();
    let report = lint(&flow);
    assert!(report.has_code("W002"));
    assert!(report.is_valid());
}

#[test]
fn test_duplicate_option_values_are_flagged() {
    let flow = FlowBuilder::new("f")
        .step(Step::new("A", StepKind::SingleChoice, "Pick").with_options(vec![
            ChoiceOption::new("x", "X"),
            ChoiceOption::new("x", "Also X"),
        ]))
        .build();
    assert!(lint(&flow).has_code("W003"));
}

#[test]
fn test_cycles_are_flagged() {
    let report = lint(&create_cyclic_flow());
    assert!(report.is_valid());
    let cycle = report
        .diagnostics
        .iter()
        .find(|d| d.code == "W004")
        .expect("cycle warning");
    assert!(cycle.message.contains("A -> B -> A"), "{}", cycle.message);
}

#[test]
fn test_self_loop_is_flagged_separately() {
    let flow = FlowBuilder::new("f")
        .step(Step::new("A", StepKind::Information, "Again").with_default_next("A"))
        .build();
    let report = lint(&flow);
    assert!(report.has_code("W006"));
    assert!(!report.has_code("W004"));
}

#[test]
fn test_empty_flow_is_a_warning() {
    let report = lint(&FlowBuilder::new("empty").build());
    assert!(report.is_valid());
    assert!(report.has_code("W005"));
}
