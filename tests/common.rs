//! Common test utilities for building flows.
use nutriflow::prelude::*;

/// The three-step flow used throughout the traversal tests.
///
/// A (single choice): "yes" -> C, "no" -> (default) B
/// B (information): default C
/// C (text input): no default
#[allow(dead_code)]
pub fn create_abc_flow() -> Flow {
    FlowBuilder::new("Breakfast check")
        .id("flow-abc")
        .owner("nutritionist-1")
        .step(
            Step::new("A", StepKind::SingleChoice, "Do you eat breakfast?")
                .with_options(vec![
                    ChoiceOption::new("yes", "Yes").leading_to("C"),
                    ChoiceOption::new("no", "No"),
                ])
                .with_default_next("B")
                .with_variable("eats_breakfast"),
        )
        .step(Step::new("B", StepKind::Information, "Why breakfast matters").with_default_next("C"))
        .step(Step::new("C", StepKind::TextInput, "Anything else?").with_variable("notes"))
        .build()
}

/// A single step whose default pointer targets a step that does not exist.
#[allow(dead_code)]
pub fn create_dangling_flow() -> Flow {
    FlowBuilder::new("Dangling")
        .id("flow-dangling")
        .step(Step::new("A", StepKind::Information, "Intro").with_default_next("Z"))
        .build()
}

/// A -> B -> A, forever.
#[allow(dead_code)]
pub fn create_cyclic_flow() -> Flow {
    FlowBuilder::new("Loop")
        .id("flow-loop")
        .step(Step::new("A", StepKind::Information, "First").with_default_next("B"))
        .step(Step::new("B", StepKind::Information, "Second").with_default_next("A"))
        .build()
}

/// A richer intake questionnaire mixing every answer shape.
///
/// goal (single) --lose--> portions (rating) --> foods (multi) --> photo --> end
///      \--maintain/other--> foods
/// portions "1" jumps straight to photo.
#[allow(dead_code)]
pub fn create_intake_flow() -> Flow {
    FlowBuilder::new("Intake")
        .id("flow-intake")
        .owner("nutritionist-2")
        .step(
            Step::new("goal", StepKind::SingleChoice, "Main goal")
                .with_prompt("What is your main goal?")
                .with_options(vec![
                    ChoiceOption::new("lose", "Lose weight").leading_to("portions"),
                    ChoiceOption::new("maintain", "Maintain"),
                ])
                .with_default_next("foods")
                .with_variable("goal"),
        )
        .step(
            Step::new("portions", StepKind::RatingScale, "Portion size")
                .with_scale(5)
                .with_options(vec![ChoiceOption::new("1", "Tiny").leading_to("photo")])
                .with_default_next("foods"),
        )
        .step(
            Step::new("foods", StepKind::MultipleChoice, "Foods you enjoy")
                .with_options(vec![
                    ChoiceOption::new("fruit", "Fruit"),
                    ChoiceOption::new("oats", "Oats"),
                    ChoiceOption::new("eggs", "Eggs"),
                ])
                .with_default_next("photo")
                .with_variable("foods"),
        )
        .step(Step::new("photo", StepKind::ImageCapture, "Photo of your lunch"))
        .build()
}

/// The intake flow as the dashboard stores it.
#[allow(dead_code)]
pub const INTAKE_DOCUMENT_JSON: &str = r#"{
    "id": "flow-doc",
    "name": "Intake (stored)",
    "nutritionistId": "nutritionist-2",
    "status": "draft",
    "steps": [
        {"id": "goal", "type": "singleChoice", "title": "Main goal",
         "config": {"prompt": "What is your main goal?",
                    "options": [{"value": "lose", "label": "Lose weight", "nextStepId": "foods"},
                                {"value": "maintain", "label": "Maintain"}],
                    "defaultNextStepId": "tip"}},
        {"id": "tip", "type": "information", "title": "Tip",
         "config": {"prompt": "Small changes add up.", "defaultNextStepId": "foods"}},
        {"id": "foods", "type": "multipleChoice", "title": "Foods",
         "config": {"options": [{"value": "fruit", "label": "Fruit"}, {"value": "oats", "label": "Oats"}]}}
    ],
    "positions": {"goal": {"x": 0.0, "y": 0.0}, "tip": {"x": 200.0, "y": 0.0}, "foods": {"x": 400.0, "y": 0.0}}
}"#;
