use super::definition::Flow;
use crate::error::FlowConversionError;

/// A trait for external flow representations that can be converted into a `Flow`.
///
/// Documents coming from the clinic's document store, hand-written JSON or any
/// other tool implement this to hand the engine its canonical model.
///
/// # Example
///
/// ```rust
/// use nutriflow::prelude::*;
/// use nutriflow::error::FlowConversionError;
///
/// struct Checklist { items: Vec<String> }
///
/// impl IntoFlow for Checklist {
///     fn into_flow(self) -> std::result::Result<Flow, FlowConversionError> {
///         let count = self.items.len();
///         let mut builder = FlowBuilder::new("Checklist");
///         for (i, item) in self.items.into_iter().enumerate() {
///             let mut step = Step::new(format!("item-{}", i), StepKind::TextInput, item);
///             if i + 1 < count {
///                 step = step.with_default_next(format!("item-{}", i + 1));
///             }
///             builder = builder.step(step);
///         }
///         Ok(builder.build())
///     }
/// }
///
/// let flow = Checklist { items: vec!["Weight".into(), "Height".into()] }.into_flow().unwrap();
/// assert_eq!(flow.steps[0].config.default_next_step_id.as_deref(), Some("item-1"));
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a flow.
    fn into_flow(self) -> Result<Flow, FlowConversionError>;
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        Ok(self)
    }
}
