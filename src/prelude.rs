//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! nutriflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nutriflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let flow = FlowDocument::from_json(&json)?.into_flow()?;
//!
//! let report = lint(&flow);
//! for diagnostic in &report.diagnostics {
//!     println!("{}", diagnostic);
//! }
//!
//! let script = AnswerScript::from_file("path/to/answers.json")?;
//! let preview = Simulator::new(&flow, PreviewConfig::default()).run(&script)?;
//! println!("{}", preview.reason);
//! # Ok(())
//! # }
//! ```

// Flow model and construction
pub use crate::flow::{
    ChoiceOption, Flow, FlowBuilder, FlowDocument, FlowSnapshot, FlowStatus, IntoFlow,
    KindRegistry, Position, Step, StepConfig, StepKind,
};

// Traversal
pub use crate::session::{
    AnswerValue, Progress, SessionSummary, SimulationReport, Simulator, Transition,
    TraversalSession, TraversalState, resolve_next,
};

// Validation
pub use crate::lint::{Diagnostic, LintReport, Severity, lint};

// Persistence
pub use crate::store::{FlowStore, InMemoryFlowStore, JsonDirStore};

// Configuration and scripted data
pub use crate::config::PreviewConfig;
pub use crate::data::AnswerScript;

// Error types
pub use crate::error::{FlowConversionError, FlowError, PreviewError, SnapshotError, StoreError};

// Path formatting
pub use crate::trace::PathFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
