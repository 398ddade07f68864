//! # Nutriflow - Questionnaire Flow Engine
//!
//! **Nutriflow** models the questionnaire "flows" that nutrition clinic
//! specialists build for their patients: an ordered set of steps (information
//! text, free-text questions, single and multiple choice, rating scales, media
//! capture and display) linked by per-option and default "next step" pointers.
//!
//! ## Core Workflow
//!
//! 1.  **Load a flow**: build one in code with `FlowBuilder`, read a stored
//!     document through `FlowDocument` (or your own type implementing `IntoFlow`),
//!     or fetch it from a `FlowStore`.
//! 2.  **Lint it**: `lint` reports dangling pointers, unreachable steps and
//!     cycles. `Flow::publish` refuses flows with lint errors.
//! 3.  **Walk it**: a `TraversalSession` records answers, advances along the
//!     branch the answers select and steps back through its visit history.
//!     Broken pointers never fail a session; they end the flow.
//! 4.  **Preview it**: `Simulator` runs a flow against scripted answers.
//!
//! ## Quick Start
//!
//! ```rust
//! use nutriflow::prelude::*;
//!
//! let flow = FlowBuilder::new("Morning habits")
//!     .step(
//!         Step::new("a", StepKind::SingleChoice, "Do you eat breakfast?")
//!             .with_options(vec![
//!                 ChoiceOption::new("yes", "Yes").leading_to("c"),
//!                 ChoiceOption::new("no", "No"),
//!             ])
//!             .with_default_next("b"),
//!     )
//!     .step(Step::new("b", StepKind::Information, "Why breakfast matters").with_default_next("c"))
//!     .step(Step::new("c", StepKind::TextInput, "What did you drink today?"))
//!     .build();
//!
//! assert!(lint(&flow).is_valid());
//!
//! let mut session = TraversalSession::start_at_first(&flow);
//! session.record_answer("a", AnswerValue::text("no"));
//! session.advance();
//! assert_eq!(session.current_step_id(), Some("b"));
//!
//! session.go_back();
//! session.record_answer("a", AnswerValue::text("yes"));
//! session.advance();
//! assert_eq!(session.current_step_id(), Some("c"));
//!
//! session.advance();
//! assert!(session.is_terminal());
//! assert_eq!(
//!     session.summary().reason,
//!     "Do you eat breakfast? -> What did you drink today? -> (end)"
//! );
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod flow;
pub mod lint;
pub mod prelude;
pub mod session;
pub mod store;
pub mod trace;
