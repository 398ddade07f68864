//! Persistence seam for flows.
//!
//! The engine only needs a materialized `Flow`; where it lives is up to the
//! `FlowStore` implementation. Saving is always explicit.

mod json_dir;
mod memory;

pub use json_dir::JsonDirStore;
pub use memory::InMemoryFlowStore;

use crate::error::StoreError;
use crate::flow::Flow;

/// Loads and saves flows by id.
pub trait FlowStore {
    fn get_flow(&self, id: &str) -> Result<Flow, StoreError>;

    /// Inserts or replaces the flow and stamps its `updated_at`.
    fn save_flow(&mut self, flow: &mut Flow) -> Result<(), StoreError>;

    /// Removes the flow, returning it.
    fn delete_flow(&mut self, id: &str) -> Result<Flow, StoreError>;

    /// Lists stored flows, optionally only those owned by one nutritionist,
    /// ordered by name.
    fn list_flows(&self, nutritionist_id: Option<&str>) -> Result<Vec<Flow>, StoreError>;
}

pub(crate) fn owned_by(flow: &Flow, nutritionist_id: Option<&str>) -> bool {
    nutritionist_id.is_none_or(|owner| flow.nutritionist_id == owner)
}
