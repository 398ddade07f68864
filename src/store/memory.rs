use super::{FlowStore, owned_by};
use crate::error::StoreError;
use crate::flow::Flow;
use ahash::AHashMap;
use tracing::debug;

/// Keeps flows in a map. Useful for tests and for previews that never persist.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFlowStore {
    flows: AHashMap<String, Flow>,
}

impl InMemoryFlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

impl FlowStore for InMemoryFlowStore {
    fn get_flow(&self, id: &str) -> Result<Flow, StoreError> {
        self.flows
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn save_flow(&mut self, flow: &mut Flow) -> Result<(), StoreError> {
        flow.touch();
        self.flows.insert(flow.id.clone(), flow.clone());
        debug!(flow = %flow.id, "flow saved in memory");
        Ok(())
    }

    fn delete_flow(&mut self, id: &str) -> Result<Flow, StoreError> {
        self.flows
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_flows(&self, nutritionist_id: Option<&str>) -> Result<Vec<Flow>, StoreError> {
        let mut flows: Vec<Flow> = self
            .flows
            .values()
            .filter(|flow| owned_by(flow, nutritionist_id))
            .cloned()
            .collect();
        flows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(flows)
    }
}
