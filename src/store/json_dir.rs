use super::{FlowStore, owned_by};
use crate::error::StoreError;
use crate::flow::Flow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each flow as pretty-printed JSON in `<dir>/<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Opens (and creates, if needed) the storage directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        let usable = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !usable {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }
}

impl FlowStore for JsonDirStore {
    fn get_flow(&self, id: &str) -> Result<Flow, StoreError> {
        let path = self.path_for(id)?;
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(id.to_string()),
            _ => StoreError::Io(e),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_flow(&mut self, flow: &mut Flow) -> Result<(), StoreError> {
        let path = self.path_for(&flow.id)?;
        flow.touch();
        let json = serde_json::to_string_pretty(flow)?;
        fs::write(&path, json)?;
        debug!(flow = %flow.id, path = %path.display(), "flow saved");
        Ok(())
    }

    fn delete_flow(&mut self, id: &str) -> Result<Flow, StoreError> {
        let flow = self.get_flow(id)?;
        fs::remove_file(self.path_for(id)?)?;
        Ok(flow)
    }

    fn list_flows(&self, nutritionist_id: Option<&str>) -> Result<Vec<Flow>, StoreError> {
        let mut flows = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let flow: Flow = serde_json::from_str(&fs::read_to_string(&path)?)?;
            if owned_by(&flow, nutritionist_id) {
                flows.push(flow);
            }
        }
        flows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(flows)
    }
}
