use super::definition::Flow;
use crate::error::SnapshotError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A frozen copy of a flow in a compact binary form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowSnapshot {
    pub format_version: u32,
    pub flow: Flow,
}

impl FlowSnapshot {
    pub const FORMAT_VERSION: u32 = 1;

    pub fn new(flow: Flow) -> Self {
        Self {
            format_version: Self::FORMAT_VERSION,
            flow,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| io_error(path, e))?;
        file.write_all(&bytes).map_err(|e| io_error(path, e))?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path).map_err(|e| io_error(path, e))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| io_error(path, e))?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let (snapshot, _): (Self, usize) =
            decode_from_slice(bytes, standard()).map_err(|e| SnapshotError::Decode(e.to_string()))?;
        if snapshot.format_version != Self::FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.format_version,
                expected: Self::FORMAT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

fn io_error(path: &str, e: std::io::Error) -> SnapshotError {
    SnapshotError::Io {
        path: path.to_string(),
        message: e.to_string(),
    }
}
