use thiserror::Error;

/// Errors that can occur while editing a flow in the builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Step '{0}' not found in flow")]
    StepNotFound(String),

    #[error("Step id '{0}' is already used in this flow")]
    DuplicateStepId(String),

    #[error("Flow '{0}' is archived and can no longer be edited")]
    NotEditable(String),

    #[error("Flow '{flow_id}' cannot be published: {error_count} lint error(s), first: {first}")]
    PublishRejected {
        flow_id: String,
        error_count: usize,
        first: String,
    },
}

/// Errors that can occur when converting an external document into a `Flow`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowConversionError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Step '{step_id}' has an unregistered step type: '{type_name}'")]
    UnknownStepKind { step_id: String, type_name: String },

    #[error("Invalid flow document: {0}")]
    ValidationError(String),
}

/// Errors raised while encoding or decoding a flow snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot encoding failed: {0}")]
    Encode(String),

    #[error("Snapshot decoding failed: {0}")]
    Decode(String),

    #[error("Unsupported snapshot format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors surfaced by a `FlowStore` implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Flow '{0}' not found")]
    NotFound(String),

    #[error("Flow id '{0}' cannot be used as a storage key")]
    InvalidId(String),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize flow: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors produced by the preview simulator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("Preview stopped after {limit} steps without reaching the end (path: {path})")]
    StepLimitExceeded { limit: usize, path: String },
}
