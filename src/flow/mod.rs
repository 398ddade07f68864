pub mod builder;
pub mod conversion;
pub mod definition;
pub mod document;
pub mod registry;
pub mod snapshot;

pub use builder::*;
pub use conversion::*;
pub use definition::*;
pub use document::*;
pub use registry::*;
pub use snapshot::*;
