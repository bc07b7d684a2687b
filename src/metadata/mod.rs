//! Node metadata record and JSON codec

pub mod codec;
pub mod record;

pub use codec::{deserialize_metadata, serialize_metadata};
pub use record::{ComponentTypeEditor, NodeMetadata, Warning};
