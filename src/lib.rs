//! Nodemeta core library
//!
//! Settings panel for editing the metadata attached to design-canvas nodes.

// Public modules
pub mod components;
pub mod constants;
pub mod host;
pub mod metadata;
pub mod panel;
pub mod reducer;

// Re-export commonly used types
pub use components::{ComponentData, ComponentKind};
pub use host::HostEvent;
pub use metadata::{deserialize_metadata, serialize_metadata, NodeMetadata, Warning};
pub use panel::SettingsPanel;
pub use reducer::{reduce, EditAction, EditOutcome};
