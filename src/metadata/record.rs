//! Metadata record for the selected canvas node

use crate::components::ComponentData;
use serde::{Deserialize, Serialize};

/// Diagnostic attached to a node by host-side checks.
///
/// Warnings are read-only in this layer and round-trip through the codec
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub message: String,
    pub node_id: String,
    pub node_name: String,
}

/// Editable side-data attached to one canvas node.
///
/// Rebuilt from the host payload on every selection change; durable storage
/// belongs to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub binding_key: String,
    #[serde(default)]
    pub localization_key: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub component_type: String,
    #[serde(default)]
    pub component_data: Option<ComponentData>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

/// How the component-type editor renders for a node, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentTypeEditor {
    Hidden,
    Editable,
    ReadOnly,
}

impl NodeMetadata {
    /// Create a record with identity fields set and everything else empty.
    pub fn new(name: &str, node_type: &str) -> Self {
        Self {
            name: name.to_string(),
            node_type: node_type.to_string(),
            binding_key: String::new(),
            localization_key: String::new(),
            tags: String::new(),
            ignored: false,
            component_type: String::new(),
            component_data: None,
            warnings: Vec::new(),
        }
    }

    /// Panel title, e.g. `Label (TEXT)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.node_type)
    }

    /// Localization keys only apply to text nodes.
    pub fn shows_localization_key(&self) -> bool {
        self.node_type == "TEXT"
    }

    /// Component types can be assigned to components and component sets;
    /// instances inherit theirs and only display it.
    pub fn component_type_editor(&self) -> ComponentTypeEditor {
        match self.node_type.as_str() {
            "COMPONENT" | "COMPONENT_SET" => ComponentTypeEditor::Editable,
            "INSTANCE" => ComponentTypeEditor::ReadOnly,
            _ => ComponentTypeEditor::Hidden,
        }
    }

    pub fn is_page(&self) -> bool {
        self.node_type == "PAGE"
    }
}
