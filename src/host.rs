//! Outbound events toward the host application
//!
//! All events are fire-and-forget; the panel never waits for a response.
//! Durability and conflict resolution belong to the host.

/// Messages the panel emits during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Updated serialized metadata to persist on the node, with a flag
    /// telling the host whether the node's visuals need refreshing.
    SelectedNodeUpdated { metadata: String, repaint: bool },
    /// Ask the host to change the canvas selection to this node.
    SelectNode(String),
    /// The warnings list was expanded.
    ShowWarnings,
    /// The warnings list was collapsed.
    HideWarnings,
}
