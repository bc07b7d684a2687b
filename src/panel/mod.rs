//! Settings panel rendering
//!
//! The panel is a pure view over the metadata record: editors report user
//! input as `EditAction`s, each action is reduced against the record, and
//! the updated record is re-serialized and emitted to the host.

pub mod fields;
pub mod warnings;

use crate::host::HostEvent;
use crate::metadata::{serialize_metadata, NodeMetadata};
use crate::reducer::reduce;
use egui::Ui;

/// Renders the metadata form for the selected node.
///
/// Holds only local view state; the metadata value is passed in fresh on
/// every render pass, the way the host delivers it.
#[derive(Default)]
pub struct SettingsPanel {
    /// Whether the PAGE warnings disclosure is expanded.
    warnings_expanded: bool,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one pass of the panel and return the outbound host events.
    ///
    /// `None` metadata (nothing selected, or a malformed payload) renders
    /// the placeholder and emits nothing.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        metadata: &mut Option<NodeMetadata>,
    ) -> Vec<HostEvent> {
        let mut events = Vec::new();

        let Some(meta) = metadata.as_mut() else {
            fields::placeholder(ui);
            return events;
        };

        let mut actions = Vec::new();

        fields::title(ui, meta);
        actions.extend(fields::binding_key(ui, meta));
        actions.extend(fields::localization_key(ui, meta));
        actions.extend(fields::component_type(ui, meta));
        actions.extend(fields::tags(ui, meta));
        actions.extend(fields::ignored(ui, meta));
        warnings::show(ui, meta, &mut self.warnings_expanded, &mut events);

        // Apply the edits after the UI pass; each applied edit emits one
        // serialized update.
        for action in actions {
            if let Some(outcome) = reduce(meta, action) {
                events.push(HostEvent::SelectedNodeUpdated {
                    metadata: serialize_metadata(meta),
                    repaint: outcome.repaint,
                });
            }
        }

        events
    }
}
