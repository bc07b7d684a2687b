//! Warnings section of the panel
//!
//! Page nodes collect warnings for their whole subtree, so they get an
//! expandable list with jump-to-node actions; any other node just shows its
//! own messages in a flat banner.

use crate::host::HostEvent;
use crate::metadata::{NodeMetadata, Warning};
use egui::{Color32, CollapsingHeader, RichText, Ui};

/// How the warnings section renders for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum WarningsView {
    /// No warnings, nothing rendered.
    Hidden,
    /// Expandable list with jump actions, in input order.
    Disclosure(Vec<Warning>),
    /// Flat list of message texts, no jump actions.
    Banner(Vec<String>),
}

/// Pure view-model builder, testable without a rendering environment.
pub fn view_for(meta: &NodeMetadata) -> WarningsView {
    if meta.warnings.is_empty() {
        WarningsView::Hidden
    } else if meta.is_page() {
        WarningsView::Disclosure(meta.warnings.clone())
    } else {
        WarningsView::Banner(meta.warnings.iter().map(|w| w.message.clone()).collect())
    }
}

pub fn show(
    ui: &mut Ui,
    meta: &NodeMetadata,
    expanded: &mut bool,
    events: &mut Vec<HostEvent>,
) {
    match view_for(meta) {
        WarningsView::Hidden => {}
        WarningsView::Disclosure(warnings) => {
            let header = CollapsingHeader::new(format!("Warnings ({})", warnings.len()))
                .open(Some(*expanded))
                .show(ui, |ui| {
                    for warning in &warnings {
                        ui.horizontal(|ui| {
                            if ui
                                .small_button("⌖")
                                .on_hover_text("Select element")
                                .clicked()
                            {
                                events.push(HostEvent::SelectNode(warning.node_id.clone()));
                            }
                            ui.label(&warning.node_name);
                        });
                    }
                });

            if header.header_response.clicked() {
                *expanded = !*expanded;
                events.push(if *expanded {
                    HostEvent::ShowWarnings
                } else {
                    HostEvent::HideWarnings
                });
            }
        }
        WarningsView::Banner(messages) => {
            ui.group(|ui| {
                for message in &messages {
                    ui.label(
                        RichText::new(format!("⚠ {}", message))
                            .color(Color32::from_rgb(255, 200, 100)),
                    );
                }
            });
        }
    }
}
