//! Scrollbar component payload

use super::slider::Direction;
use super::{ComponentData, FieldValue};
use crate::reducer::EditAction;
use egui::{ComboBox, Ui};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollbarData {
    pub direction: Direction,
}

impl ScrollbarData {
    /// Defaults plus any same-named fields from the previous payload.
    ///
    /// `direction` is shared by name with Slider, so a slider's direction
    /// survives a switch to a scrollbar.
    pub fn merged_from(previous: Option<&ComponentData>) -> Self {
        let mut data = Self::default();
        if let Some(FieldValue::Direction(direction)) =
            previous.and_then(|p| p.field("direction"))
        {
            data.direction = direction;
        }
        data
    }

    pub(crate) fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "direction" => Some(FieldValue::Direction(self.direction)),
            _ => None,
        }
    }

    /// Render the scrollbar sub-form and return the edits the user made.
    pub fn build_interface(&self, ui: &mut Ui) -> Vec<EditAction> {
        let mut changes = Vec::new();
        let mut direction = self.direction;

        ComboBox::from_label("Direction")
            .selected_text(direction.label())
            .show_ui(ui, |ui| {
                for option in Direction::ALL {
                    if ui
                        .selectable_value(&mut direction, option, option.label())
                        .changed()
                    {
                        changes.push(EditAction::ScrollbarDirection(option));
                    }
                }
            });

        changes
    }
}
