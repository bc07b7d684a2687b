//! Slider component payload

use super::{ComponentData, FieldValue};
use crate::reducer::EditAction;
use egui::{ComboBox, Ui};
use serde::{Deserialize, Serialize};

/// Travel direction for sliders and scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    BottomToTop,
    TopToBottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::BottomToTop,
        Direction::TopToBottom,
    ];

    /// Canonical name, matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            Direction::LeftToRight => "LeftToRight",
            Direction::RightToLeft => "RightToLeft",
            Direction::BottomToTop => "BottomToTop",
            Direction::TopToBottom => "TopToBottom",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::LeftToRight
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderData {
    pub direction: Direction,
}

impl SliderData {
    /// Defaults plus any same-named fields from the previous payload.
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

    /// Render the slider sub-form and return the edits the user made.
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
                        changes.push(EditAction::SliderDirection(option));
                    }
                }
            });

        changes
    }
}
