//! Scroll view component payload

use super::{ComponentData, FieldValue};
use crate::reducer::EditAction;
use egui::{ComboBox, Ui};
use serde::{Deserialize, Serialize};

/// Scrollbar visibility policy for scroll views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollbarVisibility {
    Permanent,
    AutoHide,
    AutoHideAndExpandViewport,
}

impl ScrollbarVisibility {
    pub const ALL: [ScrollbarVisibility; 3] = [
        ScrollbarVisibility::Permanent,
        ScrollbarVisibility::AutoHide,
        ScrollbarVisibility::AutoHideAndExpandViewport,
    ];

    /// Canonical name, matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            ScrollbarVisibility::Permanent => "Permanent",
            ScrollbarVisibility::AutoHide => "AutoHide",
            ScrollbarVisibility::AutoHideAndExpandViewport => "AutoHideAndExpandViewport",
        }
    }
}

impl Default for ScrollbarVisibility {
    fn default() -> Self {
        ScrollbarVisibility::AutoHideAndExpandViewport
    }
}

/// Which scrollbar of a scroll view an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollViewData {
    pub horizontal_visibility: ScrollbarVisibility,
    pub vertical_visibility: ScrollbarVisibility,
}

impl ScrollViewData {
    /// Defaults plus any same-named fields from the previous payload.
    pub fn merged_from(previous: Option<&ComponentData>) -> Self {
        let mut data = Self::default();
        if let Some(FieldValue::Visibility(visibility)) =
            previous.and_then(|p| p.field("horizontalVisibility"))
        {
            data.horizontal_visibility = visibility;
        }
        if let Some(FieldValue::Visibility(visibility)) =
            previous.and_then(|p| p.field("verticalVisibility"))
        {
            data.vertical_visibility = visibility;
        }
        data
    }

    pub(crate) fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "horizontalVisibility" => Some(FieldValue::Visibility(self.horizontal_visibility)),
            "verticalVisibility" => Some(FieldValue::Visibility(self.vertical_visibility)),
            _ => None,
        }
    }

    /// Render the scroll view sub-form and return the edits the user made.
    pub fn build_interface(&self, ui: &mut Ui) -> Vec<EditAction> {
        let mut changes = Vec::new();

        Self::visibility_row(
            ui,
            "Horizontal Scrollbar Visibility",
            self.horizontal_visibility,
            Axis::Horizontal,
            &mut changes,
        );
        Self::visibility_row(
            ui,
            "Vertical Scrollbar Visibility",
            self.vertical_visibility,
            Axis::Vertical,
            &mut changes,
        );

        changes
    }

    fn visibility_row(
        ui: &mut Ui,
        label: &str,
        current: ScrollbarVisibility,
        axis: Axis,
        changes: &mut Vec<EditAction>,
    ) {
        let mut visibility = current;
        ComboBox::from_label(label)
            .selected_text(visibility.label())
            .show_ui(ui, |ui| {
                for option in ScrollbarVisibility::ALL {
                    if ui
                        .selectable_value(&mut visibility, option, option.label())
                        .changed()
                    {
                        changes.push(EditAction::ScrollViewVisibility {
                            axis,
                            visibility: option,
                        });
                    }
                }
            });
    }
}
