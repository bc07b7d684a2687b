//! Input field component payload

use super::{ComponentData, FieldValue};
use crate::reducer::EditAction;
use egui::{ComboBox, Ui};
use serde::{Deserialize, Serialize};

/// Caret widths offered by the sub-form, in pixels.
pub const CARET_WIDTHS: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldData {
    /// Selection highlight color, hex without `#`.
    pub selection_color: String,
    /// Selection opacity in percent, kept as text for the host.
    pub selection_color_opacity: String,
    pub caret_color: String,
    pub caret_color_opacity: String,
    pub caret_width: u8,
}

impl Default for InputFieldData {
    fn default() -> Self {
        Self {
            selection_color: "A8CEFF".to_string(),
            selection_color_opacity: "75".to_string(),
            caret_color: "323232".to_string(),
            caret_color_opacity: "100".to_string(),
            caret_width: 1,
        }
    }
}

impl InputFieldData {
    /// Defaults plus any same-named fields from the previous payload.
    pub fn merged_from(previous: Option<&ComponentData>) -> Self {
        let mut data = Self::default();
        let Some(previous) = previous else {
            return data;
        };

        if let Some(FieldValue::Text(value)) = previous.field("selectionColor") {
            data.selection_color = value;
        }
        if let Some(FieldValue::Text(value)) = previous.field("selectionColorOpacity") {
            data.selection_color_opacity = value;
        }
        if let Some(FieldValue::Text(value)) = previous.field("caretColor") {
            data.caret_color = value;
        }
        if let Some(FieldValue::Text(value)) = previous.field("caretColorOpacity") {
            data.caret_color_opacity = value;
        }
        if let Some(FieldValue::Width(value)) = previous.field("caretWidth") {
            data.caret_width = value;
        }
        data
    }

    pub(crate) fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "selectionColor" => Some(FieldValue::Text(self.selection_color.clone())),
            "selectionColorOpacity" => {
                Some(FieldValue::Text(self.selection_color_opacity.clone()))
            }
            "caretColor" => Some(FieldValue::Text(self.caret_color.clone())),
            "caretColorOpacity" => Some(FieldValue::Text(self.caret_color_opacity.clone())),
            "caretWidth" => Some(FieldValue::Width(self.caret_width)),
            _ => None,
        }
    }

    /// Render the input field sub-form and return the edits the user made.
    pub fn build_interface(&self, ui: &mut Ui) -> Vec<EditAction> {
        let mut changes = Vec::new();

        Self::text_row(
            ui,
            "Selection Color",
            &self.selection_color,
            &mut changes,
            EditAction::SelectionColor,
        );
        Self::text_row(
            ui,
            "Selection Opacity",
            &self.selection_color_opacity,
            &mut changes,
            EditAction::SelectionColorOpacity,
        );
        Self::text_row(
            ui,
            "Caret Color",
            &self.caret_color,
            &mut changes,
            EditAction::CaretColor,
        );
        Self::text_row(
            ui,
            "Caret Opacity",
            &self.caret_color_opacity,
            &mut changes,
            EditAction::CaretColorOpacity,
        );

        let mut caret_width = self.caret_width;
        ComboBox::from_label("Caret Width")
            .selected_text(caret_width.to_string())
            .show_ui(ui, |ui| {
                for option in CARET_WIDTHS {
                    if ui
                        .selectable_value(&mut caret_width, option, option.to_string())
                        .changed()
                    {
                        changes.push(EditAction::CaretWidth(option));
                    }
                }
            });

        changes
    }

    fn text_row(
        ui: &mut Ui,
        label: &str,
        value: &str,
        changes: &mut Vec<EditAction>,
        action: impl FnOnce(String) -> EditAction,
    ) {
        let mut buffer = value.to_string();
        let changed = ui
            .horizontal(|ui| {
                ui.label(label);
                ui.text_edit_singleline(&mut buffer).changed()
            })
            .inner;
        if changed {
            changes.push(action(buffer));
        }
    }
}
