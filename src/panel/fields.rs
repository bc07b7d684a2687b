//! Field editors for the metadata form
//!
//! Each editor renders from the live record and reports user input as
//! `EditAction`s; it never mutates the record itself.

use crate::components::{ComponentData, ComponentKind};
use crate::metadata::{ComponentTypeEditor, NodeMetadata};
use crate::reducer::EditAction;
use egui::{TextEdit, Ui};

/// Placeholder shown when no node is selected or the payload was malformed.
pub fn placeholder(ui: &mut Ui) {
    ui.label("Select a node.");
}

pub fn title(ui: &mut Ui, meta: &NodeMetadata) {
    ui.heading(meta.title());
    ui.separator();
}

pub fn binding_key(ui: &mut Ui, meta: &NodeMetadata) -> Vec<EditAction> {
    text_row(ui, "Binding Key", &meta.binding_key)
        .map(EditAction::BindingKey)
        .into_iter()
        .collect()
}

/// Only text nodes carry a localization key.
pub fn localization_key(ui: &mut Ui, meta: &NodeMetadata) -> Vec<EditAction> {
    if !meta.shows_localization_key() {
        return Vec::new();
    }
    text_row(ui, "Localization Key", &meta.localization_key)
        .map(EditAction::LocalizationKey)
        .into_iter()
        .collect()
}

pub fn tags(ui: &mut Ui, meta: &NodeMetadata) -> Vec<EditAction> {
    text_row(ui, "Tags", &meta.tags)
        .map(EditAction::Tags)
        .into_iter()
        .collect()
}

pub fn ignored(ui: &mut Ui, meta: &NodeMetadata) -> Vec<EditAction> {
    let mut ignored = meta.ignored;
    if ui.checkbox(&mut ignored, "Ignored").changed() {
        vec![EditAction::Ignored(ignored)]
    } else {
        Vec::new()
    }
}

/// Component type editor plus the kind-specific sub-form.
///
/// Components and component sets get a free-text field with the registered
/// kind names as suggestions and a reset button; instances only display
/// their inherited type.
pub fn component_type(ui: &mut Ui, meta: &NodeMetadata) -> Vec<EditAction> {
    let mut actions = Vec::new();

    match meta.component_type_editor() {
        ComponentTypeEditor::Hidden => {}
        ComponentTypeEditor::ReadOnly => {
            ui.horizontal(|ui| {
                ui.label("Component Type");
                let mut buffer = meta.component_type.clone();
                ui.add_enabled(false, TextEdit::singleline(&mut buffer));
            });
        }
        ComponentTypeEditor::Editable => {
            ui.horizontal(|ui| {
                ui.label("Component Type");
                let mut buffer = meta.component_type.clone();
                if ui.text_edit_singleline(&mut buffer).changed() {
                    actions.push(EditAction::ComponentType(buffer));
                }
                if ui
                    .button("⟲")
                    .on_hover_text("Reset Component")
                    .clicked()
                {
                    actions.push(EditAction::ResetComponent);
                }
            });

            // Kind-name suggestions for the free-text field.
            ui.horizontal_wrapped(|ui| {
                for kind in ComponentKind::ALL {
                    if ui.small_button(kind.name()).clicked() {
                        actions.push(EditAction::ComponentType(kind.name().to_string()));
                    }
                }
            });

            component_form(ui, meta, &mut actions);
        }
    }

    actions
}

/// Kind-specific sub-form, dispatched off the stored payload. Field-less
/// kinds and unknown names render nothing.
fn component_form(ui: &mut Ui, meta: &NodeMetadata, actions: &mut Vec<EditAction>) {
    let Some(data) = meta.component_data.as_ref() else {
        return;
    };

    match data {
        ComponentData::Slider(data) => actions.extend(data.build_interface(ui)),
        ComponentData::Scrollbar(data) => actions.extend(data.build_interface(ui)),
        ComponentData::ScrollView(data) => actions.extend(data.build_interface(ui)),
        ComponentData::InputField(data) => actions.extend(data.build_interface(ui)),
        ComponentData::Selectable
        | ComponentData::Button
        | ComponentData::Toggle
        | ComponentData::Dropdown => {}
    }
}

/// Label + single-line text box; returns the new text when edited.
fn text_row(ui: &mut Ui, label: &str, value: &str) -> Option<String> {
    let mut buffer = value.to_string();
    let changed = ui
        .horizontal(|ui| {
            ui.label(label);
            ui.text_edit_singleline(&mut buffer).changed()
        })
        .inner;
    changed.then_some(buffer)
}
