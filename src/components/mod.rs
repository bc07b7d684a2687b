//! Component kind registry and per-kind payloads
//!
//! The panel understands a fixed set of component kinds. Each kind with
//! fields lives in its own module with its payload struct, defaults, merge
//! step and sub-form; the field-less kinds (Selectable, Button, Toggle,
//! Dropdown) are plain unit payloads.

pub mod input_field;
pub mod scroll_view;
pub mod scrollbar;
pub mod slider;

pub use input_field::InputFieldData;
pub use scroll_view::{Axis, ScrollViewData, ScrollbarVisibility};
pub use scrollbar::ScrollbarData;
pub use slider::{Direction, SliderData};

use serde::{Deserialize, Serialize};

/// Kind-specific payload stored alongside a node's component type.
///
/// Internally tagged so the kind name round-trips through the host payload
/// as `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentData {
    Selectable,
    Button,
    Toggle,
    Dropdown,
    Slider(SliderData),
    Scrollbar(ScrollbarData),
    ScrollView(ScrollViewData),
    InputField(InputFieldData),
}

impl ComponentData {
    /// Kind tag carried by this payload.
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentData::Selectable => ComponentKind::Selectable,
            ComponentData::Button => ComponentKind::Button,
            ComponentData::Toggle => ComponentKind::Toggle,
            ComponentData::Dropdown => ComponentKind::Dropdown,
            ComponentData::Slider(_) => ComponentKind::Slider,
            ComponentData::Scrollbar(_) => ComponentKind::Scrollbar,
            ComponentData::ScrollView(_) => ComponentKind::ScrollView,
            ComponentData::InputField(_) => ComponentKind::InputField,
        }
    }

    /// Look up a single field by its wire name.
    ///
    /// This drives the merge step when a payload migrates between kinds:
    /// the new kind copies any same-named fields off the old payload and
    /// defaults the rest. Field-less kinds have nothing to offer.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match self {
            ComponentData::Slider(data) => data.field(name),
            ComponentData::Scrollbar(data) => data.field(name),
            ComponentData::ScrollView(data) => data.field(name),
            ComponentData::InputField(data) => data.field(name),
            _ => None,
        }
    }
}

/// A single named field value, passed between kinds during a payload merge.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Direction(Direction),
    Visibility(ScrollbarVisibility),
    Text(String),
    Width(u8),
}

/// The fixed set of component kinds the panel understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Selectable,
    Button,
    Toggle,
    InputField,
    Dropdown,
    Slider,
    ScrollView,
    Scrollbar,
}

impl ComponentKind {
    /// Registry order; also drives the autocomplete suggestions.
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Selectable,
        ComponentKind::Button,
        ComponentKind::Toggle,
        ComponentKind::InputField,
        ComponentKind::Dropdown,
        ComponentKind::Slider,
        ComponentKind::ScrollView,
        ComponentKind::Scrollbar,
    ];

    /// Unique registry name, matching the wire tag.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Selectable => "Selectable",
            ComponentKind::Button => "Button",
            ComponentKind::Toggle => "Toggle",
            ComponentKind::InputField => "InputField",
            ComponentKind::Dropdown => "Dropdown",
            ComponentKind::Slider => "Slider",
            ComponentKind::ScrollView => "ScrollView",
            ComponentKind::Scrollbar => "Scrollbar",
        }
    }

    /// Dispatch by name. Unknown or empty names have no kind, and the panel
    /// renders no sub-form for them.
    pub fn from_name(name: &str) -> Option<ComponentKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Fresh payload of this kind: defaults, with any same-named fields
    /// copied from the previous payload. Field values never survive a kind
    /// change except through this explicit per-name copy.
    pub fn instantiate(self, previous: Option<&ComponentData>) -> ComponentData {
        match self {
            ComponentKind::Selectable => ComponentData::Selectable,
            ComponentKind::Button => ComponentData::Button,
            ComponentKind::Toggle => ComponentData::Toggle,
            ComponentKind::Dropdown => ComponentData::Dropdown,
            ComponentKind::Slider => ComponentData::Slider(SliderData::merged_from(previous)),
            ComponentKind::Scrollbar => {
                ComponentData::Scrollbar(ScrollbarData::merged_from(previous))
            }
            ComponentKind::ScrollView => {
                ComponentData::ScrollView(ScrollViewData::merged_from(previous))
            }
            ComponentKind::InputField => {
                ComponentData::InputField(InputFieldData::merged_from(previous))
            }
        }
    }
}
