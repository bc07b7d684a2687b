//! Edit actions and the metadata state transition
//!
//! Every editor in the panel reports user input as an `EditAction`. `reduce`
//! is the only place the metadata record is mutated, so the full transition
//! logic is testable without a rendering environment.

use crate::components::{Axis, ComponentData, ComponentKind, Direction, ScrollbarVisibility};
use crate::metadata::NodeMetadata;
use log::debug;

/// One user edit against the selected node's metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    BindingKey(String),
    LocalizationKey(String),
    Tags(String),
    Ignored(bool),
    ComponentType(String),
    ResetComponent,
    SliderDirection(Direction),
    ScrollbarDirection(Direction),
    ScrollViewVisibility {
        axis: Axis,
        visibility: ScrollbarVisibility,
    },
    SelectionColor(String),
    SelectionColorOpacity(String),
    CaretColor(String),
    CaretColorOpacity(String),
    CaretWidth(u8),
}

/// Result of applying one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether the host should repaint the node's visual representation.
    pub repaint: bool,
}

/// Apply one edit to the metadata record.
///
/// Returns `None` when the action was dropped without touching the record:
/// a sub-form action can go stale when the component kind switches within
/// the same frame, and a stale edit must not emit an update.
///
/// Repaint policy: the ignored flag, component resets and component-type
/// changes that match a registered kind can change the node's rendered
/// appearance; descriptive text and sub-form fields cannot.
pub fn reduce(meta: &mut NodeMetadata, action: EditAction) -> Option<EditOutcome> {
    debug!("Applying edit: {:?}", action);

    let repaint = match action {
        EditAction::BindingKey(value) => {
            meta.binding_key = value;
            false
        }
        EditAction::LocalizationKey(value) => {
            meta.localization_key = value;
            false
        }
        EditAction::Tags(value) => {
            meta.tags = value;
            false
        }
        EditAction::Ignored(value) => {
            meta.ignored = value;
            true
        }
        EditAction::ComponentType(name) => {
            let kind = ComponentKind::from_name(&name);
            let previous = meta.component_data.take();
            meta.component_data = kind.map(|kind| kind.instantiate(previous.as_ref()));
            meta.component_type = name;
            // A name with no registered kind leaves nothing to repaint.
            kind.is_some()
        }
        EditAction::ResetComponent => {
            meta.component_data =
                ComponentKind::from_name(&meta.component_type).map(|kind| kind.instantiate(None));
            true
        }
        EditAction::SliderDirection(direction) => match meta.component_data.as_mut() {
            Some(ComponentData::Slider(data)) => {
                data.direction = direction;
                false
            }
            _ => return drop_stale("SliderDirection"),
        },
        EditAction::ScrollbarDirection(direction) => match meta.component_data.as_mut() {
            Some(ComponentData::Scrollbar(data)) => {
                data.direction = direction;
                false
            }
            _ => return drop_stale("ScrollbarDirection"),
        },
        EditAction::ScrollViewVisibility { axis, visibility } => {
            match meta.component_data.as_mut() {
                Some(ComponentData::ScrollView(data)) => {
                    match axis {
                        Axis::Horizontal => data.horizontal_visibility = visibility,
                        Axis::Vertical => data.vertical_visibility = visibility,
                    }
                    false
                }
                _ => return drop_stale("ScrollViewVisibility"),
            }
        }
        EditAction::SelectionColor(value) => match meta.component_data.as_mut() {
            Some(ComponentData::InputField(data)) => {
                data.selection_color = value;
                false
            }
            _ => return drop_stale("SelectionColor"),
        },
        EditAction::SelectionColorOpacity(value) => match meta.component_data.as_mut() {
            Some(ComponentData::InputField(data)) => {
                data.selection_color_opacity = value;
                false
            }
            _ => return drop_stale("SelectionColorOpacity"),
        },
        EditAction::CaretColor(value) => match meta.component_data.as_mut() {
            Some(ComponentData::InputField(data)) => {
                data.caret_color = value;
                false
            }
            _ => return drop_stale("CaretColor"),
        },
        EditAction::CaretColorOpacity(value) => match meta.component_data.as_mut() {
            Some(ComponentData::InputField(data)) => {
                data.caret_color_opacity = value;
                false
            }
            _ => return drop_stale("CaretColorOpacity"),
        },
        EditAction::CaretWidth(value) => match meta.component_data.as_mut() {
            Some(ComponentData::InputField(data)) => {
                data.caret_width = value;
                false
            }
            _ => return drop_stale("CaretWidth"),
        },
    };

    Some(EditOutcome { repaint })
}

fn drop_stale(action: &str) -> Option<EditOutcome> {
    debug!("Dropping stale {} edit, component kind changed", action);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{InputFieldData, ScrollViewData, SliderData};

    fn component_node() -> NodeMetadata {
        NodeMetadata::new("Volume", "COMPONENT")
    }

    #[test]
    fn test_tags_edit_changes_only_tags() {
        let mut meta = component_node();
        let before = meta.clone();

        let outcome = reduce(&mut meta, EditAction::Tags("hero".to_string())).unwrap();
        assert!(!outcome.repaint);
        assert_eq!(meta.tags, "hero");

        meta.tags = before.tags.clone();
        assert_eq!(meta, before);
    }

    #[test]
    fn test_text_edits_never_repaint() {
        let mut meta = component_node();
        assert!(
            !reduce(&mut meta, EditAction::BindingKey("a.b".to_string()))
                .unwrap()
                .repaint
        );
        assert!(
            !reduce(&mut meta, EditAction::LocalizationKey("k".to_string()))
                .unwrap()
                .repaint
        );
        assert_eq!(meta.binding_key, "a.b");
        assert_eq!(meta.localization_key, "k");
    }

    #[test]
    fn test_ignored_toggle_repaints() {
        let mut meta = component_node();
        let outcome = reduce(&mut meta, EditAction::Ignored(true)).unwrap();
        assert!(outcome.repaint);
        assert!(meta.ignored);
    }

    #[test]
    fn test_component_type_to_known_kind() {
        let mut meta = component_node();
        let outcome = reduce(&mut meta, EditAction::ComponentType("Slider".to_string())).unwrap();

        assert!(outcome.repaint);
        assert_eq!(meta.component_type, "Slider");
        assert_eq!(
            meta.component_data,
            Some(ComponentData::Slider(SliderData {
                direction: Direction::LeftToRight
            }))
        );
    }

    #[test]
    fn test_component_type_to_unknown_name() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("Slider".to_string())).unwrap();

        let outcome = reduce(&mut meta, EditAction::ComponentType("Slid".to_string())).unwrap();
        assert!(!outcome.repaint);
        assert_eq!(meta.component_type, "Slid");
        assert_eq!(meta.component_data, None);
    }

    #[test]
    fn test_kind_switch_copies_same_named_fields() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("Slider".to_string())).unwrap();
        reduce(&mut meta, EditAction::SliderDirection(Direction::BottomToTop)).unwrap();

        reduce(&mut meta, EditAction::ComponentType("Scrollbar".to_string())).unwrap();
        match &meta.component_data {
            Some(ComponentData::Scrollbar(data)) => {
                assert_eq!(data.direction, Direction::BottomToTop)
            }
            other => panic!("expected scrollbar payload, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_switch_resets_unrelated_fields() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("InputField".to_string())).unwrap();
        reduce(&mut meta, EditAction::CaretWidth(5)).unwrap();

        reduce(&mut meta, EditAction::ComponentType("ScrollView".to_string())).unwrap();
        assert_eq!(
            meta.component_data,
            Some(ComponentData::ScrollView(ScrollViewData::default()))
        );
    }

    #[test]
    fn test_reset_component_restores_defaults() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("InputField".to_string())).unwrap();
        reduce(&mut meta, EditAction::CaretColor("FF0000".to_string())).unwrap();

        let outcome = reduce(&mut meta, EditAction::ResetComponent).unwrap();
        assert!(outcome.repaint);
        assert_eq!(
            meta.component_data,
            Some(ComponentData::InputField(InputFieldData::default()))
        );
    }

    #[test]
    fn test_reset_component_with_unknown_name_clears_payload() {
        let mut meta = component_node();
        meta.component_type = "Custom".to_string();

        let outcome = reduce(&mut meta, EditAction::ResetComponent).unwrap();
        assert!(outcome.repaint);
        assert_eq!(meta.component_data, None);
    }

    #[test]
    fn test_scroll_view_axes_are_independent() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("ScrollView".to_string())).unwrap();
        reduce(
            &mut meta,
            EditAction::ScrollViewVisibility {
                axis: Axis::Horizontal,
                visibility: ScrollbarVisibility::Permanent,
            },
        )
        .unwrap();

        match &meta.component_data {
            Some(ComponentData::ScrollView(data)) => {
                assert_eq!(data.horizontal_visibility, ScrollbarVisibility::Permanent);
                assert_eq!(
                    data.vertical_visibility,
                    ScrollbarVisibility::AutoHideAndExpandViewport
                );
            }
            other => panic!("expected scroll view payload, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_subform_edit_is_dropped() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("Button".to_string())).unwrap();

        let before = meta.clone();
        assert_eq!(
            reduce(&mut meta, EditAction::SliderDirection(Direction::TopToBottom)),
            None
        );
        assert_eq!(reduce(&mut meta, EditAction::CaretWidth(3)), None);
        assert_eq!(meta, before);
    }

    #[test]
    fn test_input_field_edits() {
        let mut meta = component_node();
        reduce(&mut meta, EditAction::ComponentType("InputField".to_string())).unwrap();

        for action in [
            EditAction::SelectionColor("112233".to_string()),
            EditAction::SelectionColorOpacity("40".to_string()),
            EditAction::CaretColor("445566".to_string()),
            EditAction::CaretColorOpacity("90".to_string()),
            EditAction::CaretWidth(2),
        ] {
            assert!(!reduce(&mut meta, action).unwrap().repaint);
        }

        match &meta.component_data {
            Some(ComponentData::InputField(data)) => {
                assert_eq!(data.selection_color, "112233");
                assert_eq!(data.selection_color_opacity, "40");
                assert_eq!(data.caret_color, "445566");
                assert_eq!(data.caret_color_opacity, "90");
                assert_eq!(data.caret_width, 2);
            }
            other => panic!("expected input field payload, got {:?}", other),
        }
    }
}
