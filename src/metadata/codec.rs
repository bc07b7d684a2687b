//! JSON codec for the host's metadata payload

use super::NodeMetadata;
use log::warn;

/// Serialize metadata back into the host's wire form.
pub fn serialize_metadata(meta: &NodeMetadata) -> String {
    match serde_json::to_string(meta) {
        Ok(json) => json,
        Err(err) => {
            warn!("Failed to serialize metadata for '{}': {}", meta.name, err);
            String::new()
        }
    }
}

/// Parse the host payload into a metadata record.
///
/// Fails closed: malformed or empty payloads resolve to `None` ("nothing
/// selected") instead of propagating an error into the render pass.
pub fn deserialize_metadata(payload: &str) -> Option<NodeMetadata> {
    if payload.trim().is_empty() {
        return None;
    }

    match serde_json::from_str(payload) {
        Ok(meta) => Some(meta),
        Err(err) => {
            warn!("Malformed metadata payload, treating as no selection: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentData, ComponentKind, Direction};
    use crate::metadata::Warning;

    fn sample() -> NodeMetadata {
        let mut meta = NodeMetadata::new("Volume", "COMPONENT");
        meta.binding_key = "audio.volume".to_string();
        meta.tags = "hud settings".to_string();
        meta.component_type = "Slider".to_string();
        meta.component_data = Some(ComponentKind::Slider.instantiate(None));
        meta.warnings = vec![Warning {
            message: "Missing binding".to_string(),
            node_id: "12:7".to_string(),
            node_name: "Handle".to_string(),
        }];
        meta
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let meta = sample();
        let restored = deserialize_metadata(&serialize_metadata(&meta)).unwrap();
        assert_eq!(restored, meta);
    }

    #[test]
    fn test_round_trip_every_component_kind() {
        for kind in ComponentKind::ALL {
            let mut meta = NodeMetadata::new("Widget", "COMPONENT");
            meta.component_type = kind.name().to_string();
            meta.component_data = Some(kind.instantiate(None));
            let restored = deserialize_metadata(&serialize_metadata(&meta)).unwrap();
            assert_eq!(restored, meta);
            assert_eq!(restored.component_data.unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_enum_fields_use_canonical_names() {
        let mut meta = NodeMetadata::new("List", "COMPONENT");
        meta.component_type = "ScrollView".to_string();
        meta.component_data = Some(ComponentKind::ScrollView.instantiate(None));

        let json = serialize_metadata(&meta);
        assert!(json.contains("\"type\":\"ScrollView\""));
        assert!(json.contains("\"AutoHideAndExpandViewport\""));
    }

    #[test]
    fn test_slider_payload_tag_round_trips() {
        let mut meta = NodeMetadata::new("Volume", "COMPONENT");
        meta.component_type = "Slider".to_string();
        meta.component_data = Some(ComponentData::Slider(Default::default()));

        let json = serialize_metadata(&meta);
        assert!(json.contains("\"type\":\"Slider\""));
        assert!(json.contains("\"direction\":\"LeftToRight\""));

        let restored = deserialize_metadata(&json).unwrap();
        match restored.component_data {
            Some(ComponentData::Slider(data)) => {
                assert_eq!(data.direction, Direction::LeftToRight)
            }
            other => panic!("expected slider payload, got {:?}", other),
        }
    }

    #[test]
    fn test_warnings_preserved_in_order() {
        let mut meta = NodeMetadata::new("Menu", "PAGE");
        for i in 0..4 {
            meta.warnings.push(Warning {
                message: format!("warning {}", i),
                node_id: format!("1:{}", i),
                node_name: format!("Node {}", i),
            });
        }
        let restored = deserialize_metadata(&serialize_metadata(&meta)).unwrap();
        assert_eq!(restored.warnings, meta.warnings);
    }

    #[test]
    fn test_malformed_payload_fails_closed() {
        assert_eq!(deserialize_metadata("not json"), None);
        assert_eq!(deserialize_metadata("{\"name\":"), None);
        assert_eq!(deserialize_metadata("[1,2,3]"), None);
    }

    #[test]
    fn test_empty_payload_is_no_selection() {
        assert_eq!(deserialize_metadata(""), None);
        assert_eq!(deserialize_metadata("   "), None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let meta = deserialize_metadata("{\"name\":\"Label\",\"type\":\"TEXT\"}").unwrap();
        assert_eq!(meta.name, "Label");
        assert_eq!(meta.binding_key, "");
        assert!(!meta.ignored);
        assert_eq!(meta.component_data, None);
        assert!(meta.warnings.is_empty());
    }
}
