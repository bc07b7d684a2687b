//! Nodemeta - settings panel for design-canvas node metadata
//!
//! Standalone shell: a mock document of canvas nodes on the left plays the
//! host, the settings panel edits the selected node's metadata, and the
//! emitted events are applied back to the mock store the way the host would
//! persist them.

use eframe::egui;
use log::{debug, info};
use nodemeta::constants;
use nodemeta::{
    deserialize_metadata, serialize_metadata, ComponentKind, HostEvent, NodeMetadata,
    SettingsPanel, Warning,
};

/// One canvas node in the mock document.
struct MockNode {
    id: String,
    metadata: NodeMetadata,
}

/// Host stand-in: owns the document and the current selection.
struct MockHost {
    nodes: Vec<MockNode>,
    selected: Option<usize>,
}

impl MockHost {
    fn sample() -> Self {
        let mut title = NodeMetadata::new("Title Label", "TEXT");
        title.localization_key = "menu.title".to_string();

        let mut slider = NodeMetadata::new("Volume Slider", "COMPONENT");
        slider.binding_key = "audio.volume".to_string();
        slider.component_type = "Slider".to_string();
        slider.component_data = Some(ComponentKind::Slider.instantiate(None));

        let buttons = NodeMetadata::new("Buttons", "COMPONENT_SET");

        let mut instance = NodeMetadata::new("Volume Slider Copy", "INSTANCE");
        instance.component_type = "Slider".to_string();

        let mut hud = NodeMetadata::new("Hud", "FRAME");
        hud.warnings = vec![Warning {
            message: "Binding key is empty".to_string(),
            node_id: "2:1".to_string(),
            node_name: "Hud".to_string(),
        }];

        let mut page = NodeMetadata::new("Main Menu", "PAGE");
        page.warnings = vec![
            Warning {
                message: "Binding key is empty".to_string(),
                node_id: "1:1".to_string(),
                node_name: "Title Label".to_string(),
            },
            Warning {
                message: "Component type does not match a known kind".to_string(),
                node_id: "1:4".to_string(),
                node_name: "Volume Slider Copy".to_string(),
            },
        ];

        let nodes = vec![
            MockNode { id: "1:1".to_string(), metadata: title },
            MockNode { id: "1:2".to_string(), metadata: slider },
            MockNode { id: "1:3".to_string(), metadata: buttons },
            MockNode { id: "1:4".to_string(), metadata: instance },
            MockNode { id: "2:1".to_string(), metadata: hud },
            MockNode { id: "0:1".to_string(), metadata: page },
        ];

        Self {
            nodes,
            selected: Some(0),
        }
    }

    /// Serialized payload for the current selection, as the host would send
    /// it to the panel.
    fn payload(&self) -> Option<String> {
        self.selected
            .and_then(|index| self.nodes.get(index))
            .map(|node| serialize_metadata(&node.metadata))
    }

    fn apply(&mut self, event: HostEvent) {
        match event {
            HostEvent::SelectedNodeUpdated { metadata, repaint } => {
                let Some(index) = self.selected else { return };
                if let Some(meta) = deserialize_metadata(&metadata) {
                    self.nodes[index].metadata = meta;
                    if repaint {
                        debug!("Host repaint requested for node {}", self.nodes[index].id);
                    }
                }
            }
            HostEvent::SelectNode(node_id) => {
                self.selected = self.nodes.iter().position(|node| node.id == node_id);
                debug!("Host selection jumped to {}", node_id);
            }
            HostEvent::ShowWarnings => debug!("Host asked to highlight flagged nodes"),
            HostEvent::HideWarnings => debug!("Host asked to clear flagged nodes"),
        }
    }
}

struct PanelApp {
    host: MockHost,
    panel: SettingsPanel,
}

impl PanelApp {
    fn new() -> Self {
        Self {
            host: MockHost::sample(),
            panel: SettingsPanel::new(),
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("document")
            .default_width(constants::panel::DOCUMENT_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.heading("Document");
                ui.separator();
                for (index, node) in self.host.nodes.iter().enumerate() {
                    let selected = self.host.selected == Some(index);
                    if ui.selectable_label(selected, node.metadata.title()).clicked() {
                        self.host.selected = Some(index);
                    }
                }
                ui.separator();
                if ui.button("Deselect").clicked() {
                    self.host.selected = None;
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // The host hands the panel a freshly deserialized record every
            // pass; edits flow back as events, never as shared state.
            let mut metadata = self
                .host
                .payload()
                .as_deref()
                .and_then(deserialize_metadata);
            for event in self.panel.show(ui, &mut metadata) {
                self.host.apply(event);
            }
        });
    }
}

/// Application entry point.
fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting nodemeta settings panel");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::panel::DEFAULT_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Nodemeta",
        options,
        Box::new(|_cc| Ok(Box::new(PanelApp::new()))),
    )
}
