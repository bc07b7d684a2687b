//! Application-wide constants and default values

/// Panel sizing constants
pub mod panel {
    /// Default window size for the standalone shell
    pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [720.0, 520.0];

    /// Width of the mock document panel in the standalone shell
    pub const DOCUMENT_PANEL_WIDTH: f32 = 200.0;
}
