use crate::geometry::PageParams;
use crate::renderer::CameraMode;

pub struct UiState {
    /// The current shape record. Slider edits change a field here and the
    /// whole record is handed to the builder again.
    pub params: PageParams,

    pub camera_mode: CameraMode,
    pub show_grid: bool,

    pub vsync_enabled: bool,
    pub show_stats: bool,
    pub fps_cap_enabled: bool,
    pub fps_cap: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            params: PageParams::default(),

            camera_mode: CameraMode::Orbital,
            show_grid: true,

            vsync_enabled: true,
            show_stats: true,
            fps_cap_enabled: false,
            fps_cap: 144,
        }
    }
}

/// Per-frame numbers the stats panel displays.
#[derive(Clone, Copy, Default)]
pub struct RenderStats {
    pub fps: f32,
    pub vertex_count: usize,
    pub triangle_count: usize,
}
