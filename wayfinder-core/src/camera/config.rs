use serde::Deserialize;

/// Fixed zoom and pitch applied to every emitted pose
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PosePreset {
    pub zoom: f64,
    /// Degrees from looking straight down
    pub pitch: f64,
}

impl PosePreset {
    /// Close-up used while flying through corridors
    pub const INDOOR: Self = Self {
        zoom: 20.0,
        pitch: 60.0,
    };
    /// Whole-building view
    pub const OVERVIEW: Self = Self {
        zoom: 17.81,
        pitch: 60.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    #[default]
    Indoor,
    Overview,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub indoor: PosePreset,
    pub overview: PosePreset,
    /// Preset used for animated flights
    pub mode: CameraMode,
    /// Fraction of the remaining bearing error removed per frame
    pub smoothing: f64,
    /// How many samples ahead the camera looks to pick its heading
    pub look_ahead: usize,
    /// Shift of the camera center along the smoothed bearing, in meters
    pub forward_offset_m: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            indoor: PosePreset::INDOOR,
            overview: PosePreset::OVERVIEW,
            mode: CameraMode::Indoor,
            smoothing: 0.06,
            look_ahead: 5,
            forward_offset_m: 0.0,
        }
    }
}

impl CameraConfig {
    pub fn preset(&self, mode: CameraMode) -> PosePreset {
        match mode {
            CameraMode::Indoor => self.indoor,
            CameraMode::Overview => self.overview,
        }
    }

    pub fn active_preset(&self) -> PosePreset {
        self.preset(self.mode)
    }
}
