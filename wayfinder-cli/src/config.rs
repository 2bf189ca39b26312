use std::path::{Path, PathBuf};

use serde::Deserialize;
use wayfinder::SessionConfig;
use wayfinder_core::prelude::*;

use crate::error::CliError;

/// Contents of the TOML configuration file; every field is optional
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Waypoint dataset (JSON)
    pub dataset: Option<PathBuf>,
    /// Simulated host frame rate
    pub frame_rate: u32,
    pub tour: TourConfig,
    pub camera: CameraConfig,
    pub anchor: ModelAnchor,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            frame_rate: 60,
            tour: TourConfig::default(),
            camera: CameraConfig::default(),
            anchor: ModelAnchor::default(),
        }
    }
}

impl CliConfig {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            tour: self.tour.clone(),
            camera: self.camera.clone(),
            anchor: self.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.frame_rate, 60);
        assert!(config.dataset.is_none());
        assert_eq!(config.tour, TourConfig::default());
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn nested_sections_override_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            dataset = "data/campus.json"
            frame_rate = 30

            [tour]
            segments_per_edge = 8
            cinematic = false

            [camera]
            mode = "overview"
            forward_offset_m = 4.5

            [camera.overview]
            zoom = 18.0
            pitch = 45.0

            [anchor]
            origin = [121.0, 25.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset, Some(PathBuf::from("data/campus.json")));
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.tour.segments_per_edge.get(), 8);
        assert_eq!(config.tour.segment_flight_ms, 5000);
        assert!(!config.tour.cinematic);
        assert_eq!(config.camera.mode, CameraMode::Overview);
        assert_eq!(config.camera.active_preset().zoom, 18.0);
        assert_eq!(config.camera.indoor, PosePreset::INDOOR);
        assert_eq!(config.anchor.origin, [121.0, 25.0]);
    }

    #[test]
    fn zero_segments_per_edge_is_rejected() {
        let result: Result<CliConfig, _> = toml::from_str("[tour]\nsegments_per_edge = 0\n");
        assert!(result.is_err());
    }
}
