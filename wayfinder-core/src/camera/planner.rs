use geo::Coord;

use super::{CameraConfig, PosePreset};
use crate::geometry::spherical::{
    destination, initial_bearing, normalize_bearing, shortest_rotation,
};
use crate::model::Position;

/// Instantaneous camera placement handed to the map service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// `x = lon`, `y = lat`
    pub center: Coord<f64>,
    pub zoom: f64,
    pub pitch: f64,
    /// Degrees clockwise from north, in (-180, 180]
    pub bearing: f64,
}

impl CameraPose {
    pub fn at(center: Coord<f64>, bearing: f64, preset: PosePreset) -> Self {
        Self {
            center,
            zoom: preset.zoom,
            pitch: preset.pitch,
            bearing,
        }
    }
}

/// Time-parameterized camera flight along a densified polyline.
///
/// Holds one mutable smoothed bearing. Every call to
/// [`CameraPath::pose_at`] counts as one rendered frame and moves the
/// bearing `smoothing` of the way toward the look-ahead heading, so the
/// turn rate is tied to the frame rate rather than to wall-clock time.
#[derive(Debug, Clone)]
pub struct CameraPath {
    samples: Vec<Coord<f64>>,
    bearing: f64,
    preset: PosePreset,
    smoothing: f64,
    look_ahead: usize,
    forward_offset_m: f64,
}

impl CameraPath {
    /// Returns `None` for an empty polyline.
    pub fn new(positions: &[Position], config: &CameraConfig) -> Option<Self> {
        let samples: Vec<Coord<f64>> = positions.iter().map(|&p| p.into()).collect();
        let bearing = match samples.as_slice() {
            [] => return None,
            [_] => 0.0,
            [first, second, ..] => initial_bearing(*first, *second),
        };

        Some(Self {
            samples,
            bearing,
            preset: config.active_preset(),
            smoothing: config.smoothing,
            look_ahead: config.look_ahead,
            forward_offset_m: config.forward_offset_m,
        })
    }

    pub fn smoothed_bearing(&self) -> f64 {
        self.bearing
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// A single sample yields the same pose for every progress value
    pub fn is_static(&self) -> bool {
        self.samples.len() < 2
    }

    /// Pose at normalized progress `p` (clamped to [0, 1]); advances the
    /// bearing smoother by one frame.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pose_at(&mut self, progress: f64) -> CameraPose {
        let last = self.samples.len() - 1;
        let exact = progress.clamp(0.0, 1.0) * last as f64;
        let i = (exact.floor() as usize).min(last);
        let ratio = exact - i as f64;

        let (from, to) = (self.samples[i], self.samples[(i + 1).min(last)]);
        let center = Coord {
            x: from.x + (to.x - from.x) * ratio,
            y: from.y + (to.y - from.y) * ratio,
        };

        // Nothing to look at once the look-ahead point collapses onto the center
        let ahead = self.samples[(i + self.look_ahead).min(last)];
        if ahead != center {
            let target = initial_bearing(center, ahead);
            let rotation = shortest_rotation(self.bearing, target);
            self.bearing = normalize_bearing(self.bearing + rotation * self.smoothing);
        }

        let center = if self.forward_offset_m == 0.0 {
            center
        } else {
            destination(center, self.bearing, self.forward_offset_m)
        };

        CameraPose::at(center, self.bearing, self.preset)
    }
}
