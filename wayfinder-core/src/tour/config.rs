use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;

use crate::geometry::DEFAULT_SEGMENTS_PER_EDGE;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Interpolated samples per route edge for camera flights
    pub segments_per_edge: NonZeroUsize,
    /// Duration of the flight across one floor segment
    pub segment_flight_ms: u64,
    /// Fly along each segment instead of jumping to its start
    pub cinematic: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            segments_per_edge: DEFAULT_SEGMENTS_PER_EDGE,
            segment_flight_ms: 5000,
            cinematic: true,
        }
    }
}

impl TourConfig {
    pub fn segment_flight(&self) -> Duration {
        Duration::from_millis(self.segment_flight_ms)
    }
}
