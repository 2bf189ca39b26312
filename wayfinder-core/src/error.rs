use thiserror::Error;

use crate::{FloorId, WaypointId, tour::TourState};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown waypoint: {0}")]
    UnknownWaypoint(WaypointId),
    #[error("No path found from waypoint {start} to waypoint {end}")]
    NoPathFound { start: WaypointId, end: WaypointId },
    #[error("Cannot advance the tour while {0}")]
    InvalidTransition(TourState),
    #[error("Adjacent floor segments share floor {0}")]
    SegmentationInvariantViolation(FloorId),
    #[error("Duplicate waypoint id: {0}")]
    DuplicateWaypoint(WaypointId),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
