//! Headless stand-ins for the map and scene services that log every request

use tracing::{debug, info, trace};
use wayfinder::{MapCamera, SceneService};
use wayfinder_core::prelude::*;

#[derive(Debug, Default)]
pub struct LoggingMap {
    pub frames: usize,
}

impl MapCamera for LoggingMap {
    fn set_pose(&mut self, pose: &CameraPose) {
        self.frames += 1;
        trace!(
            lon = pose.center.x,
            lat = pose.center.y,
            bearing = pose.bearing,
            "set_pose"
        );
    }

    fn fly_to(&mut self, pose: &CameraPose) {
        info!(
            lon = pose.center.x,
            lat = pose.center.y,
            zoom = pose.zoom,
            pitch = pose.pitch,
            "fly_to"
        );
    }
}

#[derive(Debug, Default)]
pub struct LoggingScene;

impl SceneService for LoggingScene {
    fn show_floor_model(&mut self, floor: FloorId) {
        info!(floor, "show_floor_model");
    }

    fn place_marker(&mut self, waypoint: WaypointId, offset: ModelOffset) {
        debug!(waypoint, x = offset.x, y = offset.y, z = offset.z, "place_marker");
    }

    fn set_marker_visibility(&mut self, waypoint: WaypointId, visible: bool) {
        trace!(waypoint, visible, "set_marker_visibility");
    }

    fn set_path_polyline(&mut self, positions: &[Position]) {
        debug!(points = positions.len(), "set_path_polyline");
    }
}
