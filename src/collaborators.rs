use wayfinder_core::prelude::*;

/// Map and camera service of the host
pub trait MapCamera {
    /// Instantaneous jump, issued once per animation frame
    fn set_pose(&mut self, pose: &CameraPose);

    /// Smooth transition for non-cinematic moves
    fn fly_to(&mut self, pose: &CameraPose);
}

/// 3D scene service of the host. Requests are fire-and-forget; model loads
/// may complete after camera motion has already started.
pub trait SceneService {
    fn show_floor_model(&mut self, floor: FloorId);

    /// Places the marker of `waypoint` in the model's local meter frame
    fn place_marker(&mut self, waypoint: WaypointId, offset: ModelOffset);

    fn set_marker_visibility(&mut self, waypoint: WaypointId, visible: bool);

    fn set_path_polyline(&mut self, positions: &[Position]);
}
