// Re-export key components
pub use crate::camera::{
    AnimationHandle, CameraAnimator, CameraConfig, CameraMode, CameraPath, CameraPose,
    FrameOutput, PosePreset,
};
pub use crate::geometry::{DEFAULT_SEGMENTS_PER_EDGE, ModelAnchor, ModelOffset, densify};
pub use crate::loading::{Dataset, GraphBuilder, WaypointRecord, load_graph};
pub use crate::model::{Position, Waypoint, WaypointGraph};
pub use crate::routing::{Route, find_path};
pub use crate::tour::{
    FloorDelta, FloorSegment, TourConfig, TourEvent, TourSequencer, TourState, TourStep,
    segment, validate_segments,
};

pub use crate::Error;
pub use crate::FloorId;
pub use crate::WaypointId;
