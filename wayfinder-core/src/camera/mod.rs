//! Camera motion planning for the cinematic fly-through
//!
//! [`CameraPath`] turns a densified polyline into camera poses with a
//! smoothed bearing; [`CameraAnimator`] advances at most one such path per
//! host frame.

mod animator;
mod config;
mod planner;

pub use animator::{AnimationHandle, CameraAnimator, FrameOutput};
pub use config::{CameraConfig, CameraMode, PosePreset};
pub use planner::{CameraPath, CameraPose};
