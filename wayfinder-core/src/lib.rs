//! Routing and floor-segmentation engine for indoor wayfinding.
//!
//! The crate models a small multi-story building as a graph of named
//! waypoints, finds shortest routes through it, splits routes into
//! per-floor segments for a guided tour and plans the camera motion that
//! flies along each segment.

pub mod camera;
mod error;
pub mod export;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod tour;

pub use error::Error;
pub use loading::{Dataset, GraphBuilder, load_graph};
pub use model::{Position, Waypoint, WaypointGraph};
pub use routing::{Route, find_path};

/// Identifier of a waypoint. Zero is reserved and rejected on load.
pub type WaypointId = u32;
/// Story number; waypoints on the same floor share it.
pub type FloorId = i32;
