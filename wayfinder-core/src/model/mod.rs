//! Data model for the waypoint navigation graph
//!
//! Contains the waypoint type and the immutable graph built from a dataset.

pub mod graph;
pub mod waypoint;

pub use graph::WaypointGraph;
pub use waypoint::{Position, Waypoint};
