//! This module is responsible for loading the static waypoint dataset
//! and building the immutable navigation graph.

mod builder;
mod dataset;

pub use builder::GraphBuilder;
pub use dataset::{Dataset, WaypointRecord, load_graph};
