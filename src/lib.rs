//! Host integration for the wayfinding engine.
//!
//! [`WayfinderSession`] is the single controller object a host renderer
//! talks to: it owns the immutable waypoint graph, the tour state and the
//! camera animator, and drives the map and scene through the
//! [`MapCamera`] and [`SceneService`] traits.

pub mod collaborators;
pub mod session;

pub use collaborators::{MapCamera, SceneService};
pub use session::{SessionConfig, WayfinderSession};

pub use wayfinder_core::prelude;
