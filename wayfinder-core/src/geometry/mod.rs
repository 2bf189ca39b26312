//! Geometric helpers: polyline densification, spherical bearings and
//! projection into the building model's local frame.

mod densify;
mod projection;
pub mod spherical;

pub use densify::{DEFAULT_SEGMENTS_PER_EDGE, densify};
pub use projection::{MercatorCoordinate, ModelAnchor, ModelOffset};
