//! Floor-by-floor guided tour over a route

mod config;
mod segment;
mod sequencer;

pub use config::TourConfig;
pub use segment::{FloorSegment, segment, validate_segments};
pub use sequencer::{FloorDelta, TourEvent, TourSequencer, TourState, TourStep};
