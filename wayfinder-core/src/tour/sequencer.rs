use std::fmt;

use log::{info, warn};

use super::{FloorSegment, segment};
use crate::{Error, FloorId, routing::Route};

/// Floors to climb or descend between two consecutive segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorDelta {
    Ascend(u32),
    Descend(u32),
}

impl FloorDelta {
    /// # Errors
    ///
    /// [`Error::SegmentationInvariantViolation`] if both floors are equal.
    pub fn between(current: FloorId, next: FloorId) -> Result<Self, Error> {
        let diff = i64::from(next) - i64::from(current);
        let floors = u32::try_from(diff.unsigned_abs()).unwrap_or(u32::MAX);
        match diff {
            0 => Err(Error::SegmentationInvariantViolation(current)),
            d if d > 0 => Ok(FloorDelta::Ascend(floors)),
            _ => Ok(FloorDelta::Descend(floors)),
        }
    }

    pub fn floors(&self) -> u32 {
        match self {
            FloorDelta::Ascend(n) | FloorDelta::Descend(n) => *n,
        }
    }
}

impl fmt::Display for FloorDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self {
            FloorDelta::Ascend(_) => "up",
            FloorDelta::Descend(_) => "down",
        };
        let n = self.floors();
        let unit = if n == 1 { "floor" } else { "floors" };
        write!(f, "Go {direction} {n} {unit}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourState {
    #[default]
    Idle,
    OnSegment(usize),
    Complete,
}

impl fmt::Display for TourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourState::Idle => write!(f, "no tour is active"),
            TourState::OnSegment(idx) => write!(f, "on segment {idx}"),
            TourState::Complete => write!(f, "the tour is complete"),
        }
    }
}

/// The segment the tour just moved onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub index: usize,
    pub count: usize,
    pub floor: FloorId,
    /// How to reach the following segment, `None` on the last one
    pub next_delta: Option<FloorDelta>,
}

impl TourStep {
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEvent {
    Segment(TourStep),
    Completed,
}

/// Steps through the floor segments of a route one confirmation at a time
#[derive(Debug, Default)]
pub struct TourSequencer {
    segments: Vec<FloorSegment>,
    state: TourState,
}

impl TourSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn segments(&self) -> &[FloorSegment] {
        &self.segments
    }

    pub fn current_segment(&self) -> Option<&FloorSegment> {
        match self.state {
            TourState::OnSegment(idx) => self.segments.get(idx),
            TourState::Idle | TourState::Complete => None,
        }
    }

    /// Segments `route` and moves onto its first segment, replacing any
    /// tour in progress. An empty route completes immediately.
    pub fn start(&mut self, route: &Route) -> TourEvent {
        self.segments = segment(route);
        info!(
            "Tour started: {} waypoints on {} floor segments",
            route.len(),
            self.segments.len()
        );
        self.enter(0)
    }

    /// Moves to the next segment, or completes after the last one.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTransition`] when not on a segment; the state is
    /// left unchanged.
    pub fn advance(&mut self) -> Result<TourEvent, Error> {
        match self.state {
            TourState::OnSegment(idx) => Ok(self.enter(idx + 1)),
            state @ (TourState::Idle | TourState::Complete) => {
                Err(Error::InvalidTransition(state))
            }
        }
    }

    /// Drops the tour and returns to idle
    pub fn reset(&mut self) {
        self.segments.clear();
        self.state = TourState::Idle;
    }

    fn enter(&mut self, idx: usize) -> TourEvent {
        let Some(current) = self.segments.get(idx) else {
            self.state = TourState::Complete;
            info!("Tour complete");
            return TourEvent::Completed;
        };
        self.state = TourState::OnSegment(idx);

        let next_delta = self.segments.get(idx + 1).and_then(|next| {
            FloorDelta::between(current.floor, next.floor)
                .inspect_err(|err| warn!("No floor change label for segment {idx}: {err}"))
                .ok()
        });

        TourEvent::Segment(TourStep {
            index: idx,
            count: self.segments.len(),
            floor: current.floor,
            next_delta,
        })
    }
}
