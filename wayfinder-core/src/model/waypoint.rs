//! Navigation graph nodes

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::{FloorId, WaypointId};

/// Geographic position: longitude, latitude and altitude.
///
/// Serialized as a `[lon, lat, alt]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl Position {
    pub const fn new(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }

    /// Straight-line distance treating (lon, lat, alt) as a flat 3-vector.
    ///
    /// Mixes degrees and altitude units; this is the edge cost and the
    /// search heuristic, not a ground distance.
    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = self.lon - other.lon;
        let dy = self.lat - other.lat;
        let dz = self.alt - other.alt;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Component-wise linear interpolation, `t = 0` yields `self`.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        Position {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
            alt: self.alt + (other.alt - self.alt) * t,
        }
    }
}

impl From<[f64; 3]> for Position {
    fn from([lon, lat, alt]: [f64; 3]) -> Self {
        Self { lon, lat, alt }
    }
}

impl From<Position> for [f64; 3] {
    fn from(position: Position) -> Self {
        [position.lon, position.lat, position.alt]
    }
}

impl From<Position> for Coord<f64> {
    fn from(position: Position) -> Self {
        Coord {
            x: position.lon,
            y: position.lat,
        }
    }
}

impl From<Position> for Point<f64> {
    fn from(position: Position) -> Self {
        Point::new(position.lon, position.lat)
    }
}

/// Waypoint graph node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub id: WaypointId,
    /// Display label, may contain non-ASCII text
    pub name: String,
    pub position: Position,
    pub floor: FloorId,
    /// Stairwell or elevator node that only connects floors
    pub transit_only: bool,
}

impl Waypoint {
    pub fn new(
        id: WaypointId,
        name: impl Into<String>,
        position: Position,
        floor: FloorId,
        transit_only: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            floor,
            transit_only,
        }
    }

    pub fn point(&self) -> Point<f64> {
        self.position.into()
    }
}
