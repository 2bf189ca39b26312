use std::f64::consts::PI;

use serde::Deserialize;

use super::spherical::EARTH_RADIUS_M;
use crate::model::Position;

const EARTH_CIRCUMFERENCE_M: f64 = 2.0 * PI * EARTH_RADIUS_M;

/// Position in unit Web-Mercator space: `x` and `y` in [0, 1] growing
/// east and south, `z` in the same units scaled at the point's latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MercatorCoordinate {
    pub fn from_position(position: &Position) -> Self {
        let lat = position.lat.to_radians();
        Self {
            x: (180.0 + position.lon) / 360.0,
            y: (180.0 - (180.0 / PI) * (PI / 4.0 + lat / 2.0).tan().ln()) / 360.0,
            z: position.alt / (EARTH_CIRCUMFERENCE_M * lat.cos()),
        }
    }
}

/// Offset in meters from the model anchor: x east, y north, z up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Where the building model sits on the map
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelAnchor {
    /// `[lon, lat]` of the model origin
    pub origin: [f64; 2],
}

impl Default for ModelAnchor {
    fn default() -> Self {
        Self {
            origin: [121.58595, 24.9870],
        }
    }
}

impl ModelAnchor {
    /// Length of one meter in mercator units at the anchor latitude
    pub fn meter_in_mercator_units(&self) -> f64 {
        1.0 / (EARTH_CIRCUMFERENCE_M * self.origin[1].to_radians().cos())
    }

    /// Projects a waypoint position into the model's local meter frame.
    ///
    /// The anchor is taken at altitude zero, so `z` is the waypoint's
    /// altitude rescaled to the anchor latitude.
    pub fn local_offset(&self, position: &Position) -> ModelOffset {
        let origin = MercatorCoordinate::from_position(&Position::new(
            self.origin[0],
            self.origin[1],
            0.0,
        ));
        let point = MercatorCoordinate::from_position(position);
        let scale = self.meter_in_mercator_units();

        ModelOffset {
            x: (point.x - origin.x) / scale,
            y: -(point.y - origin.y) / scale,
            z: (point.z - origin.z) / scale,
        }
    }
}
