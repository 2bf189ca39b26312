use itertools::Itertools;

use crate::{
    WaypointId,
    geometry::spherical::haversine_distance,
    model::{Position, Waypoint},
};

/// Ordered waypoints from a shortest-path query, start first.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    pub fn ids(&self) -> Vec<WaypointId> {
        self.waypoints.iter().map(|waypoint| waypoint.id).collect()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.waypoints
            .iter()
            .map(|waypoint| waypoint.position)
            .collect()
    }

    /// Total search cost: sum of flat Euclidean edge lengths
    pub fn length(&self) -> f64 {
        self.waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.position.euclidean_distance(&b.position))
            .sum()
    }

    /// Ground length in meters over lon/lat, ignoring altitude
    pub fn length_meters(&self) -> f64 {
        self.waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| haversine_distance(a.position.into(), b.position.into()))
            .sum()
    }
}
