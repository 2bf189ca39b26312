use itertools::Itertools;
use log::debug;

use crate::{Error, FloorId, WaypointId, model::Position, model::Waypoint, routing::Route};

/// Contiguous same-floor run of a route
#[derive(Debug, Clone, PartialEq)]
pub struct FloorSegment {
    pub floor: FloorId,
    pub waypoints: Vec<WaypointId>,
    pub positions: Vec<Position>,
}

impl FloorSegment {
    fn from_run(floor: FloorId, run: &[&Waypoint]) -> Self {
        Self {
            floor,
            waypoints: run.iter().map(|waypoint| waypoint.id).collect(),
            positions: run.iter().map(|waypoint| waypoint.position).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn start(&self) -> Option<&Position> {
        self.positions.first()
    }
}

/// Splits a route into per-floor segments and drops pure transit floors.
///
/// A new raw segment starts wherever the floor changes. A raw segment
/// survives if it is the first, the last, or holds at least one waypoint
/// that is not transit-only. Surviving segments keep route order.
pub fn segment(route: &Route) -> Vec<FloorSegment> {
    let runs: Vec<(FloorId, Vec<&Waypoint>)> = route
        .waypoints()
        .iter()
        .chunk_by(|waypoint| waypoint.floor)
        .into_iter()
        .map(|(floor, run)| (floor, run.collect()))
        .collect();

    let last = runs.len().saturating_sub(1);
    let segments: Vec<FloorSegment> = runs
        .iter()
        .enumerate()
        .filter(|(idx, (_, run))| {
            *idx == 0 || *idx == last || run.iter().any(|waypoint| !waypoint.transit_only)
        })
        .map(|(_, (floor, run))| FloorSegment::from_run(*floor, run))
        .collect();

    if segments.len() < runs.len() {
        debug!(
            "Dropped {} transit-only floor segments of {}",
            runs.len() - segments.len(),
            runs.len()
        );
    }
    segments
}

/// Checks that consecutive segments are on different floors.
///
/// # Errors
///
/// [`Error::SegmentationInvariantViolation`] naming the repeated floor.
pub fn validate_segments(segments: &[FloorSegment]) -> Result<(), Error> {
    match segments
        .iter()
        .tuple_windows()
        .find(|(a, b)| a.floor == b.floor)
    {
        Some((a, _)) => Err(Error::SegmentationInvariantViolation(a.floor)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(id: WaypointId, floor: FloorId, transit_only: bool) -> Waypoint {
        Waypoint::new(
            id,
            format!("W{id}"),
            Position::new(f64::from(id), 0.0, f64::from(floor) * 3.0),
            floor,
            transit_only,
        )
    }

    fn floors(segments: &[FloorSegment]) -> Vec<FloorId> {
        segments.iter().map(|s| s.floor).collect()
    }

    #[test]
    fn single_floor_route_is_one_segment() {
        let route = Route::new((1..=5).map(|id| wp(id, 3, id % 2 == 0)).collect());
        let segments = segment(&route);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].floor, 3);
        assert_eq!(segments[0].waypoints, vec![1, 2, 3, 4, 5]);
        assert_eq!(segments[0].positions.len(), 5);
    }

    #[test]
    fn two_floor_stairwell_keeps_both_ends() {
        let route = Route::new(vec![
            wp(1, 1, false),
            wp(2, 1, true),
            wp(3, 2, true),
            wp(4, 2, false),
        ]);
        let segments = segment(&route);
        assert_eq!(floors(&segments), vec![1, 2]);
        assert_eq!(segments[0].waypoints, vec![1, 2]);
        assert_eq!(segments[1].waypoints, vec![3, 4]);
        assert!(validate_segments(&segments).is_ok());
    }

    #[test]
    fn transit_only_middle_floor_is_pruned() {
        let route = Route::new(vec![
            wp(1, 1, false),
            wp(2, 1, true),
            wp(3, 2, true),
            wp(4, 2, true),
            wp(5, 3, true),
            wp(6, 3, false),
        ]);
        let segments = segment(&route);
        assert_eq!(floors(&segments), vec![1, 3]);
        assert_eq!(segments[1].waypoints, vec![5, 6]);
    }

    #[test]
    fn middle_floor_with_a_destination_survives() {
        let route = Route::new(vec![
            wp(1, 1, false),
            wp(2, 2, true),
            wp(3, 2, false),
            wp(4, 3, false),
        ]);
        assert_eq!(floors(&segment(&route)), vec![1, 2, 3]);
    }

    #[test]
    fn transit_only_endpoints_are_kept() {
        let route = Route::new(vec![
            wp(1, 1, true),
            wp(2, 2, true),
            wp(3, 3, true),
            wp(4, 4, true),
        ]);
        assert_eq!(floors(&segment(&route)), vec![1, 4]);
    }

    #[test]
    fn single_transit_waypoint_route() {
        let route = Route::new(vec![wp(1, 5, true)]);
        assert_eq!(floors(&segment(&route)), vec![5]);
    }

    #[test]
    fn empty_route_has_no_segments() {
        assert!(segment(&Route::new(Vec::new())).is_empty());
    }

    #[test]
    fn no_segment_is_empty_and_every_kept_waypoint_is_in_order() {
        let route = Route::new(vec![
            wp(1, 2, false),
            wp(2, 1, true),
            wp(3, 1, true),
            wp(4, 0, false),
            wp(5, 1, true),
            wp(6, 2, false),
        ]);
        let segments = segment(&route);
        assert!(segments.iter().all(|s| !s.is_empty()));
        let kept: Vec<_> = segments.iter().flat_map(|s| s.waypoints.clone()).collect();
        assert_eq!(kept, vec![1, 4, 6]);
        assert!(validate_segments(&segments).is_ok());
    }

    #[test]
    fn pruning_can_join_two_runs_of_the_same_floor() {
        // Up a stairwell and straight back down: floor 2 is dropped, leaving
        // two adjacent floor-1 segments
        let route = Route::new(vec![
            wp(1, 1, false),
            wp(2, 2, true),
            wp(3, 1, false),
        ]);
        let segments = segment(&route);
        assert_eq!(floors(&segments), vec![1, 1]);
        assert!(matches!(
            validate_segments(&segments),
            Err(Error::SegmentationInvariantViolation(1))
        ));
    }
}
