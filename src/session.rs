use std::time::Duration;

use geo::Coord;
use log::{debug, info, warn};
use wayfinder_core::prelude::*;

use crate::{MapCamera, SceneService};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    pub tour: TourConfig,
    pub camera: CameraConfig,
    pub anchor: ModelAnchor,
}

/// Owns everything a wayfinding view needs between frames
pub struct WayfinderSession<M, S> {
    graph: WaypointGraph,
    config: SessionConfig,
    map: M,
    scene: S,
    tour: TourSequencer,
    animator: CameraAnimator,
    cinematic: bool,
    route: Option<Route>,
}

impl<M: MapCamera, S: SceneService> WayfinderSession<M, S> {
    /// Creates the session and places one marker per waypoint.
    pub fn new(graph: WaypointGraph, config: SessionConfig, map: M, mut scene: S) -> Self {
        for waypoint in graph.waypoints() {
            scene.place_marker(waypoint.id, config.anchor.local_offset(&waypoint.position));
        }
        info!(
            "Session ready: {} waypoints on floors {:?}",
            graph.len(),
            graph.floors()
        );

        Self {
            cinematic: config.tour.cinematic,
            graph,
            config,
            map,
            scene,
            tour: TourSequencer::new(),
            animator: CameraAnimator::new(),
            route: None,
        }
    }

    pub fn graph(&self) -> &WaypointGraph {
        &self.graph
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn tour_state(&self) -> TourState {
        self.tour.state()
    }

    pub fn segments(&self) -> &[FloorSegment] {
        self.tour.segments()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn is_cinematic(&self) -> bool {
        self.cinematic
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Switching cinematic mode off stops any flight in progress.
    pub fn set_cinematic(&mut self, enabled: bool) {
        self.cinematic = enabled;
        if !enabled {
            self.animator.cancel();
        }
    }

    /// Computes a route and starts the guided tour on its first floor.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownWaypoint`] or [`Error::NoPathFound`]; the previous
    /// route and tour are kept in that case.
    pub fn request_route(&mut self, start: WaypointId, end: WaypointId) -> Result<&Route, Error> {
        let route = find_path(&self.graph, start, end)?;
        info!(
            "Route {start} -> {end}: {} waypoints, {:.1} m",
            route.len(),
            route.length_meters()
        );

        self.scene.set_path_polyline(&route.positions());
        let event = self.tour.start(&route);
        self.apply(event, &route);
        Ok(&*self.route.insert(route))
    }

    /// Moves the tour to the next floor segment.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTransition`] outside a running tour. Logged and
    /// otherwise ignored.
    pub fn request_advance(&mut self) -> Result<TourEvent, Error> {
        let event = self.tour.advance().inspect_err(|err| {
            warn!("Ignoring advance request: {err}");
        })?;
        if let Some(route) = self.route.take() {
            self.apply(event, &route);
            self.route = Some(route);
        }
        Ok(event)
    }

    /// Drives the active camera animation to host time `now`.
    ///
    /// Returns whether another frame should be scheduled.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.animator.tick(now) {
            Some(FrameOutput::Pose(pose)) => {
                self.map.set_pose(&pose);
                true
            }
            Some(FrameOutput::Finished(pose)) => {
                self.map.set_pose(&pose);
                false
            }
            None => false,
        }
    }

    fn apply(&mut self, event: TourEvent, route: &Route) {
        match event {
            TourEvent::Segment(step) => self.show_segment(step),
            TourEvent::Completed => self.finish(route),
        }
    }

    fn show_segment(&mut self, step: TourStep) {
        let Some(segment) = self.tour.segments().get(step.index) else {
            return;
        };
        info!(
            "Segment {}/{} on floor {}",
            step.index + 1,
            step.count,
            step.floor
        );
        if let Some(delta) = step.next_delta {
            info!("Next: {delta}");
        }

        self.scene.show_floor_model(segment.floor);
        for waypoint in self.graph.waypoints() {
            self.scene
                .set_marker_visibility(waypoint.id, waypoint.floor == segment.floor);
        }
        self.scene.set_path_polyline(&segment.positions);

        self.animator.cancel();
        let dense = densify(&segment.positions, self.config.tour.segments_per_edge);
        let Some(mut path) = CameraPath::new(&dense, &self.config.camera) else {
            return;
        };

        if self.cinematic {
            self.animator.start(path, self.config.tour.segment_flight());
        } else {
            self.map.fly_to(&path.pose_at(0.0));
        }
    }

    fn finish(&mut self, route: &Route) {
        self.animator.cancel();
        debug!("Tour finished, showing building overview");
        for waypoint in self.graph.waypoints() {
            self.scene.set_marker_visibility(waypoint.id, true);
        }
        if let Some(last) = route.last() {
            let center: Coord<f64> = last.position.into();
            self.map.fly_to(&CameraPose::at(center, 0.0, self.config.camera.overview));
        }
    }
}
