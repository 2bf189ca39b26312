//! Immutable waypoint graph

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{EdgeReference, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::Waypoint;
use crate::{Error, FloorId, WaypointId};

/// Undirected navigation graph over waypoints.
///
/// Edge weights hold the flat Euclidean distance between the two
/// endpoints. Built once by [`crate::GraphBuilder`] and never mutated.
#[derive(Debug, Clone, Default)]
pub struct WaypointGraph {
    pub(crate) graph: UnGraph<Waypoint, f64>,
    index: HashMap<WaypointId, NodeIndex>,
}

impl WaypointGraph {
    pub(crate) fn from_parts(
        graph: UnGraph<Waypoint, f64>,
        index: HashMap<WaypointId, NodeIndex>,
    ) -> Self {
        Self { graph, index }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: WaypointId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.index.get(&id).map(|&node| &self.graph[node])
    }

    /// Like [`WaypointGraph::get`], failing with [`Error::UnknownWaypoint`].
    pub fn waypoint(&self, id: WaypointId) -> Result<&Waypoint, Error> {
        self.get(id).ok_or(Error::UnknownWaypoint(id))
    }

    /// Waypoints directly reachable from `id`, ordered by id.
    pub fn neighbors(&self, id: WaypointId) -> Result<Vec<&Waypoint>, Error> {
        let node = self.node_index(id).ok_or(Error::UnknownWaypoint(id))?;
        Ok(self
            .graph
            .neighbors(node)
            .map(|other| &self.graph[other])
            .sorted_by_key(|waypoint| waypoint.id)
            .collect())
    }

    /// All waypoints in ascending id order.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        self.graph.node_weights()
    }

    pub fn waypoints_on_floor(&self, floor: FloorId) -> impl Iterator<Item = &Waypoint> {
        self.waypoints().filter(move |waypoint| waypoint.floor == floor)
    }

    /// Distinct floors present in the graph, lowest first.
    pub fn floors(&self) -> Vec<FloorId> {
        self.waypoints()
            .map(|waypoint| waypoint.floor)
            .sorted_unstable()
            .dedup()
            .collect()
    }

    pub(crate) fn node_index(&self, id: WaypointId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub(crate) fn edges(&self, node: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, f64>> {
        self.graph.edges(node)
    }

    /// The endpoint of `edge` that is not `node`.
    pub(crate) fn opposite(edge: &EdgeReference<'_, f64>, node: NodeIndex) -> NodeIndex {
        if edge.source() == node {
            edge.target()
        } else {
            edge.source()
        }
    }
}

impl std::ops::Index<NodeIndex> for WaypointGraph {
    type Output = Waypoint;

    fn index(&self, node: NodeIndex) -> &Waypoint {
        &self.graph[node]
    }
}
