use hashbrown::{HashMap, hash_map::Entry};
use itertools::Itertools;
use log::{debug, warn};
use petgraph::graph::UnGraph;

use crate::{Error, WaypointId, model::Waypoint, model::WaypointGraph};

/// Collects waypoints and their declared neighbors, then normalizes them
/// into a [`WaypointGraph`].
///
/// Adjacency may be declared from either side or from both; the finished
/// graph is always symmetric and holds at most one edge per pair.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    waypoints: Vec<Waypoint>,
    links: Vec<(WaypointId, WaypointId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a waypoint together with the ids it lists as neighbors.
    pub fn waypoint(
        &mut self,
        waypoint: Waypoint,
        neighbors: impl IntoIterator<Item = WaypointId>,
    ) -> &mut Self {
        let id = waypoint.id;
        self.links
            .extend(neighbors.into_iter().map(|neighbor| (id, neighbor)));
        self.waypoints.push(waypoint);
        self
    }

    /// Declares a traversable edge between two waypoints.
    pub fn link(&mut self, a: WaypointId, b: WaypointId) -> &mut Self {
        self.links.push((a, b));
        self
    }

    /// Validates the collected data and builds the graph
    ///
    /// # Errors
    ///
    /// Returns an error for a zero or duplicate id, or for a neighbor id
    /// that does not name any waypoint.
    pub fn build(self) -> Result<WaypointGraph, Error> {
        let GraphBuilder {
            mut waypoints,
            links,
        } = self;
        waypoints.sort_by_key(|waypoint| waypoint.id);

        let mut graph = UnGraph::with_capacity(waypoints.len(), links.len());
        let mut index = HashMap::with_capacity(waypoints.len());

        for waypoint in waypoints {
            let id = waypoint.id;
            if id == 0 {
                return Err(Error::InvalidData(format!(
                    "Waypoint '{}' has reserved id 0",
                    waypoint.name
                )));
            }
            match index.entry(id) {
                Entry::Occupied(_) => return Err(Error::DuplicateWaypoint(id)),
                Entry::Vacant(entry) => {
                    entry.insert(graph.add_node(waypoint));
                }
            }
        }

        // Pair -> (declared a->b, declared b->a), keyed with the smaller id first
        let mut declared: HashMap<(WaypointId, WaypointId), (bool, bool)> = HashMap::new();
        for (from, to) in links {
            if from == to {
                warn!("Waypoint {from} lists itself as a neighbor - ignoring");
                continue;
            }
            for id in [from, to] {
                if !index.contains_key(&id) {
                    return Err(Error::InvalidData(format!(
                        "Edge {from} -> {to} references unknown waypoint {id}"
                    )));
                }
            }
            let sides = declared.entry((from.min(to), from.max(to))).or_default();
            if from < to {
                sides.0 = true;
            } else {
                sides.1 = true;
            }
        }

        let mut symmetrized = 0;
        for ((a, b), (forward, backward)) in declared.into_iter().sorted_by_key(|(pair, _)| *pair) {
            if !(forward && backward) {
                symmetrized += 1;
            }
            let (na, nb) = (index[&a], index[&b]);
            let weight = graph[na].position.euclidean_distance(&graph[nb].position);
            graph.add_edge(na, nb, weight);
        }

        if symmetrized > 0 {
            debug!("Symmetrized {symmetrized} one-sided neighbor declarations");
        }

        Ok(WaypointGraph::from_parts(graph, index))
    }
}
