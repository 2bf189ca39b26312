use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use log::debug;
use petgraph::graph::NodeIndex;

use super::{Route, state::State};
use crate::{Error, WaypointId, model::WaypointGraph};

/// A* search between two waypoints
///
/// Edge cost and heuristic are both the flat Euclidean distance over
/// (lon, lat, alt), so the heuristic is consistent and the first time the
/// goal is popped its cost is optimal. Among frontier entries with equal
/// `f`, the one inserted first is expanded first.
///
/// `start == end` yields a single-waypoint route.
///
/// # Errors
///
/// [`Error::UnknownWaypoint`] if either id is absent from the graph,
/// [`Error::NoPathFound`] if the goal is unreachable from the start.
pub fn find_path(
    graph: &WaypointGraph,
    start: WaypointId,
    end: WaypointId,
) -> Result<Route, Error> {
    let start_node = graph
        .node_index(start)
        .ok_or(Error::UnknownWaypoint(start))?;
    let goal_node = graph.node_index(end).ok_or(Error::UnknownWaypoint(end))?;

    let goal = graph[goal_node].position;
    let heuristic = |node: NodeIndex| graph[node].position.euclidean_distance(&goal);

    let mut costs: HashMap<NodeIndex, f64> = HashMap::with_capacity(graph.len());
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(graph.len());
    let mut closed: HashSet<NodeIndex> = HashSet::with_capacity(graph.len());
    let mut heap = BinaryHeap::new();
    let mut seq = 0;

    costs.insert(start_node, 0.0);
    heap.push(State {
        estimate: heuristic(start_node),
        seq,
        node: start_node,
    });

    while let Some(State { node, .. }) = heap.pop() {
        // Stale entry for an already expanded node
        if !closed.insert(node) {
            continue;
        }

        if node == goal_node {
            debug!(
                "Route {start} -> {end} found after expanding {} waypoints",
                closed.len()
            );
            return Ok(reconstruct(graph, &predecessors, start_node, goal_node));
        }

        let cost = costs[&node];
        for edge in graph.edges(node) {
            let next = WaypointGraph::opposite(&edge, node);
            if closed.contains(&next) {
                continue;
            }

            let tentative = cost + *edge.weight();
            if costs.get(&next).is_none_or(|&known| tentative < known) {
                costs.insert(next, tentative);
                predecessors.insert(next, node);
                seq += 1;
                heap.push(State {
                    estimate: tentative + heuristic(next),
                    seq,
                    node: next,
                });
            }
        }
    }

    debug!(
        "No route {start} -> {end}: frontier exhausted after {} waypoints",
        closed.len()
    );
    Err(Error::NoPathFound { start, end })
}

fn reconstruct(
    graph: &WaypointGraph,
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Route {
    let mut nodes = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse(); // Now path is from start to goal

    Route::new(nodes.into_iter().map(|node| graph[node].clone()).collect())
}
