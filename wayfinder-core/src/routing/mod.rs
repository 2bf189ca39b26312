//! Shortest-path search over the waypoint graph

mod astar;
mod route;
mod state;

pub use astar::find_path;
pub use route::Route;
