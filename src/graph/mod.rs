//! The waypoint graph and its nodes.

mod node;
pub use node::Node;

mod waypoint_graph;
pub use waypoint_graph::WaypointGraph;

mod convert;
