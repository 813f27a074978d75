use crate::{NodeID, Point};

/// A single waypoint: a position and the directed connections leaving it.
#[derive(Clone, Debug)]
pub struct Node {
    /// Where the waypoint is.
    pub pos: Point,
    /// The waypoints reachable from this one, in the order they were connected.
    pub neighbors: Vec<NodeID>,
}

impl Node {
    /// Creates a new Node without any connections.
    pub fn new(pos: Point) -> Node {
        Node {
            pos,
            neighbors: vec![],
        }
    }
}
