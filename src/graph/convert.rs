use super::WaypointGraph;
use crate::{NodeID, Point};

impl WaypointGraph {
    /// The positions of the given nodes, in the same order.
    ///
    /// ## Panics
    /// If any of the nodes is not part of this graph.
    #[track_caller]
    pub fn nodes_to_positions(&self, ids: &[NodeID]) -> Vec<Point> {
        ids.iter().map(|&id| self.position(id)).collect()
    }

    /// Creates one new node per position and returns their ids, in the same order.
    ///
    /// The new nodes are not connected to anything. Use [`join`](Self::join),
    /// [`join_all`](Self::join_all) or [`connect`](Self::connect) afterwards.
    pub fn positions_to_nodes(&mut self, positions: &[Point]) -> Vec<NodeID> {
        positions.iter().map(|&pos| self.add_node(pos)).collect()
    }
}

#[test]
fn conversions() {
    let positions = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 2.0, 3.0),
        Point::new(1.0, 2.0, 3.0),
    ];
    let mut graph = WaypointGraph::new();
    let ids = graph.positions_to_nodes(&positions);

    assert_eq!(ids.len(), 3);
    assert_eq!(graph.len(), 3);
    // equal positions still create distinct nodes
    assert_ne!(ids[1], ids[2]);
    assert!(ids.iter().all(|&id| graph.neighbors(id).is_empty()));

    assert_eq!(graph.nodes_to_positions(&ids), positions);
    assert_eq!(graph.nodes_to_positions(&[ids[2], ids[0]]), [positions[2], positions[0]]);
    assert!(graph.nodes_to_positions(&[]).is_empty());
}
