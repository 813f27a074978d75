use crate::{graph::WaypointGraph, Cost, NodeID, Point};

use std::ops::Deref;

/// A sequence of nodes leading away from a start node, together with its length.
///
/// The start node itself is not part of the Path. The first node is the first step
/// taken, the last node is the target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    nodes: Vec<NodeID>,
    cost: Cost,
}

impl Path {
    /// Creates a new Path from its steps and their summed cost.
    pub fn new(nodes: Vec<NodeID>, cost: Cost) -> Path {
        Path { nodes, cost }
    }

    /// The summed length of all steps, measured from the start node.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The steps of the Path.
    pub fn nodes(&self) -> &[NodeID] {
        &self.nodes
    }

    /// The positions of all steps, looked up in `graph`.
    ///
    /// ## Panics
    /// If the Path contains nodes that are not part of `graph`.
    #[track_caller]
    pub fn positions(&self, graph: &WaypointGraph) -> Vec<Point> {
        graph.nodes_to_positions(&self.nodes)
    }

    /// Consumes the Path and returns its steps.
    pub fn into_nodes(self) -> Vec<NodeID> {
        self.nodes
    }
}

impl Deref for Path {
    type Target = [NodeID];
    fn deref(&self) -> &[NodeID] {
        &self.nodes
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeID;
    type IntoIter = std::slice::Iter<'a, NodeID>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl From<Path> for Vec<NodeID> {
    fn from(path: Path) -> Vec<NodeID> {
        path.nodes
    }
}
