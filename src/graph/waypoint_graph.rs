use slotmap::SlotMap;

use super::Node;
use crate::{NodeID, NodeIDMap, Point};

/// A collection of waypoints and the directed connections between them.
///
/// Nodes and connections can only be added, never removed. Nodes are referred to by
/// [`NodeID`] handles that stay valid for the lifetime of the graph.
///
/// ## Examples
/// ```
/// use waypoint_astar::prelude::*;
///
/// let mut graph = WaypointGraph::new();
/// let a = graph.add_node(Point::new(0.0, 0.0, 0.0));
/// let b = graph.add_node(Point::new(0.0, 3.0, 4.0));
///
/// graph.connect(a, b);
/// assert_eq!(graph.neighbors(a), &[b]);
/// assert!(graph.neighbors(b).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct WaypointGraph {
    nodes: SlotMap<NodeID, Node>,
}

impl WaypointGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// The number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a new, unconnected node at `pos`.
    pub fn add_node(&mut self, pos: Point) -> NodeID {
        self.nodes.insert(Node::new(pos))
    }

    /// Returns `true` if `id` refers to a node of this graph.
    pub fn contains(&self, id: NodeID) -> bool {
        self.nodes.contains_key(id)
    }

    /// The node behind `id`, if it belongs to this graph.
    pub fn get(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The position of a node.
    ///
    /// ## Panics
    /// If `id` is not part of this graph.
    #[track_caller]
    pub fn position(&self, id: NodeID) -> Point {
        self[id].pos
    }

    /// Moves a node to `pos`. Its connections are kept.
    ///
    /// ## Panics
    /// If `id` is not part of this graph.
    #[track_caller]
    pub fn set_position(&mut self, id: NodeID, pos: Point) {
        self[id].pos = pos;
    }

    /// Adds a directed connection from `src` to `target`.
    ///
    /// Connecting the same pair twice stores the connection twice. This does not change
    /// the result of a search.
    ///
    /// ## Panics
    /// If either node is not part of this graph.
    #[track_caller]
    pub fn connect(&mut self, src: NodeID, target: NodeID) {
        assert!(
            self.contains(target),
            "connect: target {:?} is not part of this graph",
            target
        );
        self[src].neighbors.push(target);
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// ## Panics
    /// If either node is not part of this graph.
    #[track_caller]
    pub fn join(&mut self, a: NodeID, b: NodeID) {
        self.connect(a, b);
        self.connect(b, a);
    }

    /// Connects every node in `ids` to every other node in `ids`.
    ///
    /// This creates `n * (n - 1)` connections and is meant for small clusters of
    /// waypoints that can all see each other.
    ///
    /// ## Panics
    /// If any of the nodes is not part of this graph.
    #[track_caller]
    pub fn join_all(&mut self, ids: &[NodeID]) {
        for (i, &src) in ids.iter().enumerate() {
            for (j, &target) in ids.iter().enumerate() {
                if i != j {
                    self.connect(src, target);
                }
            }
        }
    }

    /// The nodes directly reachable from `id`, in the order they were connected.
    ///
    /// ## Panics
    /// If `id` is not part of this graph.
    #[track_caller]
    pub fn neighbors(&self, id: NodeID) -> &[NodeID] {
        &self[id].neighbors
    }

    /// Iterates over the ids of all nodes in the graph.
    pub fn keys(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.nodes.keys()
    }

    /// Iterates over all nodes in the graph.
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
        self.nodes.iter()
    }

    /// Moves all nodes of `other` into this graph, keeping their connections.
    ///
    /// Returns a map from the ids in `other` to their new ids in `self`.
    pub fn absorb(&mut self, other: WaypointGraph) -> NodeIDMap<NodeID> {
        let mut old_to_new = NodeIDMap::with_capacity(other.len());

        for (old, node) in other.nodes.iter() {
            let new = self.add_node(node.pos);
            old_to_new.insert(old, new);
        }

        for (old, node) in other.nodes {
            let new_node = &mut self[old_to_new[&old]];

            new_node.neighbors = node
                .neighbors
                .into_iter()
                .map(|other_id| old_to_new[&other_id])
                .collect();
        }

        old_to_new
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for WaypointGraph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for WaypointGraph {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_nodes() -> (WaypointGraph, [NodeID; 3]) {
        let mut graph = WaypointGraph::new();
        let a = graph.add_node(Point::new(0.0, 0.0, 0.0));
        let b = graph.add_node(Point::new(1.0, 0.0, 0.0));
        let c = graph.add_node(Point::new(0.0, 1.0, 0.0));
        (graph, [a, b, c])
    }

    #[test]
    fn lookup() {
        let empty = WaypointGraph::new();
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);

        let (mut graph, [a, b, c]) = three_nodes();
        assert!(!graph.is_empty());
        graph.connect(a, b);

        let node = graph.get(a).unwrap();
        assert_eq!(node.pos, Point::new(0.0, 0.0, 0.0));
        assert_eq!(node.neighbors, vec![b]);

        let mut seen: Vec<(NodeID, Point)> =
            graph.iter().map(|(id, node)| (id, node.pos)).collect();
        seen.sort_by_key(|&(id, _)| [a, b, c].iter().position(|&x| x == id));
        assert_eq!(
            seen,
            vec![
                (a, Point::new(0.0, 0.0, 0.0)),
                (b, Point::new(1.0, 0.0, 0.0)),
                (c, Point::new(0.0, 1.0, 0.0)),
            ]
        );

        let mut other = WaypointGraph::new();
        other.positions_to_nodes(&[Point::default(); 4]);
        let foreign = other.add_node(Point::default());
        assert!(graph.get(foreign).is_none());
    }

    #[test]
    fn connect_is_directed() {
        let (mut graph, [a, b, c]) = three_nodes();
        graph.connect(a, b);
        graph.connect(a, c);

        assert_eq!(graph.neighbors(a), &[b, c]);
        assert!(graph.neighbors(b).is_empty());
        assert!(graph.neighbors(c).is_empty());
    }

    #[test]
    fn join_adds_both_directions() {
        let (mut graph, [a, b, c]) = three_nodes();
        graph.join(a, b);

        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(b), &[a]);
        assert!(graph.neighbors(c).is_empty());
    }

    #[test]
    fn join_all_is_complete() {
        let (mut graph, ids) = three_nodes();
        graph.join_all(&ids);

        for (i, &id) in ids.iter().enumerate() {
            let expected: Vec<NodeID> = ids
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &other)| other)
                .collect();
            assert_eq!(graph.neighbors(id), &expected[..]);
        }
    }

    #[test]
    fn set_position() {
        let (mut graph, [a, b, _]) = three_nodes();
        graph.join(a, b);
        graph.set_position(a, Point::new(5.0, 5.0, 5.0));

        assert_eq!(graph.position(a), Point::new(5.0, 5.0, 5.0));
        assert_eq!(graph.neighbors(a), &[b]);
    }

    #[test]
    #[should_panic]
    fn connect_foreign_node() {
        let (mut graph, [a, ..]) = three_nodes();
        let (mut other, _) = three_nodes();
        let foreign = other.add_node(Point::default());
        graph.connect(a, foreign);
    }

    #[test]
    fn absorb() {
        let (mut graph, [a, b, c]) = three_nodes();
        graph.join(a, b);
        graph.connect(c, a);

        let mut cluster = WaypointGraph::new();
        let x = cluster.add_node(Point::new(10.0, 10.0, 10.0));
        let y = cluster.add_node(Point::new(11.0, 11.0, 11.0));
        cluster.connect(x, y);

        let map = graph.absorb(cluster);

        assert_eq!(graph.len(), 5);
        assert_eq!(graph.position(map[&x]), Point::new(10.0, 10.0, 10.0));
        assert_eq!(graph.position(map[&y]), Point::new(11.0, 11.0, 11.0));
        assert_eq!(graph.neighbors(map[&x]), &[map[&y]]);
        assert!(graph.neighbors(map[&y]).is_empty());
        // existing nodes are untouched
        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(c), &[a]);
    }
}
