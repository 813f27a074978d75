use crate::{Cost, NodeID};

use std::cmp::Ordering;

/// The per-node bookkeeping of a single solve.
///
/// A node without an entry is in the `Default` state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchState {
    /// No longer relaxed from.
    pub visited: bool,
    /// Best known cost from the start (g).
    pub local_cost: Cost,
    /// `local_cost` plus the estimate to the target (f).
    pub global_cost: Cost,
    /// The node that produced `local_cost`. Always `None` for the start node.
    pub parent: Option<NodeID>,
    /// When the node first entered the frontier. Breaks ties between equal `global_cost`s.
    pub sequence: Option<usize>,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState {
            visited: false,
            local_cost: Cost::INFINITY,
            global_cost: Cost::INFINITY,
            parent: None,
            sequence: None,
        }
    }
}

/// A frontier entry: node, its `global_cost` when pushed, and its sequence number.
///
/// Ordered so that a `BinaryHeap` pops the lowest cost first, and among equal costs the
/// node that entered the frontier first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Element(pub NodeID, pub Cost, pub usize);

impl PartialEq for Element {
    fn eq(&self, other: &Element) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Element) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Element {
    fn cmp(&self, other: &Element) -> Ordering {
        // reversed, to turn the max-heap into a min-heap
        other
            .1
            .total_cmp(&self.1)
            .then_with(|| other.2.cmp(&self.2))
    }
}
