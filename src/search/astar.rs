use super::state::{Element, SearchState};
use crate::{graph::WaypointGraph, Cost, NodeID, NodeIDMap, Path, Point, Solution, SolverConfig};

use std::collections::BinaryHeap;

/// Runs A* from `start` to `target`, only stepping onto nodes for which `valid` returns `true`.
///
/// `start` and `target` must be part of `graph`.
pub(crate) fn astar_search(
    graph: &WaypointGraph,
    mut valid: impl FnMut(NodeID) -> bool,
    start: NodeID,
    target: NodeID,
    config: SolverConfig,
) -> Solution {
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    let target_pos = graph.position(target);
    let heuristic = |pos: Point| pos.distance(target_pos);

    let mut states: NodeIDMap<SearchState> = NodeIDMap::with_capacity(config.size_hint);
    let mut next = BinaryHeap::with_capacity(config.size_hint / 2);
    let mut sequence = 0;

    let start_cost = heuristic(graph.position(start));
    states.insert(
        start,
        SearchState {
            local_cost: 0.0,
            global_cost: start_cost,
            sequence: Some(sequence),
            ..SearchState::default()
        },
    );
    next.push(Element(start, start_cost, sequence));

    let mut found = false;
    #[cfg(feature = "log")]
    let mut expanded = 0usize;

    re_trace!("astar setup", timer);

    while let Some(Element(current_id, _, _)) = next.pop() {
        // every pushed node has a state; visited ones are stale entries
        let Some(current) = states.get_mut(&current_id).filter(|state| !state.visited) else {
            continue;
        };

        if current_id == target {
            found = true;
            if config.stop_at_first_find {
                break;
            }
        }

        current.visited = true;
        let current_cost = current.local_cost;
        let current_pos = graph.position(current_id);
        #[cfg(feature = "log")]
        {
            expanded += 1;
        }

        for &other_id in graph.neighbors(current_id) {
            if !valid(other_id) {
                continue;
            }
            let other_pos = graph.position(other_id);
            let other_cost = current_cost + current_pos.distance(other_pos);

            let other = states.entry(other_id).or_default();
            if other_cost < other.local_cost {
                other.parent = Some(current_id);
                other.local_cost = other_cost;
                other.global_cost = other_cost + heuristic(other_pos);

                if !other.visited {
                    let seq = *other.sequence.get_or_insert_with(|| {
                        sequence += 1;
                        sequence
                    });
                    next.push(Element(other_id, other.global_cost, seq));
                }
            }
        }
    }

    re_trace!("astar search", timer);

    // walk back from the target; the start node has no parent
    let mut steps = vec![];
    let mut current = target;
    while let Some(parent) = states.get(&current).and_then(|state| state.parent) {
        steps.push(current);
        current = parent;
    }
    steps.reverse();

    let cost = path_cost(graph, start, &steps);

    re_trace!("astar reconstruction", timer);
    re_trace!("astar total", outer_timer);

    #[cfg(feature = "log")]
    log::debug!(
        "solve {:?} -> {:?}: found: {}, steps: {}, cost: {}, expanded: {}",
        start,
        target,
        found,
        steps.len(),
        cost,
        expanded
    );

    Solution {
        found,
        path: Path::new(steps, cost),
    }
}

fn path_cost(graph: &WaypointGraph, start: NodeID, steps: &[NodeID]) -> Cost {
    let mut prev = graph.position(start);
    let mut cost = 0.0;
    for &id in steps {
        let pos = graph.position(id);
        cost += prev.distance(pos);
        prev = pos;
    }
    cost
}
