// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod astar;
mod state;

use astar::astar_search;

use crate::{graph::WaypointGraph, NodeID, NodeIDSet, Solution, SolveError, SolverConfig};

impl WaypointGraph {
    /// Finds a path from `start` to `target` using A*, considering only the nodes in `nodes`.
    ///
    /// Connections leading to nodes outside of `nodes` are ignored. Moving along a
    /// connection costs the Euclidean distance between its ends, and the straight-line
    /// distance to `target` is used as the heuristic.
    ///
    /// The graph is not modified, so any number of solves may run on the same graph.
    ///
    /// ## Returns
    /// A [`Solution`] whose `path` excludes `start` and ends in `target`. If `target` is
    /// unreachable, `found` is `false` and the path is empty. If `start == target`,
    /// `found` is `true` and the path is empty.
    ///
    /// With [`SolverConfig::stop_at_first_find`] the search ends as soon as `target`
    /// is taken from the frontier. The path is then valid, but not guaranteed to be the
    /// shortest one.
    ///
    /// ## Errors
    /// [`SolveError::UnknownStart`] or [`SolveError::UnknownTarget`] if either node is not
    /// part of this graph or of `nodes`.
    ///
    /// ## Examples
    /// ```
    /// use waypoint_astar::prelude::*;
    ///
    /// let mut graph = WaypointGraph::new();
    /// let ids = graph.positions_to_nodes(&[
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(2.0, 0.0, 0.0),
    /// ]);
    /// graph.join_all(&ids);
    ///
    /// let config = SolverConfig::default();
    /// let solution = graph.solve(&ids, ids[0], ids[2], config).unwrap();
    /// assert_eq!(&solution.path[..], &[ids[2]]);
    ///
    /// // without the middle node
    /// let solution = graph.solve(&[ids[0], ids[2]], ids[0], ids[2], config).unwrap();
    /// assert_eq!(&solution.path[..], &[ids[2]]);
    /// ```
    pub fn solve(
        &self,
        nodes: &[NodeID],
        start: NodeID,
        target: NodeID,
        config: SolverConfig,
    ) -> Result<Solution, SolveError> {
        let members: NodeIDSet = nodes.iter().copied().collect();
        self.solve_within(&members, start, target, config)
    }

    /// Finds a path from `start` to `target` using A* over the entire graph.
    ///
    /// See [`solve`](Self::solve) for the details.
    pub fn solve_astar(
        &self,
        start: NodeID,
        target: NodeID,
        stop_at_first_find: bool,
    ) -> Result<Solution, SolveError> {
        check_endpoints(|id| self.contains(id), start, target)?;
        let config = SolverConfig::default().with_stop_at_first_find(stop_at_first_find);
        Ok(astar_search(self, |_| true, start, target, config))
    }

    /// Runs one independent [`solve`](Self::solve) per `(start, target)` pair in `queries`.
    ///
    /// The results are in the same order as `queries`. With the `parallel` feature the
    /// searches are spread over rayon's thread pool.
    pub fn solve_many(
        &self,
        nodes: &[NodeID],
        queries: &[(NodeID, NodeID)],
        config: SolverConfig,
    ) -> Vec<Result<Solution, SolveError>> {
        let members: NodeIDSet = nodes.iter().copied().collect();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|&(start, target)| self.solve_within(&members, start, target, config))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, target)| self.solve_within(&members, start, target, config))
                .collect()
        }
    }

    fn solve_within(
        &self,
        members: &NodeIDSet,
        start: NodeID,
        target: NodeID,
        config: SolverConfig,
    ) -> Result<Solution, SolveError> {
        let is_member = |id: NodeID| self.contains(id) && members.contains(&id);
        check_endpoints(is_member, start, target)?;
        Ok(astar_search(self, is_member, start, target, config))
    }
}

fn check_endpoints(
    is_member: impl Fn(NodeID) -> bool,
    start: NodeID,
    target: NodeID,
) -> Result<(), SolveError> {
    if !is_member(start) {
        return Err(SolveError::UnknownStart(start));
    }
    if !is_member(target) {
        return Err(SolveError::UnknownTarget(target));
    }
    Ok(())
}
