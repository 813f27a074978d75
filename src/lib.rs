//! A crate for finding shortest paths through sparse graphs of waypoints in 3D space, using A*.
//!
//! Waypoints are stored in a [`WaypointGraph`]. Every waypoint has a position and an
//! ordered list of directed connections to other waypoints. The cost of moving along a
//! connection is the Euclidean distance between its two ends, and the same distance
//! is used as the A* heuristic.
//!
//! The graph is only read during a search. All search state (costs, visited flags,
//! parents) belongs to the individual solve, so the same graph can be searched any
//! number of times, and, with the `parallel` feature, from several threads at once.
//!
//! ## Examples
//! Creating a graph and finding a path:
//! ```
//! use waypoint_astar::prelude::*;
//!
//! let mut graph = WaypointGraph::new();
//! let ids = graph.positions_to_nodes(&[
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(1.0, 0.0, 0.0),
//!     Point::new(1.0, 1.0, 0.0),
//!     Point::new(2.0, 1.0, 0.0),
//! ]);
//! // nodes created from positions are not connected yet
//! graph.join(ids[0], ids[1]);
//! graph.join(ids[1], ids[2]);
//! graph.join(ids[2], ids[3]);
//!
//! let solution = graph
//!     .solve_astar(ids[0], ids[3], false)
//!     .expect("start and target are part of the graph");
//!
//! assert!(solution.found);
//! // the start node is not part of the path
//! assert_eq!(&solution.path[..], &ids[1..]);
//! assert!((solution.path.cost() - 3.0).abs() < 1e-5);
//! ```
//!
//! A path can be turned back into positions:
//! ```
//! # use waypoint_astar::prelude::*;
//! # let mut graph = WaypointGraph::new();
//! # let ids = graph.positions_to_nodes(&[Point::new(0.0, 0.0, 0.0), Point::new(0.0, 0.0, 4.0)]);
//! # graph.join(ids[0], ids[1]);
//! let solution = graph.solve_astar(ids[0], ids[1], true).unwrap();
//! let positions = solution.path.positions(&graph);
//! assert_eq!(positions, vec![Point::new(0.0, 0.0, 4.0)]);
//! ```
//!
//! ## Cargo Features
//! #### parallel
//! Enabled by default.
//!
//! Allows [`WaypointGraph::solve_many`] to run independent searches on rayon's thread pool.
//!
//! #### log
//! Disabled by default.
//!
//! Emits timing and summary information about every solve through the `log` crate.

#![warn(missing_docs)]

mod point;
pub use point::Point;

pub mod graph;
pub use graph::{Node, WaypointGraph};

pub mod path;
pub use path::{Path, Solution};

mod search;

mod config;
pub use config::SolverConfig;

mod error;
pub use error::SolveError;

/// The type used for all costs and distances.
pub type Cost = f32;

slotmap::new_key_type! {
    /// A stable handle to a node inside a [`WaypointGraph`].
    ///
    /// Handles are never reused for a different node of the same graph.
    pub struct NodeID;
}

/// A map keyed by [`NodeID`].
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V>;
/// A set of [`NodeID`]s.
pub type NodeIDSet = hashbrown::HashSet<NodeID>;

/// The common imports.
pub mod prelude {
    pub use crate::{
        Cost, NodeID, Path, Point, Solution, SolveError, SolverConfig, WaypointGraph,
    };
}
