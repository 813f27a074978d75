use crate::NodeID;

use std::fmt;

/// The ways a solve can be rejected before it starts.
///
/// An unreachable target is *not* an error; it is reported through
/// [`Solution::found`](crate::Solution::found).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The start node is not part of the graph or of the searched node set.
    UnknownStart(NodeID),
    /// The target node is not part of the graph or of the searched node set.
    UnknownTarget(NodeID),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SolveError::UnknownStart(id) => {
                write!(f, "start node {:?} is not part of the searched nodes", id)
            }
            SolveError::UnknownTarget(id) => {
                write!(f, "target node {:?} is not part of the searched nodes", id)
            }
        }
    }
}

impl std::error::Error for SolveError {}
