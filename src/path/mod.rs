//! The results of a search.

mod generic_path;
pub use generic_path::Path;

mod solution;
pub use solution::Solution;
