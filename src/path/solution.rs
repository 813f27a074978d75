use super::Path;

/// The outcome of a single solve.
///
/// | `found` | `path`    | meaning                                   |
/// |---------|-----------|-------------------------------------------|
/// | `true`  | non-empty | the target was reached                    |
/// | `true`  | empty     | start and target are the same node        |
/// | `false` | empty     | the target cannot be reached from start   |
///
/// An empty Path together with `found` is not an error: the caller is already there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Whether the target was reached during the search.
    pub found: bool,
    /// The steps from start to target, excluding the start.
    pub path: Path,
}

impl Solution {
    /// Returns `true` if the target was found and there is nowhere left to go.
    pub fn is_at_target(&self) -> bool {
        self.found && self.path.is_empty()
    }

    /// Turns the Solution into `Some(path)` if the target was found.
    pub fn into_path(self) -> Option<Path> {
        if self.found {
            Some(self.path)
        } else {
            None
        }
    }
}
