/// Options for a single solve.
///
/// ## Examples
/// ```
/// use waypoint_astar::SolverConfig;
///
/// let config = SolverConfig::default().with_stop_at_first_find(true);
/// assert!(config.stop_at_first_find);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop searching as soon as the target is taken from the frontier.
    ///
    /// This is faster, but the returned Path is only guaranteed to be *a* path, not
    /// necessarily the shortest one. When `false`, the search continues until the
    /// frontier is exhausted.
    ///
    /// Default: `false`
    pub stop_at_first_find: bool,
    /// The number of nodes a search is expected to touch. Only used to preallocate
    /// internal buffers.
    ///
    /// Default: `64`
    pub size_hint: usize,
}

impl SolverConfig {
    /// Sets [`stop_at_first_find`](Self::stop_at_first_find).
    pub fn with_stop_at_first_find(mut self, stop_at_first_find: bool) -> Self {
        self.stop_at_first_find = stop_at_first_find;
        self
    }

    /// Sets [`size_hint`](Self::size_hint).
    pub fn with_size_hint(mut self, size_hint: usize) -> Self {
        self.size_hint = size_hint;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            stop_at_first_find: false,
            size_hint: 64,
        }
    }
}
