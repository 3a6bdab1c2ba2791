/// Knobs for [`crate::solve_with_config`].
///
/// The simplex algorithm itself imposes no iteration bound once Bland's
/// rule is used for both entering and leaving selection (it is guaranteed
/// to terminate). `iteration_limit` is pure defensive engineering: a
/// generously-sized cap that only trips if the implementation itself has a
/// bug, not a status the algorithm can legitimately reach. Exceeding it
/// panics rather than returning a new [`crate::Status`] variant, since the
/// public status set is fixed by the algorithm's contract.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub iteration_limit: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            iteration_limit: None,
        }
    }
}
