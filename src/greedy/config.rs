//! Greedy assigner configuration.

/// How candidates with identical score and preference rank are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// The sample that appears first in the input wins.
    #[default]
    InputOrder,

    /// The sample with the lexicographically smallest id wins.
    SampleId,
}

/// Configuration for [`GreedyAssigner`](super::GreedyAssigner).
///
/// # Examples
///
/// ```
/// use u_assign::greedy::{AssignConfig, TieBreaker};
///
/// let config = AssignConfig::default()
///     .with_tie_breaker(TieBreaker::SampleId)
///     .with_parallel(true);
/// assert_eq!(config.tie_breaker, TieBreaker::SampleId);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignConfig {
    /// Final tie-break after score and preference rank.
    pub tie_breaker: TieBreaker,

    /// Whether to scan candidates in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. The scan of each pass is
    /// collected in full before selection, so the result is the same as
    /// a sequential run.
    pub parallel: bool,
}

impl AssignConfig {
    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Enables or disables the parallel candidate scan.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
