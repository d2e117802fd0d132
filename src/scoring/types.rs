//! Core trait for fit scoring.

use crate::model::{Sample, Score, Tool};

/// Computes the compatibility of a tool with a sample.
///
/// Scores follow the maximization convention: **higher is a better fit**.
/// Implementations must be pure; the assigner calls them repeatedly and
/// the auditor recomputes them to check recorded scores.
///
/// # Examples
///
/// ```
/// use u_assign::model::{Sample, Score, Tool};
/// use u_assign::scoring::FitScorer;
///
/// // Only speed matters.
/// struct SpeedOnly;
///
/// impl FitScorer for SpeedOnly {
///     fn name(&self) -> &str { "SpeedOnly" }
///     fn score(&self, tool: &Tool, sample: &Sample) -> Score {
///         tool.metrics.speed * sample.needs.speed
///     }
/// }
/// ```
pub trait FitScorer: Send + Sync {
    /// Returns the name of this scorer.
    fn name(&self) -> &str;

    /// Computes the fit score of `sample` on `tool`.
    fn score(&self, tool: &Tool, sample: &Sample) -> Score;
}
