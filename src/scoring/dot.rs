//! Dot-product fit score.

use super::types::FitScorer;
use crate::model::{Sample, Score, Tool};

/// Fit score of `sample` on `tool`: `Σ tool.metric[k] * sample.need[k]`.
///
/// ```
/// use u_assign::model::{MetricVector, Sample, Tool};
/// use u_assign::scoring::fit_score;
///
/// let tool = Tool::new("T1", MetricVector::new(1, 2, 3));
/// let sample = Sample::new("M2", MetricVector::new(2, 2, 2), ["T1"]);
/// assert_eq!(fit_score(&tool, &sample), 12);
/// ```
pub fn fit_score(tool: &Tool, sample: &Sample) -> Score {
    tool.metrics.dot(&sample.needs)
}

/// The default scorer, backed by [`fit_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DotProduct;

impl FitScorer for DotProduct {
    fn name(&self) -> &str {
        "DotProduct"
    }

    fn score(&self, tool: &Tool, sample: &Sample) -> Score {
        fit_score(tool, sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricVector;

    #[test]
    fn test_fit_matches_manual_sum() {
        let tool = Tool::new("T2", MetricVector::new(3, 2, 1));
        let sample = Sample::new("M1", MetricVector::new(1, 1, 1), ["T2"]);
        assert_eq!(fit_score(&tool, &sample), 3 + 2 + 1);
        assert_eq!(DotProduct.score(&tool, &sample), 6);
    }

    #[test]
    fn test_zero_needs_score_zero() {
        let tool = Tool::new("T", MetricVector::new(9, 9, 9));
        let sample = Sample::new("M", MetricVector::default(), ["T"]);
        assert_eq!(fit_score(&tool, &sample), 0);
    }

    #[test]
    fn test_negative_inputs_not_rejected() {
        let tool = Tool::new("T", MetricVector::new(-2, 1, 0));
        let sample = Sample::new("M", MetricVector::new(5, 1, 100), ["T"]);
        assert_eq!(fit_score(&tool, &sample), -9);
    }

    #[test]
    fn test_name() {
        assert_eq!(DotProduct.name(), "DotProduct");
    }
}
