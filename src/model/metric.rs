//! Closed metric enumeration shared by tools and samples.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Integer score type used for metric values and fit scores.
pub type Score = i64;

/// One of the physical metrics a tool exposes and a sample needs.
///
/// The set is closed: every [`MetricVector`] carries a value for each
/// variant, so a missing metric cannot reach the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Processing speed (`S`).
    Speed,
    /// Measurement accuracy (`A`).
    Accuracy,
    /// Operating cost (`C`).
    Cost,
}

impl Metric {
    /// All metrics, in text-format order.
    pub const ALL: [Metric; 3] = [Metric::Speed, Metric::Accuracy, Metric::Cost];

    /// Returns the single-letter symbol used by the input format.
    pub fn symbol(self) -> &'static str {
        match self {
            Metric::Speed => "S",
            Metric::Accuracy => "A",
            Metric::Cost => "C",
        }
    }

    /// Looks up a metric by its symbol.
    ///
    /// ```
    /// use u_assign::model::Metric;
    ///
    /// assert_eq!(Metric::from_symbol("A"), Some(Metric::Accuracy));
    /// assert_eq!(Metric::from_symbol("X"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.symbol() == symbol)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One integer value per [`Metric`].
///
/// Used both as a tool's capability vector and as a sample's needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricVector {
    pub speed: Score,
    pub accuracy: Score,
    pub cost: Score,
}

impl MetricVector {
    pub fn new(speed: Score, accuracy: Score, cost: Score) -> Self {
        Self {
            speed,
            accuracy,
            cost,
        }
    }

    /// Dot product over the metric enumeration.
    ///
    /// Overflows exactly when [`checked_dot`](Self::checked_dot) returns
    /// `None`. [`Instance::new`](super::Instance::new) rejects every
    /// tool/sample pair for which that happens.
    pub fn dot(&self, other: &MetricVector) -> Score {
        Metric::ALL
            .iter()
            .fold(0, |acc, &m| acc + self[m] * other[m])
    }

    /// Dot product, or `None` if a product or partial sum overflows.
    ///
    /// ```
    /// use u_assign::model::MetricVector;
    ///
    /// let a = MetricVector::new(i64::MAX, 1, 1);
    /// assert_eq!(a.checked_dot(&MetricVector::new(1, 0, 0)), Some(i64::MAX));
    /// assert_eq!(a.checked_dot(&MetricVector::new(2, 1, 1)), None);
    /// ```
    pub fn checked_dot(&self, other: &MetricVector) -> Option<Score> {
        Metric::ALL.iter().try_fold(0 as Score, |acc, &m| {
            self[m].checked_mul(other[m])?.checked_add(acc)
        })
    }

    /// Iterates `(metric, value)` pairs in text-format order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Score)> + '_ {
        Metric::ALL.iter().map(move |&m| (m, self[m]))
    }
}

impl Index<Metric> for MetricVector {
    type Output = Score;

    fn index(&self, metric: Metric) -> &Score {
        match metric {
            Metric::Speed => &self.speed,
            Metric::Accuracy => &self.accuracy,
            Metric::Cost => &self.cost,
        }
    }
}

impl IndexMut<Metric> for MetricVector {
    fn index_mut(&mut self, metric: Metric) -> &mut Score {
        match metric {
            Metric::Speed => &mut self.speed,
            Metric::Accuracy => &mut self.accuracy,
            Metric::Cost => &mut self.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip() {
        for m in Metric::ALL {
            assert_eq!(Metric::from_symbol(m.symbol()), Some(m));
        }
        assert_eq!(Metric::from_symbol("s"), None);
        assert_eq!(Metric::from_symbol(""), None);
    }

    #[test]
    fn test_dot_product() {
        let tool = MetricVector::new(1, 2, 3);
        let needs = MetricVector::new(4, 5, 6);
        assert_eq!(tool.dot(&needs), 4 + 10 + 18);
    }

    #[test]
    fn test_dot_with_negative_values() {
        let tool = MetricVector::new(-1, 0, 2);
        let needs = MetricVector::new(3, 7, -1);
        assert_eq!(tool.dot(&needs), -5);
    }

    #[test]
    fn test_checked_dot_detects_overflow() {
        let big = MetricVector::new(Score::MAX, 1, 1);
        assert_eq!(big.checked_dot(&MetricVector::new(2, 1, 1)), None);
        assert_eq!(
            MetricVector::new(Score::MIN, 0, 0).checked_dot(&MetricVector::new(-1, 0, 0)),
            None
        );
        // Partial sum overflows even though the products fit.
        let wide = MetricVector::new(Score::MAX, Score::MAX, 0);
        assert_eq!(wide.checked_dot(&MetricVector::new(1, 1, 0)), None);
        assert_eq!(big.checked_dot(&MetricVector::new(1, 0, 0)), Some(Score::MAX));
    }

    #[test]
    fn test_checked_dot_matches_dot() {
        let tool = MetricVector::new(-3, 8, 2);
        let needs = MetricVector::new(4, -1, 9);
        assert_eq!(tool.checked_dot(&needs), Some(tool.dot(&needs)));
    }

    #[test]
    fn test_index_mut() {
        let mut v = MetricVector::default();
        v[Metric::Cost] = 9;
        v[Metric::Speed] += 2;
        assert_eq!(v, MetricVector::new(2, 0, 9));
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(
            pairs,
            vec![(Metric::Speed, 2), (Metric::Accuracy, 0), (Metric::Cost, 9)]
        );
    }
}
