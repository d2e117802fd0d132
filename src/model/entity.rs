//! Tools and samples.

use super::metric::MetricVector;

/// A processing resource with a fixed metric vector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tool {
    pub id: String,
    pub metrics: MetricVector,
}

impl Tool {
    pub fn new(id: impl Into<String>, metrics: MetricVector) -> Self {
        Self {
            id: id.into(),
            metrics,
        }
    }
}

/// A unit of work with needs and a ranked tool preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub id: String,
    pub needs: MetricVector,
    /// Tool identifiers, most preferred first.
    pub preferences: Vec<String>,
}

impl Sample {
    pub fn new<I, S>(id: impl Into<String>, needs: MetricVector, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            needs,
            preferences: preferences.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the 0-based preference rank of `tool_id`, if listed.
    pub fn rank_of(&self, tool_id: &str) -> Option<usize> {
        self.preferences.iter().position(|t| t == tool_id)
    }
}
