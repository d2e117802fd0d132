//! Candidates, decisions and the assignment result.

use std::cmp::Ordering;

use super::config::TieBreaker;
use crate::model::{Instance, Score};

/// A sample's best currently-eligible placement during one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub score: Score,
    /// 0-based position of `tool` in the sample's preference list.
    pub rank: usize,
    pub sample: usize,
    pub tool: usize,
}

impl Candidate {
    /// Orders candidates so that the better one compares `Greater`:
    /// higher score, then lower rank, then the tie breaker.
    pub fn compare(&self, other: &Candidate, instance: &Instance, tb: TieBreaker) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| match tb {
                TieBreaker::InputOrder => other.sample.cmp(&self.sample),
                TieBreaker::SampleId => {
                    let samples = instance.samples();
                    samples[other.sample].id.cmp(&samples[self.sample].id)
                }
            })
    }

    /// True when `self` beats `other` on (score, rank) alone.
    pub fn strictly_better(&self, other: &Candidate) -> bool {
        (self.score, std::cmp::Reverse(self.rank)) > (other.score, std::cmp::Reverse(other.rank))
    }
}

/// One committed step of the greedy loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// 0-based commit index.
    pub step: usize,
    pub sample_id: String,
    pub tool_id: String,
    pub score: Score,
    /// Position of the tool in the sample's preference list.
    pub rank: usize,
}

/// A sample placed on a tool, with its fit score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub sample_id: String,
    pub score: Score,
}

/// All placements of one tool, best fit first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolAssignment {
    pub tool_id: String,
    pub placements: Vec<Placement>,
}

/// Result of a greedy assignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Uniform per-tool capacity used for the run.
    pub capacity: usize,

    /// One entry per tool, sorted by tool id ascending.
    pub tools: Vec<ToolAssignment>,

    /// Commits in the order they were made.
    pub decisions: Vec<Decision>,

    /// Samples left without a tool, in input order.
    pub unassigned: Vec<String>,
}

impl Assignment {
    /// Placements of the given tool, if the tool exists.
    pub fn tool(&self, tool_id: &str) -> Option<&ToolAssignment> {
        self.tools.iter().find(|t| t.tool_id == tool_id)
    }

    /// Returns the tool id and score of a sample's placement.
    pub fn placement_of(&self, sample_id: &str) -> Option<(&str, Score)> {
        self.tools.iter().find_map(|t| {
            t.placements
                .iter()
                .find(|p| p.sample_id == sample_id)
                .map(|p| (t.tool_id.as_str(), p.score))
        })
    }

    /// Number of placed samples.
    pub fn assigned_count(&self) -> usize {
        self.tools.iter().map(|t| t.placements.len()).sum()
    }

    /// Sum of all placement scores.
    pub fn total_score(&self) -> Score {
        self.tools
            .iter()
            .flat_map(|t| t.placements.iter())
            .map(|p| p.score)
            .sum()
    }

    /// Flattens the result into `(tool id, sample id, score)` triples,
    /// in output order.
    pub fn triples(&self) -> Vec<(String, String, Score)> {
        self.tools
            .iter()
            .flat_map(|t| {
                t.placements
                    .iter()
                    .map(move |p| (t.tool_id.clone(), p.sample_id.clone(), p.score))
            })
            .collect()
    }
}
