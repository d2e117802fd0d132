//! Greedy global assignment loop.
//!
//! # Algorithm
//!
//! 1. Derive the uniform capacity `floor(N / T)`
//! 2. Repeat:
//!    a. For every unassigned sample, take the first tool of its
//!       preference list that still has room (the candidate)
//!    b. Stop if no sample produced a candidate
//!    c. Select the best candidate: highest score, then lowest
//!       preference rank, then the configured tie breaker
//!    d. Commit it
//! 3. Sort each tool's placements by descending score
//!
//! Recomputing every candidate after each commit means a lower-fit
//! sample never takes a slot while a higher-fit sample that wants the
//! same tool at least as much is still waiting.

use tracing::{debug, info, warn};

use super::capacity::uniform_capacity;
use super::config::{AssignConfig, TieBreaker};
use super::types::{Assignment, Candidate, Decision, Placement, ToolAssignment};
use crate::error::InstanceError;
use crate::model::Instance;
use crate::scoring::{DotProduct, FitScorer};

/// Greedy, preference-aware, globally ordered assigner.
pub struct GreedyAssigner;

impl GreedyAssigner {
    /// Assigns samples using the dot-product fit score.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::greedy::{AssignConfig, GreedyAssigner};
    /// use u_assign::model::{Instance, MetricVector, Sample, Tool};
    ///
    /// let instance = Instance::new(
    ///     vec![
    ///         Tool::new("T1", MetricVector::new(1, 2, 3)),
    ///         Tool::new("T2", MetricVector::new(3, 2, 1)),
    ///     ],
    ///     vec![
    ///         Sample::new("M1", MetricVector::new(1, 1, 1), ["T2", "T1"]),
    ///         Sample::new("M2", MetricVector::new(2, 2, 2), ["T1", "T2"]),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
    /// assert_eq!(result.placement_of("M2"), Some(("T1", 12)));
    /// assert_eq!(result.placement_of("M1"), Some(("T2", 6)));
    /// ```
    pub fn run(instance: &Instance, config: &AssignConfig) -> Result<Assignment, InstanceError> {
        Self::run_with_scorer(instance, &DotProduct, config)
    }

    /// Assigns samples using a custom fit scorer.
    ///
    /// Fails only when there are samples but no tools.
    pub fn run_with_scorer<S: FitScorer>(
        instance: &Instance,
        scorer: &S,
        config: &AssignConfig,
    ) -> Result<Assignment, InstanceError> {
        let capacity = uniform_capacity(instance.tool_count(), instance.sample_count())?;
        if capacity == 0 && !instance.is_empty() {
            warn!(
                tools = instance.tool_count(),
                samples = instance.sample_count(),
                "capacity is zero, no sample can be placed"
            );
        }

        let tools = instance.tools();
        let samples = instance.samples();

        let mut committed: Vec<Vec<Placement>> = vec![Vec::new(); tools.len()];
        let mut loads = vec![0usize; tools.len()];
        let mut assigned = vec![false; samples.len()];
        let mut decisions: Vec<Decision> = Vec::new();

        loop {
            let candidates = scan_candidates(
                instance,
                scorer,
                &loads,
                &assigned,
                capacity,
                config.parallel,
            );
            let Some(best) = select_best(&candidates, instance, config.tie_breaker) else {
                break;
            };

            let sample = &samples[best.sample];
            let tool = &tools[best.tool];

            committed[best.tool].push(Placement {
                sample_id: sample.id.clone(),
                score: best.score,
            });
            loads[best.tool] += 1;
            assigned[best.sample] = true;

            debug!(
                step = decisions.len(),
                sample = %sample.id,
                tool = %tool.id,
                score = best.score,
                rank = best.rank,
                "assigned sample"
            );

            decisions.push(Decision {
                step: decisions.len(),
                sample_id: sample.id.clone(),
                tool_id: tool.id.clone(),
                score: best.score,
                rank: best.rank,
            });
        }

        let mut by_tool: Vec<ToolAssignment> = tools
            .iter()
            .zip(committed)
            .map(|(tool, mut placements)| {
                // Stable: equal scores keep commit order.
                placements.sort_by(|a, b| b.score.cmp(&a.score));
                ToolAssignment {
                    tool_id: tool.id.clone(),
                    placements,
                }
            })
            .collect();
        by_tool.sort_by(|a, b| a.tool_id.cmp(&b.tool_id));

        let unassigned: Vec<String> = samples
            .iter()
            .zip(&assigned)
            .filter(|(_, &done)| !done)
            .map(|(s, _)| s.id.clone())
            .collect();

        info!(
            capacity,
            assigned = decisions.len(),
            unassigned = unassigned.len(),
            scorer = scorer.name(),
            "assignment complete"
        );

        Ok(Assignment {
            capacity,
            tools: by_tool,
            decisions,
            unassigned,
        })
    }
}

/// Best eligible placement of one sample: the first tool of its
/// preference list whose load is below capacity.
pub(crate) fn candidate_for<S: FitScorer>(
    instance: &Instance,
    scorer: &S,
    loads: &[usize],
    capacity: usize,
    sample: usize,
) -> Option<Candidate> {
    instance
        .preference_positions(sample)
        .iter()
        .enumerate()
        .find(|&(_, &tool)| loads[tool] < capacity)
        .map(|(rank, &tool)| Candidate {
            score: scorer.score(&instance.tools()[tool], &instance.samples()[sample]),
            rank,
            sample,
            tool,
        })
}

fn scan_sequential<S: FitScorer>(
    instance: &Instance,
    scorer: &S,
    loads: &[usize],
    assigned: &[bool],
    capacity: usize,
) -> Vec<Candidate> {
    (0..instance.sample_count())
        .filter(|&i| !assigned[i])
        .filter_map(|i| candidate_for(instance, scorer, loads, capacity, i))
        .collect()
}

/// Candidates of one pass, in sample order.
#[cfg(feature = "parallel")]
pub(crate) fn scan_candidates<S: FitScorer>(
    instance: &Instance,
    scorer: &S,
    loads: &[usize],
    assigned: &[bool],
    capacity: usize,
    parallel: bool,
) -> Vec<Candidate> {
    use rayon::prelude::*;

    if !parallel {
        return scan_sequential(instance, scorer, loads, assigned, capacity);
    }
    // collect keeps sample order.
    (0..instance.sample_count())
        .into_par_iter()
        .filter(|&i| !assigned[i])
        .filter_map(|i| candidate_for(instance, scorer, loads, capacity, i))
        .collect()
}

/// Candidates of one pass, in sample order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn scan_candidates<S: FitScorer>(
    instance: &Instance,
    scorer: &S,
    loads: &[usize],
    assigned: &[bool],
    capacity: usize,
    _parallel: bool,
) -> Vec<Candidate> {
    scan_sequential(instance, scorer, loads, assigned, capacity)
}

/// Returns the best candidate of a pass, or `None` if the pass is empty.
pub(crate) fn select_best(
    candidates: &[Candidate],
    instance: &Instance,
    tb: TieBreaker,
) -> Option<Candidate> {
    candidates
        .iter()
        .copied()
        .max_by(|a, b| a.compare(b, instance, tb))
}
