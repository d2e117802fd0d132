//! Post-hoc verification of an [`Assignment`].
//!
//! Checks the static invariants of a result (capacity, uniqueness, score
//! correctness, no stranded sample) and then replays the decision log:
//! at every step the committed pair must be the one the candidate/select
//! loop would pick on the state reached so far.

use std::collections::HashSet;

use thiserror::Error;

use super::config::AssignConfig;
use super::runner::{candidate_for, scan_candidates, select_best};
use super::types::Assignment;
use crate::model::{Instance, Score};
use crate::scoring::{DotProduct, FitScorer};

/// The first property an assignment was found to break.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditViolation {
    #[error("recorded capacity {recorded} differs from expected {expected}")]
    CapacityMismatch { recorded: usize, expected: usize },

    #[error("tool {tool} holds {count} samples, capacity is {capacity}")]
    CapacityExceeded {
        tool: String,
        count: usize,
        capacity: usize,
    },

    #[error("sample {0} is placed more than once")]
    DuplicateSample(String),

    #[error("placement of {sample} on {tool} references an unknown id")]
    UnknownPlacement { tool: String, sample: String },

    #[error("sample {sample} is placed on {tool}, which it does not list")]
    UnlistedTool { sample: String, tool: String },

    #[error("sample {sample} on {tool} recorded score {recorded}, expected {expected}")]
    ScoreMismatch {
        sample: String,
        tool: String,
        recorded: Score,
        expected: Score,
    },

    #[error("sample {sample} is unassigned but preferred tool {tool} has room")]
    StrandedSample { sample: String, tool: String },

    #[error("step {step}: committed {committed} while {better} was strictly better")]
    DecisionOutranked {
        step: usize,
        committed: String,
        better: String,
    },

    #[error("step {step}: tie resolved for {committed}, tie breaker picks {expected}")]
    TieBreakDiverged {
        step: usize,
        committed: String,
        expected: String,
    },

    #[error("step {step}: {tool} was not the top eligible preference of {sample}")]
    IneligibleDecision {
        step: usize,
        sample: String,
        tool: String,
    },

    #[error("{remaining} candidates remained after the last decision")]
    PrematureStop { remaining: usize },

    #[error("decision log disagrees with placements: {0}")]
    LogMismatch(String),
}

/// Verifies an assignment produced with the dot-product scorer.
pub fn verify(
    instance: &Instance,
    assignment: &Assignment,
    config: &AssignConfig,
) -> Result<(), AuditViolation> {
    verify_with_scorer(instance, assignment, &DotProduct, config)
}

/// Verifies an assignment produced with `scorer` under `config`.
///
/// # Examples
///
/// ```
/// use u_assign::greedy::{verify, AssignConfig, GreedyAssigner};
/// use u_assign::model::{Instance, MetricVector, Sample, Tool};
///
/// let instance = Instance::new(
///     vec![Tool::new("T1", MetricVector::new(1, 2, 3))],
///     vec![Sample::new("M1", MetricVector::new(1, 1, 1), ["T1"])],
/// )
/// .unwrap();
/// let config = AssignConfig::default();
/// let result = GreedyAssigner::run(&instance, &config).unwrap();
/// assert!(verify(&instance, &result, &config).is_ok());
/// ```
pub fn verify_with_scorer<S: FitScorer>(
    instance: &Instance,
    assignment: &Assignment,
    scorer: &S,
    config: &AssignConfig,
) -> Result<(), AuditViolation> {
    let capacity = check_placements(instance, assignment, scorer)?;
    check_stranded(instance, assignment, capacity)?;
    replay(instance, assignment, scorer, config, capacity)?;
    check_log_matches(assignment)
}

/// Capacity, uniqueness, preference and score checks. Returns the
/// capacity.
fn check_placements<S: FitScorer>(
    instance: &Instance,
    assignment: &Assignment,
    scorer: &S,
) -> Result<usize, AuditViolation> {
    let expected = instance
        .sample_count()
        .checked_div(instance.tool_count())
        .unwrap_or(0);
    if assignment.capacity != expected {
        return Err(AuditViolation::CapacityMismatch {
            recorded: assignment.capacity,
            expected,
        });
    }

    let mut seen = HashSet::new();
    for entry in &assignment.tools {
        if entry.placements.len() > expected {
            return Err(AuditViolation::CapacityExceeded {
                tool: entry.tool_id.clone(),
                count: entry.placements.len(),
                capacity: expected,
            });
        }
        for placement in &entry.placements {
            let (Some(tool), Some(sample)) = (
                instance.tool(&entry.tool_id),
                instance.sample(&placement.sample_id),
            ) else {
                return Err(AuditViolation::UnknownPlacement {
                    tool: entry.tool_id.clone(),
                    sample: placement.sample_id.clone(),
                });
            };
            if !seen.insert(placement.sample_id.as_str()) {
                return Err(AuditViolation::DuplicateSample(placement.sample_id.clone()));
            }
            if sample.rank_of(&tool.id).is_none() {
                return Err(AuditViolation::UnlistedTool {
                    sample: sample.id.clone(),
                    tool: tool.id.clone(),
                });
            }
            let score = scorer.score(tool, sample);
            if score != placement.score {
                return Err(AuditViolation::ScoreMismatch {
                    sample: sample.id.clone(),
                    tool: tool.id.clone(),
                    recorded: placement.score,
                    expected: score,
                });
            }
        }
    }
    Ok(expected)
}

/// An unassigned sample must find every tool it lists full.
fn check_stranded(
    instance: &Instance,
    assignment: &Assignment,
    capacity: usize,
) -> Result<(), AuditViolation> {
    for sample in instance.samples() {
        if assignment.placement_of(&sample.id).is_some() {
            continue;
        }
        let open = sample.preferences.iter().find(|tool_id| {
            assignment
                .tool(tool_id)
                .is_none_or(|t| t.placements.len() < capacity)
        });
        if let Some(tool_id) = open {
            return Err(AuditViolation::StrandedSample {
                sample: sample.id.clone(),
                tool: tool_id.clone(),
            });
        }
    }
    Ok(())
}

fn replay<S: FitScorer>(
    instance: &Instance,
    assignment: &Assignment,
    scorer: &S,
    config: &AssignConfig,
    capacity: usize,
) -> Result<(), AuditViolation> {
    let samples = instance.samples();
    let mut loads = vec![0usize; instance.tool_count()];
    let mut assigned = vec![false; instance.sample_count()];

    for (step, decision) in assignment.decisions.iter().enumerate() {
        if decision.step != step {
            return Err(AuditViolation::LogMismatch(format!(
                "decision {step} is numbered {}",
                decision.step
            )));
        }
        let (Some(sample), Some(tool)) = (
            instance.sample_position(&decision.sample_id),
            instance.tool_position(&decision.tool_id),
        ) else {
            return Err(AuditViolation::LogMismatch(format!(
                "step {step} references an unknown id"
            )));
        };
        if assigned[sample] {
            return Err(AuditViolation::DuplicateSample(decision.sample_id.clone()));
        }

        let committed = candidate_for(instance, scorer, &loads, capacity, sample)
            .filter(|c| c.tool == tool && c.rank == decision.rank && c.score == decision.score)
            .ok_or_else(|| AuditViolation::IneligibleDecision {
                step,
                sample: decision.sample_id.clone(),
                tool: decision.tool_id.clone(),
            })?;

        let candidates = scan_candidates(instance, scorer, &loads, &assigned, capacity, false);
        if let Some(best) = select_best(&candidates, instance, config.tie_breaker) {
            if best.sample != committed.sample {
                let other = samples[best.sample].id.clone();
                return Err(if best.strictly_better(&committed) {
                    AuditViolation::DecisionOutranked {
                        step,
                        committed: decision.sample_id.clone(),
                        better: other,
                    }
                } else {
                    AuditViolation::TieBreakDiverged {
                        step,
                        committed: decision.sample_id.clone(),
                        expected: other,
                    }
                });
            }
        }

        loads[tool] += 1;
        assigned[sample] = true;
    }

    let remaining = scan_candidates(instance, scorer, &loads, &assigned, capacity, false).len();
    if remaining > 0 {
        return Err(AuditViolation::PrematureStop { remaining });
    }
    Ok(())
}

fn check_log_matches(assignment: &Assignment) -> Result<(), AuditViolation> {
    let mut from_log: Vec<(&str, &str, Score)> = assignment
        .decisions
        .iter()
        .map(|d| (d.tool_id.as_str(), d.sample_id.as_str(), d.score))
        .collect();
    let mut from_placements: Vec<(&str, &str, Score)> = assignment
        .tools
        .iter()
        .flat_map(|t| {
            t.placements
                .iter()
                .map(move |p| (t.tool_id.as_str(), p.sample_id.as_str(), p.score))
        })
        .collect();
    from_log.sort_unstable();
    from_placements.sort_unstable();
    if from_log != from_placements {
        return Err(AuditViolation::LogMismatch(format!(
            "{} logged decisions, {} placements",
            from_log.len(),
            from_placements.len()
        )));
    }
    Ok(())
}
