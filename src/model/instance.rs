//! Validated problem instance.

use std::collections::HashMap;

use super::entity::{Sample, Tool};
use super::metric::{Metric, MetricVector, Score};
use crate::error::InstanceError;

/// Tools and samples that passed structural validation.
///
/// Tool and sample order is the input order. Preference lists are
/// resolved to tool positions once, so the assigner never looks up
/// identifiers in its inner loop.
///
/// # Examples
///
/// ```
/// use u_assign::model::{Instance, MetricVector, Sample, Tool};
///
/// let instance = Instance::new(
///     vec![Tool::new("T1", MetricVector::new(1, 2, 3))],
///     vec![Sample::new("M1", MetricVector::new(1, 1, 1), ["T1"])],
/// )
/// .unwrap();
/// assert_eq!(instance.preference_positions(0), &[0]);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    tools: Vec<Tool>,
    samples: Vec<Sample>,
    tool_positions: HashMap<String, usize>,
    sample_positions: HashMap<String, usize>,
    preference_positions: Vec<Vec<usize>>,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// Fails on duplicate tool or sample ids, preferences naming an
    /// unknown tool, a tool listed twice by one sample, an empty
    /// preference list, or a tool/sample pair whose fit score does not fit
    /// in a [`Score`].
    pub fn new(tools: Vec<Tool>, samples: Vec<Sample>) -> Result<Self, InstanceError> {
        let mut tool_positions = HashMap::with_capacity(tools.len());
        for (pos, tool) in tools.iter().enumerate() {
            if tool_positions.insert(tool.id.clone(), pos).is_some() {
                return Err(InstanceError::DuplicateTool(tool.id.clone()));
            }
        }

        let mut sample_positions = HashMap::with_capacity(samples.len());
        let mut preference_positions = Vec::with_capacity(samples.len());
        for (pos, sample) in samples.iter().enumerate() {
            if sample_positions.insert(sample.id.clone(), pos).is_some() {
                return Err(InstanceError::DuplicateSample(sample.id.clone()));
            }
            if sample.preferences.is_empty() {
                return Err(InstanceError::EmptyPreferences(sample.id.clone()));
            }

            let mut positions = Vec::with_capacity(sample.preferences.len());
            for tool_id in &sample.preferences {
                let pos = *tool_positions
                    .get(tool_id)
                    .ok_or_else(|| InstanceError::UnknownTool {
                        sample: sample.id.clone(),
                        tool: tool_id.clone(),
                    })?;
                if positions.contains(&pos) {
                    return Err(InstanceError::RepeatedPreference {
                        sample: sample.id.clone(),
                        tool: tool_id.clone(),
                    });
                }
                positions.push(pos);
            }
            preference_positions.push(positions);
        }

        check_score_range(&tools, &samples)?;

        Ok(Self {
            tools,
            samples,
            tool_positions,
            sample_positions,
            preference_positions,
        })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Position of the tool with the given id.
    pub fn tool_position(&self, id: &str) -> Option<usize> {
        self.tool_positions.get(id).copied()
    }

    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tool_position(id).map(|pos| &self.tools[pos])
    }

    /// Position of the sample with the given id.
    pub fn sample_position(&self, id: &str) -> Option<usize> {
        self.sample_positions.get(id).copied()
    }

    pub fn sample(&self, id: &str) -> Option<&Sample> {
        self.sample_position(id).map(|pos| &self.samples[pos])
    }

    /// Tool positions of a sample's preference list, most preferred first.
    ///
    /// # Panics
    ///
    /// Panics if `sample` is out of bounds.
    pub fn preference_positions(&self, sample: usize) -> &[usize] {
        &self.preference_positions[sample]
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Largest magnitude of each metric over `vectors`.
fn metric_magnitudes<'a>(vectors: impl Iterator<Item = &'a MetricVector>) -> [u64; 3] {
    let mut max = [0u64; 3];
    for v in vectors {
        for (slot, (_, value)) in max.iter_mut().zip(v.iter()) {
            *slot = (*slot).max(value.unsigned_abs());
        }
    }
    max
}

/// Every fit score, and every partial sum on the way, must fit in a
/// [`Score`].
///
/// The per-metric magnitude bound settles ordinary inputs without looking
/// at individual pairs; only when it is exceeded is each pair checked.
fn check_score_range(tools: &[Tool], samples: &[Sample]) -> Result<(), InstanceError> {
    let tool_max = metric_magnitudes(tools.iter().map(|t| &t.metrics));
    let need_max = metric_magnitudes(samples.iter().map(|s| &s.needs));
    let bound: u128 = (0..Metric::ALL.len())
        .map(|k| u128::from(tool_max[k]) * u128::from(need_max[k]))
        .sum();
    if bound <= Score::MAX as u128 {
        return Ok(());
    }

    for sample in samples {
        for tool in tools {
            if tool.metrics.checked_dot(&sample.needs).is_none() {
                return Err(InstanceError::ScoreOverflow {
                    tool: tool.id.clone(),
                    sample: sample.id.clone(),
                });
            }
        }
    }
    Ok(())
}
