//! Random instance generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::GeneratorConfig;
use crate::error::InstanceError;
use crate::model::{Instance, MetricVector, Sample, Score, Tool};

/// Builds random, structurally valid instances.
pub struct InstanceGenerator;

impl InstanceGenerator {
    /// Generates an instance with the configured shape.
    ///
    /// Each preference list is a random permutation of the tools cut to
    /// `preference_len`. The same seed always yields the same instance.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GeneratorConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::generator::{GeneratorConfig, InstanceGenerator};
    ///
    /// let config = GeneratorConfig::default().with_seed(1);
    /// let instance = InstanceGenerator::generate(&config).unwrap();
    /// assert_eq!(instance.tool_count(), 3);
    /// assert_eq!(instance.sample_count(), 12);
    /// ```
    pub fn generate(config: &GeneratorConfig) -> Result<Instance, InstanceError> {
        config.validate().expect("invalid GeneratorConfig");

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let tools: Vec<Tool> = (0..config.tool_count)
            .map(|i| Tool::new(format!("T{i}"), random_vector(&mut rng, config.max_metric)))
            .collect();

        let pref_len = config.preference_len.min(tools.len());
        let mut order: Vec<usize> = (0..tools.len()).collect();
        let samples: Vec<Sample> = (0..config.sample_count)
            .map(|i| {
                let needs = random_vector(&mut rng, config.max_need);
                order.shuffle(&mut rng);
                let prefs = order[..pref_len].iter().map(|&t| tools[t].id.clone());
                Sample::new(format!("M{i}"), needs, prefs)
            })
            .collect();

        debug!(
            seed,
            tools = tools.len(),
            samples = samples.len(),
            "generated instance"
        );
        Instance::new(tools, samples)
    }
}

fn random_vector<R: Rng>(rng: &mut R, max: Score) -> MetricVector {
    MetricVector::new(
        rng.random_range(1..=max),
        rng.random_range(1..=max),
        rng.random_range(1..=max),
    )
}
