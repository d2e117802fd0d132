//! Instance generator configuration.

use crate::model::Score;

/// Shape of a random instance.
///
/// # Examples
///
/// ```
/// use u_assign::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_tools(4)
///     .with_samples(40)
///     .with_preference_len(2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of tools, ids `T0..`.
    pub tool_count: usize,

    /// Number of samples, ids `M0..`.
    pub sample_count: usize,

    /// Tool metrics are drawn from `1..=max_metric`.
    pub max_metric: Score,

    /// Sample needs are drawn from `1..=max_need`.
    pub max_need: Score,

    /// Length of each preference list. Clamped to the tool count.
    pub preference_len: usize,

    /// Random seed (`None` for random).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tool_count: 3,
            sample_count: 12,
            max_metric: 10,
            max_need: 12,
            preference_len: 3,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_tools(mut self, n: usize) -> Self {
        self.tool_count = n;
        self
    }

    pub fn with_samples(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    pub fn with_max_metric(mut self, max: Score) -> Self {
        self.max_metric = max;
        self
    }

    pub fn with_max_need(mut self, max: Score) -> Self {
        self.max_need = max;
        self
    }

    pub fn with_preference_len(mut self, n: usize) -> Self {
        self.preference_len = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.tool_count == 0 && self.sample_count > 0 {
            return Err("samples need at least one tool".into());
        }
        if self.preference_len == 0 && self.sample_count > 0 {
            return Err("preference_len must be positive".into());
        }
        if self.max_metric < 1 {
            return Err(format!("max_metric must be >= 1, got {}", self.max_metric));
        }
        if self.max_need < 1 {
            return Err(format!("max_need must be >= 1, got {}", self.max_need));
        }
        Ok(())
    }
}
