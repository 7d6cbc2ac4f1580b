//! Configuration for a cohort run.

use cessim_markov::{Covariates, ModelParams};

use crate::error::CohortError;

/// Configuration for a cohort simulation.
///
/// # Example
///
/// ```
/// use cessim_cohort::CohortConfig;
///
/// let config = CohortConfig::new()
///     .with_n_individuals(500)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CohortConfig {
    n_individuals: usize,
    seed: Option<u64>,
    max_cycles: u32,
    quit_threshold_years: f64,
    baseline: Covariates,
    params: ModelParams,
}

impl CohortConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `n_individuals = 1000`, `seed = None`, `max_cycles = 6000`,
    /// `quit_threshold_years = 5.0`, default baseline covariates and model
    /// parameters.
    pub fn new() -> Self {
        Self {
            n_individuals: 1000,
            seed: None,
            max_cycles: 6000,
            quit_threshold_years: 5.0,
            baseline: Covariates::default(),
            params: ModelParams::new(),
        }
    }

    /// Sets the number of simulated individuals.
    pub fn with_n_individuals(mut self, n: usize) -> Self {
        self.n_individuals = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the maximum number of cycles any individual may live.
    pub fn with_max_cycles(mut self, max_cycles: u32) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Sets the abstinence duration at death that counts as a successful quit.
    pub fn with_quit_threshold_years(mut self, years: f64) -> Self {
        self.quit_threshold_years = years;
        self
    }

    /// Sets the baseline covariates every individual starts with.
    pub fn with_baseline(mut self, baseline: Covariates) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the model parameters.
    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    // --- Accessors ---

    pub fn n_individuals(&self) -> usize {
        self.n_individuals
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn max_cycles(&self) -> u32 {
        self.max_cycles
    }

    pub fn quit_threshold_years(&self) -> f64 {
        self.quit_threshold_years
    }

    pub fn baseline(&self) -> &Covariates {
        &self.baseline
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Validates the cohort settings and the model parameters.
    pub fn validate(&self) -> Result<(), CohortError> {
        if self.n_individuals == 0 {
            return Err(CohortError::EmptyCohort);
        }
        if self.max_cycles == 0 {
            return Err(CohortError::InvalidSetting {
                name: "max_cycles",
                reason: "must be positive".to_string(),
            });
        }
        if !self.quit_threshold_years.is_finite() || self.quit_threshold_years < 0.0 {
            return Err(CohortError::InvalidSetting {
                name: "quit_threshold_years",
                reason: format!(
                    "must be finite and non-negative, got {}",
                    self.quit_threshold_years
                ),
            });
        }
        if !self.baseline.age.is_finite() || self.baseline.age < 0.0 {
            return Err(CohortError::InvalidSetting {
                name: "baseline.age",
                reason: format!("must be finite and non-negative, got {}", self.baseline.age),
            });
        }
        self.params.validate()?;
        Ok(())
    }
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cessim_markov::MarkovError;

    #[test]
    fn defaults() {
        let cfg = CohortConfig::new();
        assert_eq!(cfg.n_individuals(), 1000);
        assert_eq!(cfg.seed(), None);
        assert_eq!(cfg.max_cycles(), 6000);
        assert!((cfg.quit_threshold_years() - 5.0).abs() < f64::EPSILON);
        assert_eq!(cfg.baseline(), &Covariates::default());
    }

    #[test]
    fn builder_chaining() {
        let baseline = Covariates {
            age: 65.0,
            male: false,
            grade: 3,
            smoker: true,
        };
        let cfg = CohortConfig::new()
            .with_n_individuals(10)
            .with_seed(42)
            .with_max_cycles(100)
            .with_quit_threshold_years(1.0)
            .with_baseline(baseline)
            .with_params(ModelParams::new().with_cycle_length(0.25));
        assert_eq!(cfg.n_individuals(), 10);
        assert_eq!(cfg.seed(), Some(42));
        assert_eq!(cfg.max_cycles(), 100);
        assert!((cfg.quit_threshold_years() - 1.0).abs() < f64::EPSILON);
        assert_eq!(cfg.baseline(), &baseline);
        assert!((cfg.params().cycle_length() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_ok() {
        assert!(CohortConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_empty_cohort() {
        assert!(matches!(
            CohortConfig::new().with_n_individuals(0).validate(),
            Err(CohortError::EmptyCohort)
        ));
    }

    #[test]
    fn validate_zero_max_cycles() {
        assert!(CohortConfig::new().with_max_cycles(0).validate().is_err());
    }

    #[test]
    fn validate_bad_threshold() {
        assert!(
            CohortConfig::new()
                .with_quit_threshold_years(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_forwards_model_errors() {
        let cfg = CohortConfig::new().with_params(ModelParams::new().with_cycle_length(0.0));
        assert!(matches!(
            cfg.validate(),
            Err(CohortError::Markov(MarkovError::InvalidParameter {
                name: "cycle_length",
                ..
            }))
        ));
    }
}
