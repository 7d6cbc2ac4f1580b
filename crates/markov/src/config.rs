//! Model parameters shared by every individual in a run.

use cessim_rates::CycleConversion;

use crate::error::MarkovError;
use crate::mortality::MortalityCoefficients;
use crate::state::HealthState;

/// Annual cost of occupying each non-absorbing state. `Dead` always costs 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateCosts {
    /// Annual cost while smoking.
    pub current: f64,
    /// Annual cost while abstinent.
    pub former: f64,
}

impl StateCosts {
    /// Returns the annual cost of `state`.
    pub fn annual(&self, state: HealthState) -> f64 {
        match state {
            HealthState::Current => self.current,
            HealthState::Former => self.former,
            HealthState::Dead => 0.0,
        }
    }
}

impl Default for StateCosts {
    fn default() -> Self {
        Self {
            current: 2000.0,
            former: 5000.0,
        }
    }
}

/// Parameters of the cessation model, immutable for the duration of a run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use cessim_markov::ModelParams;
///
/// let params = ModelParams::new()
///     .with_cycle_length(1.0 / 4.0)
///     .with_discount_rate(0.03);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ModelParams {
    cycle_length: f64,
    discount_rate: f64,
    mortality: MortalityCoefficients,
    cessation_prob: f64,
    relapse_prob: f64,
    abstinence_plateau: f64,
    costs: StateCosts,
    conversion: CycleConversion,
}

impl ModelParams {
    /// Creates parameters with defaults.
    ///
    /// Defaults: monthly cycles (`1/12` year), `discount_rate = 0.015`,
    /// default mortality coefficients, `cessation_prob = 0.06`,
    /// `relapse_prob = 0.42`, `abstinence_plateau = 5.0` years,
    /// default state costs and [`CycleConversion::Reference`].
    pub fn new() -> Self {
        Self {
            cycle_length: 1.0 / 12.0,
            discount_rate: 0.015,
            mortality: MortalityCoefficients::default(),
            cessation_prob: 0.06,
            relapse_prob: 0.42,
            abstinence_plateau: 5.0,
            costs: StateCosts::default(),
            conversion: CycleConversion::Reference,
        }
    }

    /// Sets the cycle length in years.
    pub fn with_cycle_length(mut self, years: f64) -> Self {
        self.cycle_length = years;
        self
    }

    /// Sets the annual discount rate.
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Sets the mortality model coefficients.
    pub fn with_mortality(mut self, mortality: MortalityCoefficients) -> Self {
        self.mortality = mortality;
        self
    }

    /// Sets the annual probability of quitting while smoking.
    pub fn with_cessation_prob(mut self, p: f64) -> Self {
        self.cessation_prob = p;
        self
    }

    /// Sets the annual probability of relapse before the plateau.
    pub fn with_relapse_prob(mut self, p: f64) -> Self {
        self.relapse_prob = p;
        self
    }

    /// Sets the abstinence duration (years) after which relapse stops.
    pub fn with_abstinence_plateau(mut self, years: f64) -> Self {
        self.abstinence_plateau = years;
        self
    }

    /// Sets the per-state annual costs.
    pub fn with_costs(mut self, costs: StateCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Sets how annual probabilities are rescaled to one cycle.
    pub fn with_conversion(mut self, conversion: CycleConversion) -> Self {
        self.conversion = conversion;
        self
    }

    // --- Accessors ---

    /// Returns the cycle length in years.
    pub fn cycle_length(&self) -> f64 {
        self.cycle_length
    }

    /// Returns the annual discount rate.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Returns the mortality coefficients.
    pub fn mortality(&self) -> &MortalityCoefficients {
        &self.mortality
    }

    /// Returns the annual cessation probability.
    pub fn cessation_prob(&self) -> f64 {
        self.cessation_prob
    }

    /// Returns the annual relapse probability.
    pub fn relapse_prob(&self) -> f64 {
        self.relapse_prob
    }

    /// Returns the abstinence plateau in years.
    pub fn abstinence_plateau(&self) -> f64 {
        self.abstinence_plateau
    }

    /// Returns the per-state annual costs.
    pub fn costs(&self) -> &StateCosts {
        &self.costs
    }

    /// Returns the cycle conversion mode.
    pub fn conversion(&self) -> CycleConversion {
        self.conversion
    }

    /// Converts an annual probability to the per-cycle sampling probability.
    pub fn per_cycle(&self, annual: f64) -> f64 {
        self.conversion.cycle_probability(annual, self.cycle_length)
    }

    /// Validates these parameters.
    pub fn validate(&self) -> Result<(), MarkovError> {
        if !self.cycle_length.is_finite() || self.cycle_length <= 0.0 {
            return Err(MarkovError::InvalidParameter {
                name: "cycle_length",
                reason: format!("must be finite and positive, got {}", self.cycle_length),
            });
        }
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(MarkovError::InvalidParameter {
                name: "discount_rate",
                reason: format!("must be finite and > -1, got {}", self.discount_rate),
            });
        }
        Self::validate_prob(self.cessation_prob, "cessation_prob")?;
        Self::validate_prob(self.relapse_prob, "relapse_prob")?;
        if !self.abstinence_plateau.is_finite() || self.abstinence_plateau < 0.0 {
            return Err(MarkovError::InvalidParameter {
                name: "abstinence_plateau",
                reason: format!(
                    "must be finite and non-negative, got {}",
                    self.abstinence_plateau
                ),
            });
        }
        for (name, cost) in [
            ("costs.current", self.costs.current),
            ("costs.former", self.costs.former),
        ] {
            if !cost.is_finite() {
                return Err(MarkovError::InvalidParameter {
                    name,
                    reason: format!("must be finite, got {cost}"),
                });
            }
        }
        self.mortality.validate()
    }

    fn validate_prob(p: f64, name: &'static str) -> Result<(), MarkovError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(MarkovError::InvalidParameter {
                name,
                reason: format!("must be in [0, 1], got {p}"),
            });
        }
        Ok(())
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::new()
    }
}
