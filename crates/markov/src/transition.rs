//! Per-cycle transition probabilities for each health state.
//!
//! Probabilities are plain values computed fresh for one individual and one
//! cycle. Nothing here is stored on a shared state object, so concurrent
//! individuals never observe each other's probabilities.

use cessim_rates::discount_factor;

use crate::config::ModelParams;
use crate::error::MarkovError;
use crate::individual::Individual;
use crate::state::HealthState;

/// Tolerance used by [`TransitionProbs::validate`] for the sum-to-one check.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Categorical distribution over the next [`HealthState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionProbs {
    to_current: f64,
    to_former: f64,
    to_dead: f64,
}

impl TransitionProbs {
    /// The absorbing distribution: all mass on `Dead`.
    pub const ABSORBED: Self = Self {
        to_current: 0.0,
        to_former: 0.0,
        to_dead: 1.0,
    };

    /// Constructs a distribution from raw weights. No validation is performed.
    pub fn new(to_current: f64, to_former: f64, to_dead: f64) -> Self {
        Self {
            to_current,
            to_former,
            to_dead,
        }
    }

    /// Probability of moving to (or staying in) `Current`.
    pub fn to_current(&self) -> f64 {
        self.to_current
    }

    /// Probability of moving to (or staying in) `Former`.
    pub fn to_former(&self) -> f64 {
        self.to_former
    }

    /// Probability of dying this cycle.
    pub fn to_dead(&self) -> f64 {
        self.to_dead
    }

    /// Returns the probability of transitioning to `to`.
    pub fn prob(&self, to: HealthState) -> f64 {
        self.as_array()[to.as_index()]
    }

    /// Returns the weights in [`HealthState::ALL`] order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.to_current, self.to_former, self.to_dead]
    }

    /// Validates that the distribution is a proper probability vector.
    ///
    /// Checks that all values are finite, in `[0, 1]`, and that they sum to
    /// 1.0 within [`SUM_TOLERANCE`].
    pub fn validate(&self) -> Result<(), MarkovError> {
        let mut sum = 0.0;
        for state in HealthState::ALL {
            let p = self.prob(state);
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(MarkovError::InvalidDistribution {
                    reason: format!("probability of {state} is {p}, outside [0, 1]"),
                });
            }
            sum += p;
        }
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(MarkovError::InvalidDistribution {
                reason: format!("probabilities sum to {sum}, expected 1"),
            });
        }
        Ok(())
    }

    /// Draws the next state using the cumulative distribution.
    ///
    /// Weights need not be normalised, but each must be finite and
    /// non-negative and their sum must be positive. States with zero weight
    /// are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidDistribution`] for malformed weights.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> Result<HealthState, MarkovError> {
        let weights = self.as_array();
        let mut total = 0.0;
        for (state, &w) in HealthState::ALL.iter().zip(&weights) {
            if !w.is_finite() || w < 0.0 {
                return Err(MarkovError::InvalidDistribution {
                    reason: format!("weight for {state} is {w}"),
                });
            }
            total += w;
        }
        if total <= 0.0 {
            return Err(MarkovError::InvalidDistribution {
                reason: format!("weights sum to {total}"),
            });
        }

        let u: f64 = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut last = HealthState::Dead;
        for state in HealthState::ALL {
            let w = weights[state.as_index()];
            if w == 0.0 {
                continue;
            }
            cumulative += w;
            last = state;
            if u < cumulative {
                return Ok(state);
            }
        }
        // Only reachable through floating-point rounding.
        Ok(last)
    }
}

impl HealthState {
    /// Applies the state's residency side effects for the current cycle.
    ///
    /// `Current` resets the abstinence duration, `Former` extends it by one
    /// cycle, `Dead` does nothing. Must run before [`transition_probs`](Self::transition_probs).
    pub fn process_events(self, individual: &mut Individual, params: &ModelParams) {
        match self {
            Self::Current => individual.reset_abstinence(),
            Self::Former => individual.extend_abstinence(params.cycle_length()),
            Self::Dead => {}
        }
    }

    /// Computes the distribution of the next state for `individual`.
    pub fn transition_probs(self, individual: &Individual, params: &ModelParams) -> TransitionProbs {
        match self {
            Self::Current => {
                let die = death_probability(individual, params);
                let former = (1.0 - die) * params.per_cycle(params.cessation_prob());
                TransitionProbs::new((1.0 - former - die).max(0.0), former, die)
            }
            Self::Former => {
                let die = death_probability(individual, params);
                let current = if individual.abstinence_years() < params.abstinence_plateau() {
                    (1.0 - die) * params.per_cycle(params.relapse_prob())
                } else {
                    0.0
                };
                TransitionProbs::new(current, (1.0 - current - die).max(0.0), die)
            }
            Self::Dead => TransitionProbs::ABSORBED,
        }
    }

    /// Computes this cycle's distribution and draws the next state from it.
    pub fn next_state(
        self,
        individual: &Individual,
        params: &ModelParams,
        rng: &mut impl rand::Rng,
    ) -> Result<HealthState, MarkovError> {
        self.transition_probs(individual, params).sample(rng)
    }

    /// Discounted cost of spending one cycle in this state, `years_elapsed`
    /// years after the start of the simulation.
    pub fn cycle_cost(self, params: &ModelParams, years_elapsed: f64) -> f64 {
        params.costs().annual(self)
            * params.cycle_length()
            * discount_factor(params.discount_rate(), years_elapsed)
    }
}

/// Per-cycle probability of death for the individual's current covariates.
pub fn death_probability(individual: &Individual, params: &ModelParams) -> f64 {
    let annual = params
        .mortality()
        .annual_death_probability(individual.covariates());
    params.per_cycle(annual)
}
