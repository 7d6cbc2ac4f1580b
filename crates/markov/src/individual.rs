//! A single simulated person.

use crate::config::ModelParams;
use crate::error::MarkovError;
use crate::state::HealthState;
use crate::transition::TransitionProbs;

/// Demographic and clinical covariates feeding the mortality model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Covariates {
    /// Age in years.
    pub age: f64,
    /// Male sex.
    pub male: bool,
    /// Disease severity grade (0 = none).
    pub grade: u8,
    /// Currently smoking.
    pub smoker: bool,
}

impl Default for Covariates {
    /// 50-year-old male smoker with grade 2 disease.
    fn default() -> Self {
        Self {
            age: 50.0,
            male: true,
            grade: 2,
            smoker: true,
        }
    }
}

/// Mutable record of one simulated individual.
///
/// Holds a state tag rather than a reference to a shared state object; the
/// per-cycle logic lives on [`HealthState`].
#[derive(Debug, Clone)]
pub struct Individual {
    id: u64,
    state: HealthState,
    alive: bool,
    years_elapsed: f64,
    cycles: u32,
    abstinence_years: f64,
    covariates: Covariates,
}

impl Individual {
    /// Creates an individual at time zero.
    ///
    /// Everyone starts in `Current` with zero abstinence. A non-smoking
    /// baseline only changes the first cycle's mortality; the first draw
    /// decides where they go from there.
    pub fn new(id: u64, covariates: Covariates) -> Self {
        Self {
            id,
            state: HealthState::Current,
            alive: true,
            years_elapsed: 0.0,
            cycles: 0,
            abstinence_years: 0.0,
            covariates,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> HealthState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Years simulated so far.
    pub fn years_elapsed(&self) -> f64 {
        self.years_elapsed
    }

    /// Number of completed cycles.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Continuous time spent in `Former` since it was last entered.
    pub fn abstinence_years(&self) -> f64 {
        self.abstinence_years
    }

    pub fn covariates(&self) -> &Covariates {
        &self.covariates
    }

    /// Sets abstinence duration back to zero.
    pub fn reset_abstinence(&mut self) {
        self.abstinence_years = 0.0;
    }

    /// Adds `years` to the abstinence duration.
    pub fn extend_abstinence(&mut self, years: f64) {
        self.abstinence_years += years;
    }

    /// Runs one cycle, drawing the next state from `rng`.
    ///
    /// Returns the discounted cost accrued in the state entered this cycle.
    pub fn step(
        &mut self,
        params: &ModelParams,
        rng: &mut impl rand::Rng,
    ) -> Result<f64, MarkovError> {
        let Some(state) = self.begin_cycle(params) else {
            return Ok(0.0);
        };
        let next = state.next_state(self, params, rng)?;
        Ok(self.finish_cycle(next, params))
    }

    /// Runs one cycle with the next state chosen by `choose`.
    ///
    /// Order within the cycle: advance age and elapsed time, apply the
    /// current state's events, compute the transition distribution, choose
    /// and enter the next state, then cost the entered state. A dead
    /// individual is left untouched and accrues nothing.
    pub fn step_with<F>(&mut self, params: &ModelParams, choose: F) -> Result<f64, MarkovError>
    where
        F: FnOnce(&TransitionProbs) -> Result<HealthState, MarkovError>,
    {
        let Some(state) = self.begin_cycle(params) else {
            return Ok(0.0);
        };
        let next = choose(&state.transition_probs(self, params))?;
        Ok(self.finish_cycle(next, params))
    }

    /// Advances the clock and applies the current state's events. Returns
    /// the state the cycle started in, or `None` once dead.
    fn begin_cycle(&mut self, params: &ModelParams) -> Option<HealthState> {
        if !self.alive {
            return None;
        }
        let cl = params.cycle_length();
        self.covariates.age += cl;
        self.years_elapsed += cl;
        self.cycles += 1;

        let state = self.state;
        state.process_events(self, params);
        Some(state)
    }

    fn finish_cycle(&mut self, next: HealthState, params: &ModelParams) -> f64 {
        self.enter(next);
        next.cycle_cost(params, self.years_elapsed)
    }

    fn enter(&mut self, next: HealthState) {
        self.state = next;
        if let Some(smoking) = next.is_smoking() {
            self.covariates.smoker = smoking;
        }
        if next.is_absorbing() {
            self.alive = false;
        }
    }
}
