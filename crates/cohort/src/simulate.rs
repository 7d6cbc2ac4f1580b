//! Cohort simulation: individuals are run one after another to absorption.

use cessim_markov::{HealthState, Individual};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::CohortConfig;
use crate::error::CohortError;
use crate::summary::{CohortAccumulator, CohortSummary, IndividualOutcome};

/// State of an individual at the end of one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleRecord {
    /// 1-based cycle number.
    pub cycle: u32,
    /// Age at the end of the cycle.
    pub age: f64,
    /// State entered during the cycle.
    pub state: HealthState,
    /// Abstinence duration after the cycle's events.
    pub abstinence_years: f64,
    /// Discounted cost accrued this cycle.
    pub cost: f64,
}

/// Full cycle-by-cycle history of one individual.
#[derive(Debug, Clone)]
pub struct Trajectory {
    outcome: IndividualOutcome,
    records: Vec<CycleRecord>,
}

impl Trajectory {
    pub fn outcome(&self) -> &IndividualOutcome {
        &self.outcome
    }

    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    /// Sequence of states entered, one per cycle.
    pub fn states(&self) -> Vec<HealthState> {
        self.records.iter().map(|r| r.state).collect()
    }
}

/// Simulates one individual from the baseline covariates until death.
///
/// # Errors
///
/// Returns [`CohortError::CycleLimitExceeded`] if the individual is still
/// alive after `config.max_cycles()` cycles, or a model error if a
/// transition distribution is malformed.
pub fn simulate_individual(
    id: u64,
    config: &CohortConfig,
    rng: &mut impl rand::Rng,
) -> Result<IndividualOutcome, CohortError> {
    let mut person = Individual::new(id, *config.baseline());
    let cost = run_to_absorption(&mut person, config, rng, |_, _| {})?;
    Ok(outcome_of(&person, cost, config))
}

/// Like [`simulate_individual`], but also records every cycle.
pub fn trace_individual(
    id: u64,
    config: &CohortConfig,
    rng: &mut impl rand::Rng,
) -> Result<Trajectory, CohortError> {
    let mut person = Individual::new(id, *config.baseline());
    let mut records = Vec::new();
    let cost = run_to_absorption(&mut person, config, rng, |p, cost| {
        records.push(CycleRecord {
            cycle: p.cycles(),
            age: p.covariates().age,
            state: p.state(),
            abstinence_years: p.abstinence_years(),
            cost,
        });
    })?;
    Ok(Trajectory {
        outcome: outcome_of(&person, cost, config),
        records,
    })
}

/// Simulates the whole cohort sequentially, drawing from a single RNG stream
/// in id order.
///
/// # Errors
///
/// Returns a validation error before any simulation, or the first error
/// raised by an individual.
pub fn simulate_cohort(
    config: &CohortConfig,
    rng: &mut impl rand::Rng,
) -> Result<CohortSummary, CohortError> {
    config.validate()?;
    info!(
        n_individuals = config.n_individuals(),
        cycle_length = config.params().cycle_length(),
        "simulating cohort"
    );

    let mut acc = CohortAccumulator::new();
    for id in 0..config.n_individuals() as u64 {
        let outcome = simulate_individual(id, config, rng)?;
        debug!(
            id,
            cycles = outcome.cycles,
            abstinence_years = outcome.abstinence_years,
            quit = outcome.quit,
            "individual absorbed"
        );
        acc.push(&outcome);
    }

    let summary = acc.finish();
    info!(
        n_quit = summary.n_quit(),
        proportion_quit = summary.proportion_quit(),
        total_cost = summary.total_cost(),
        "cohort complete"
    );
    Ok(summary)
}

/// Runs [`simulate_cohort`] with an RNG seeded from the configuration, or
/// from the operating system when no seed is set.
pub fn run_cohort(config: &CohortConfig) -> Result<CohortSummary, CohortError> {
    let mut rng = match config.seed() {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    simulate_cohort(config, &mut rng)
}

fn run_to_absorption<F>(
    person: &mut Individual,
    config: &CohortConfig,
    rng: &mut impl rand::Rng,
    mut observe: F,
) -> Result<f64, CohortError>
where
    F: FnMut(&Individual, f64),
{
    let params = config.params();
    let mut total = 0.0;
    while person.is_alive() {
        if person.cycles() >= config.max_cycles() {
            return Err(CohortError::CycleLimitExceeded {
                id: person.id(),
                max_cycles: config.max_cycles(),
            });
        }
        let cost = person.step(params, rng)?;
        total += cost;
        observe(&*person, cost);
    }
    Ok(total)
}

fn outcome_of(person: &Individual, cost: f64, config: &CohortConfig) -> IndividualOutcome {
    IndividualOutcome {
        id: person.id(),
        cycles: person.cycles(),
        life_years: person.years_elapsed(),
        abstinence_years: person.abstinence_years(),
        discounted_cost: cost,
        quit: person.abstinence_years() >= config.quit_threshold_years(),
    }
}
