//! Per-individual outcomes and their cohort-level aggregation.

/// Outcome of simulating one individual to absorption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndividualOutcome {
    /// Individual identifier.
    pub id: u64,
    /// Cycles lived, including the cycle of death.
    pub cycles: u32,
    /// Years simulated until death.
    pub life_years: f64,
    /// Abstinence duration at death.
    pub abstinence_years: f64,
    /// Total discounted cost.
    pub discounted_cost: f64,
    /// Whether abstinence at death met the quit threshold.
    pub quit: bool,
}

/// Running totals over a set of individual outcomes.
///
/// Accumulators are independent values: partial accumulators can be merged,
/// so nothing is shared between individuals while they are simulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortAccumulator {
    n: usize,
    n_quit: usize,
    total_cost: f64,
    total_life_years: f64,
    total_cycles: u64,
    longest_run_cycles: u32,
}

impl CohortAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one outcome into the totals.
    pub fn push(&mut self, outcome: &IndividualOutcome) {
        self.n += 1;
        if outcome.quit {
            self.n_quit += 1;
        }
        self.total_cost += outcome.discounted_cost;
        self.total_life_years += outcome.life_years;
        self.total_cycles += u64::from(outcome.cycles);
        self.longest_run_cycles = self.longest_run_cycles.max(outcome.cycles);
    }

    /// Combines two accumulators.
    pub fn merge(mut self, other: CohortAccumulator) -> Self {
        self.n += other.n;
        self.n_quit += other.n_quit;
        self.total_cost += other.total_cost;
        self.total_life_years += other.total_life_years;
        self.total_cycles += other.total_cycles;
        self.longest_run_cycles = self.longest_run_cycles.max(other.longest_run_cycles);
        self
    }

    /// Number of outcomes folded in so far.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Freezes the totals into a summary.
    pub fn finish(self) -> CohortSummary {
        CohortSummary {
            n_individuals: self.n,
            n_quit: self.n_quit,
            total_cost: self.total_cost,
            total_life_years: self.total_life_years,
            total_cycles: self.total_cycles,
            longest_run_cycles: self.longest_run_cycles,
        }
    }
}

/// Summary statistics of a completed cohort run.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortSummary {
    n_individuals: usize,
    n_quit: usize,
    total_cost: f64,
    total_life_years: f64,
    total_cycles: u64,
    longest_run_cycles: u32,
}

impl CohortSummary {
    pub fn n_individuals(&self) -> usize {
        self.n_individuals
    }

    /// Number of individuals meeting the quit threshold at death.
    pub fn n_quit(&self) -> usize {
        self.n_quit
    }

    /// Proportion of the cohort meeting the quit threshold at death.
    /// Returns 0.0 for an empty summary.
    pub fn proportion_quit(&self) -> f64 {
        if self.n_individuals == 0 {
            return 0.0;
        }
        self.n_quit as f64 / self.n_individuals as f64
    }

    /// Binomial standard error of [`proportion_quit`](Self::proportion_quit).
    pub fn standard_error(&self) -> f64 {
        if self.n_individuals == 0 {
            return 0.0;
        }
        let p = self.proportion_quit();
        (p * (1.0 - p) / self.n_individuals as f64).sqrt()
    }

    /// Total discounted cost across the cohort.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Mean discounted cost per individual.
    pub fn mean_cost(&self) -> f64 {
        self.mean(self.total_cost)
    }

    /// Mean years lived after the start of the simulation.
    pub fn mean_life_years(&self) -> f64 {
        self.mean(self.total_life_years)
    }

    /// Mean number of cycles per individual.
    pub fn mean_cycles(&self) -> f64 {
        self.mean(self.total_cycles as f64)
    }

    /// Longest individual run, in cycles.
    pub fn longest_run_cycles(&self) -> u32 {
        self.longest_run_cycles
    }

    fn mean(&self, total: f64) -> f64 {
        if self.n_individuals == 0 {
            0.0
        } else {
            total / self.n_individuals as f64
        }
    }
}
