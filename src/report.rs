//! JSON report structures for command output.

use serde::Serialize;

use cessim_cohort::{CohortConfig, CohortSummary, CycleRecord, Trajectory};

/// Summary of a cohort run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub seed: Option<u64>,
    pub n_individuals: usize,
    pub cycle_length: f64,
    pub discount_rate: f64,
    pub n_quit: usize,
    pub proportion_quit: f64,
    pub standard_error: f64,
    pub total_discounted_cost: f64,
    pub mean_discounted_cost: f64,
    pub mean_life_years: f64,
    pub longest_run_cycles: u32,
    pub runtime_secs: f64,
}

impl RunReport {
    pub fn new(config: &CohortConfig, summary: &CohortSummary, runtime_secs: f64) -> Self {
        Self {
            seed: config.seed(),
            n_individuals: summary.n_individuals(),
            cycle_length: config.params().cycle_length(),
            discount_rate: config.params().discount_rate(),
            n_quit: summary.n_quit(),
            proportion_quit: summary.proportion_quit(),
            standard_error: summary.standard_error(),
            total_discounted_cost: summary.total_cost(),
            mean_discounted_cost: summary.mean_cost(),
            mean_life_years: summary.mean_life_years(),
            longest_run_cycles: summary.longest_run_cycles(),
            runtime_secs,
        }
    }
}

/// One row of a traced trajectory.
#[derive(Debug, Serialize)]
pub struct CycleRow {
    pub cycle: u32,
    pub age: f64,
    pub state: &'static str,
    pub abstinence_years: f64,
    pub cost: f64,
}

impl From<&CycleRecord> for CycleRow {
    fn from(r: &CycleRecord) -> Self {
        Self {
            cycle: r.cycle,
            age: r.age,
            state: r.state.label(),
            abstinence_years: r.abstinence_years,
            cost: r.cost,
        }
    }
}

/// A single individual's trajectory.
#[derive(Debug, Serialize)]
pub struct TraceReport {
    pub id: u64,
    pub seed: Option<u64>,
    pub quit: bool,
    pub life_years: f64,
    pub abstinence_years: f64,
    pub discounted_cost: f64,
    pub cycles: Vec<CycleRow>,
}

impl TraceReport {
    pub fn new(seed: Option<u64>, trajectory: &Trajectory) -> Self {
        let outcome = trajectory.outcome();
        Self {
            id: outcome.id,
            seed,
            quit: outcome.quit,
            life_years: outcome.life_years,
            abstinence_years: outcome.abstinence_years,
            discounted_cost: outcome.discounted_cost,
            cycles: trajectory.records().iter().map(CycleRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn run_report_serializes() {
        let config = CohortConfig::new().with_n_individuals(20).with_seed(1);
        let summary = cessim_cohort::run_cohort(&config).unwrap();
        let report = RunReport::new(&config, &summary, 0.5);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["n_individuals"], 20);
        assert_eq!(parsed["seed"], 1);
        assert!(parsed["proportion_quit"].is_number());
        // The observed longest run must not be confused with the configured limit.
        assert_eq!(parsed["longest_run_cycles"], summary.longest_run_cycles());
        assert!(parsed.get("max_cycles").is_none());
    }

    #[test]
    fn trace_report_lists_every_cycle() {
        let config = CohortConfig::new();
        let mut rng = StdRng::seed_from_u64(2);
        let traj = cessim_cohort::trace_individual(4, &config, &mut rng).unwrap();
        let report = TraceReport::new(Some(2), &traj);
        assert_eq!(report.id, 4);
        assert_eq!(report.cycles.len(), traj.records().len());
        assert_eq!(report.cycles.last().map(|c| c.state), Some("Dead"));
    }
}
