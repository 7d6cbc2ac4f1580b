//! Cohort driver for the cessation model.
//!
//! Each individual starts from the same baseline covariates and is stepped
//! one cycle at a time until absorbed into `Dead`. Outcomes are folded into
//! an explicit [`CohortAccumulator`]; no state is shared between individuals
//! apart from the RNG stream.
//!
//! # Quick start
//!
//! ```rust
//! use cessim_cohort::{CohortConfig, run_cohort};
//!
//! let config = CohortConfig::new().with_n_individuals(100).with_seed(42);
//! let summary = run_cohort(&config).unwrap();
//!
//! assert_eq!(summary.n_individuals(), 100);
//! assert!((0.0..=1.0).contains(&summary.proportion_quit()));
//! ```

pub mod config;
pub mod error;
pub mod simulate;
pub mod summary;

pub use config::CohortConfig;
pub use error::CohortError;
pub use simulate::{
    CycleRecord, Trajectory, run_cohort, simulate_cohort, simulate_individual, trace_individual,
};
pub use summary::{CohortAccumulator, CohortSummary, IndividualOutcome};
