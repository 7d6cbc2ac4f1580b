//! Three-state Markov model of smoking status and mortality.
//!
//! Individuals move between `Current`, `Former` and the absorbing `Dead`
//! state once per cycle. Transition probabilities depend on the individual's
//! covariates and abstinence duration and are recomputed every cycle.
//!
//! # Cycle
//!
//! ```text
//!  ┌───────────────┐    ┌──────────────────┐    ┌──────────┐    ┌──────────────┐
//!  │ advance clock │───▶│  process_events  │───▶│  sample  │───▶│ cycle_cost   │
//!  │ (age, years)  │    │ (abstinence)     │    │ (next)   │    │ (discounted) │
//!  └───────────────┘    └──────────────────┘    └──────────┘    └──────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use cessim_markov::{Covariates, Individual, ModelParams};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let params = ModelParams::new();
//! let mut person = Individual::new(0, Covariates::default());
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let mut cost = 0.0;
//! while person.is_alive() {
//!     cost += person.step(&params, &mut rng).unwrap();
//! }
//! assert!(cost > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod individual;
pub mod mortality;
pub mod state;
pub mod transition;

pub use config::{ModelParams, StateCosts};
pub use error::MarkovError;
pub use individual::{Covariates, Individual};
pub use mortality::{MortalityCoefficients, N_COEFFICIENTS};
pub use state::HealthState;
pub use transition::{SUM_TOLERANCE, TransitionProbs, death_probability};
