//! Error types for the cessim-cohort crate.

use cessim_markov::MarkovError;

/// Error type for all fallible operations in the cessim-cohort crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CohortError {
    /// Model error raised while stepping an individual.
    #[error(transparent)]
    Markov(#[from] MarkovError),

    /// Returned when the cohort has no members.
    #[error("cohort must contain at least one individual")]
    EmptyCohort,

    /// Returned when a cohort setting is out of range.
    #[error("invalid cohort setting {name}: {reason}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an individual is still alive after the cycle limit.
    #[error("individual {id} still alive after {max_cycles} cycles")]
    CycleLimitExceeded {
        /// Individual identifier.
        id: u64,
        /// Configured cycle limit.
        max_cycles: u32,
    },
}
