//! Error types for the cessim-markov crate.

/// Error type for all fallible operations in the cessim-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a categorical distribution cannot be sampled.
    #[error("invalid distribution: {reason}")]
    InvalidDistribution {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a model parameter is out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a mortality coefficient vector has the wrong length.
    #[error("mortality coefficient vector has {got} entries, expected {expected}")]
    CoefficientLength {
        /// Required number of coefficients.
        expected: usize,
        /// Number provided.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_distribution() {
        let e = MarkovError::InvalidDistribution {
            reason: "weights sum to 0".to_string(),
        };
        assert_eq!(e.to_string(), "invalid distribution: weights sum to 0");
    }

    #[test]
    fn error_invalid_parameter() {
        let e = MarkovError::InvalidParameter {
            name: "cycle_length",
            reason: "must be finite and positive, got 0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid parameter cycle_length: must be finite and positive, got 0"
        );
    }

    #[test]
    fn error_coefficient_length() {
        let e = MarkovError::CoefficientLength {
            expected: 9,
            got: 7,
        };
        assert_eq!(
            e.to_string(),
            "mortality coefficient vector has 7 entries, expected 9"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MarkovError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MarkovError>();
    }
}
