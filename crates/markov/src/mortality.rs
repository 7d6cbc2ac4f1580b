//! Log-linear mortality hazard model.

use crate::error::MarkovError;
use crate::individual::Covariates;

/// Number of entries in a flat coefficient vector.
pub const N_COEFFICIENTS: usize = 9;

/// Regression coefficients of the annual mortality model.
///
/// The annual death probability is
/// `intercept * exp(sum(coef_i * indicator_i))`, where every coefficient
/// except the intercept is a log hazard ratio. Age bands and grade bands are
/// each mutually exclusive, so at most one coefficient per group applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortalityCoefficients {
    /// Baseline annual probability (female, age < 60, grade 0, non-smoker).
    pub intercept: f64,
    /// Male sex.
    pub male: f64,
    /// Age in `[60, 70)`.
    pub age_60_69: f64,
    /// Age in `[70, 80)`.
    pub age_70_79: f64,
    /// Age `>= 80`.
    pub age_80_plus: f64,
    /// Severity grade 1.
    pub grade_1: f64,
    /// Severity grade 2.
    pub grade_2: f64,
    /// Severity grade 3 or higher.
    pub grade_3_plus: f64,
    /// Current smoker.
    pub smoker: f64,
}

impl MortalityCoefficients {
    /// Builds coefficients from a flat vector in the order
    /// `[intercept, male, age 60-69, age 70-79, age 80+, grade 1, grade 2, grade 3+, smoker]`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::CoefficientLength`] unless exactly
    /// [`N_COEFFICIENTS`] values are supplied.
    pub fn from_slice(values: &[f64]) -> Result<Self, MarkovError> {
        let &[
            intercept,
            male,
            age_60_69,
            age_70_79,
            age_80_plus,
            grade_1,
            grade_2,
            grade_3_plus,
            smoker,
        ] = values
        else {
            return Err(MarkovError::CoefficientLength {
                expected: N_COEFFICIENTS,
                got: values.len(),
            });
        };
        Ok(Self {
            intercept,
            male,
            age_60_69,
            age_70_79,
            age_80_plus,
            grade_1,
            grade_2,
            grade_3_plus,
            smoker,
        })
    }

    /// Returns the coefficients as a flat vector (same order as [`from_slice`](Self::from_slice)).
    pub fn to_array(&self) -> [f64; N_COEFFICIENTS] {
        [
            self.intercept,
            self.male,
            self.age_60_69,
            self.age_70_79,
            self.age_80_plus,
            self.grade_1,
            self.grade_2,
            self.grade_3_plus,
            self.smoker,
        ]
    }

    /// Annual probability of death for the given covariates.
    ///
    /// Not clamped: large hazard ratios can push the value above one. The
    /// rate conversions downstream clamp it.
    pub fn annual_death_probability(&self, cov: &Covariates) -> f64 {
        let ind = |b: bool| if b { 1.0 } else { 0.0 };
        let age = cov.age;
        let linear = self.male * ind(cov.male)
            + self.age_60_69 * ind((60.0..70.0).contains(&age))
            + self.age_70_79 * ind((70.0..80.0).contains(&age))
            + self.age_80_plus * ind(age >= 80.0)
            + self.grade_1 * ind(cov.grade == 1)
            + self.grade_2 * ind(cov.grade == 2)
            + self.grade_3_plus * ind(cov.grade >= 3)
            + self.smoker * ind(cov.smoker);
        self.intercept * linear.exp()
    }

    /// Checks that every coefficient is finite and the intercept is positive.
    ///
    /// A zero intercept gives zero hazard in every live state, so nobody
    /// would ever reach `Dead`.
    pub fn validate(&self) -> Result<(), MarkovError> {
        if let Some(i) = self.to_array().iter().position(|c| !c.is_finite()) {
            return Err(MarkovError::InvalidParameter {
                name: "mortality",
                reason: format!("coefficient {i} is not finite"),
            });
        }
        if self.intercept <= 0.0 {
            return Err(MarkovError::InvalidParameter {
                name: "mortality",
                reason: format!("intercept must be positive, got {}", self.intercept),
            });
        }
        Ok(())
    }
}

impl Default for MortalityCoefficients {
    /// COPD mortality model: intercept 0.006 with hazard ratios 1.3 (male),
    /// 2.0 / 4.5 / 11.6 (age bands), 0.9 / 1.4 / 2.6 (grades) and 1.5 (smoker).
    fn default() -> Self {
        Self {
            intercept: 0.0060,
            male: 1.3_f64.ln(),
            age_60_69: 2.0_f64.ln(),
            age_70_79: 4.5_f64.ln(),
            age_80_plus: 11.6_f64.ln(),
            grade_1: 0.9_f64.ln(),
            grade_2: 1.4_f64.ln(),
            grade_3_plus: 2.6_f64.ln(),
            smoker: 1.5_f64.ln(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cov(age: f64, male: bool, grade: u8, smoker: bool) -> Covariates {
        Covariates {
            age,
            male,
            grade,
            smoker,
        }
    }

    #[test]
    fn baseline_cohort_hazard() {
        let m = MortalityCoefficients::default();
        let p = m.annual_death_probability(&cov(50.0, true, 2, true));
        assert_relative_eq!(p, 0.006 * 1.3 * 1.4 * 1.5, epsilon = 1e-12);
    }

    #[test]
    fn reference_group_is_intercept() {
        let m = MortalityCoefficients::default();
        let p = m.annual_death_probability(&cov(45.0, false, 0, false));
        assert_relative_eq!(p, 0.006, epsilon = 1e-15);
    }

    #[test]
    fn age_band_boundaries() {
        let m = MortalityCoefficients::default();
        let at = |age| m.annual_death_probability(&cov(age, false, 0, false));
        assert_relative_eq!(at(59.99), 0.006, epsilon = 1e-12);
        assert_relative_eq!(at(60.0), 0.006 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(at(70.0), 0.006 * 4.5, epsilon = 1e-12);
        assert_relative_eq!(at(79.99), 0.006 * 4.5, epsilon = 1e-12);
        assert_relative_eq!(at(80.0), 0.006 * 11.6, epsilon = 1e-12);
        assert_relative_eq!(at(95.0), 0.006 * 11.6, epsilon = 1e-12);
    }

    #[test]
    fn grade_bands() {
        let m = MortalityCoefficients::default();
        let at = |grade| m.annual_death_probability(&cov(50.0, false, grade, false));
        assert_relative_eq!(at(1), 0.006 * 0.9, epsilon = 1e-12);
        assert_relative_eq!(at(3), 0.006 * 2.6, epsilon = 1e-12);
        assert_relative_eq!(at(4), 0.006 * 2.6, epsilon = 1e-12);
    }

    #[test]
    fn from_slice_round_trip() {
        let m = MortalityCoefficients::default();
        let back = MortalityCoefficients::from_slice(&m.to_array()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn from_slice_wrong_length() {
        let result = MortalityCoefficients::from_slice(&[0.006, 0.1, 0.2]);
        assert!(matches!(
            result,
            Err(MarkovError::CoefficientLength {
                expected: 9,
                got: 3
            })
        ));
    }

    #[test]
    fn validate_rejects_non_finite() {
        let m = MortalityCoefficients {
            smoker: f64::NAN,
            ..MortalityCoefficients::default()
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_intercept() {
        let m = MortalityCoefficients {
            intercept: -0.01,
            ..MortalityCoefficients::default()
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_intercept() {
        let m = MortalityCoefficients {
            intercept: 0.0,
            ..MortalityCoefficients::default()
        };
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("intercept must be positive"));
    }
}
