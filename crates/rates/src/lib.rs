//! Probability, rate and discounting conversions for cycle-based models.
//!
//! Every function here is pure. Inputs outside their mathematical domain are
//! clamped rather than rejected, so a logarithm never sees a probability
//! above one and an exponential never sees a negative rate.

/// Clamps a value into the closed unit interval. `NaN` maps to 0.0.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Converts the probability of an event over horizon `t` into a constant rate.
///
/// `rate = -ln(1 - p) / t`, with `p` clamped into `[0, 1]` first. A
/// probability of exactly 1 yields `f64::INFINITY`.
pub fn prob_to_rate(p: f64, t: f64) -> f64 {
    -(1.0 - clamp_probability(p)).ln() / t
}

/// Converts a constant rate into the probability of at least one event over
/// horizon `t`: `1 - exp(-r * t)`. Negative rates are treated as zero.
pub fn rate_to_prob(r: f64, t: f64) -> f64 {
    let r = if r.is_nan() { 0.0 } else { r.max(0.0) };
    1.0 - (-r * t).exp()
}

/// Rescales an annual probability to a cycle of `cycle_length` years.
///
/// The value is produced by the compound conversion
/// probability -> rate -> (scaled) probability -> rate, so the result is a
/// rate. Callers that need a probability use [`CycleConversion`].
pub fn prob_to_cycle_length(p: f64, cycle_length: f64) -> f64 {
    prob_to_rate(rate_to_prob(prob_to_rate(p, 1.0) * cycle_length, 1.0), 1.0)
}

/// Discount factor `1 / (1 + dr)^t` for a cost incurred `t` years from now.
pub fn discount_factor(dr: f64, t_elapsed: f64) -> f64 {
    1.0 / (1.0 + dr).powf(t_elapsed)
}

/// How the result of [`prob_to_cycle_length`] is turned into a sampling weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CycleConversion {
    /// Use the compound value directly as the per-cycle probability, clamped
    /// into `[0, 1]`. Matches the published reference outputs.
    #[default]
    Reference,
    /// Apply [`rate_to_prob`] to the compound value, giving the exact
    /// per-cycle probability `1 - (1 - p)^cycle_length`.
    Exact,
}

impl CycleConversion {
    /// Converts an annual probability into the probability used for sampling
    /// over one cycle of `cycle_length` years. Always in `[0, 1]`.
    pub fn cycle_probability(self, annual: f64, cycle_length: f64) -> f64 {
        let compound = prob_to_cycle_length(annual, cycle_length);
        match self {
            Self::Reference => clamp_probability(compound),
            Self::Exact => clamp_probability(rate_to_prob(compound, 1.0)),
        }
    }

    /// Parses a conversion name (`"reference"` or `"exact"`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "reference" => Some(Self::Reference),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }
}
