use approx::assert_abs_diff_eq;
use cessim_rates::{CycleConversion, prob_to_cycle_length, prob_to_rate, rate_to_prob};

#[test]
fn rate_round_trip_recovers_probability() {
    let horizons = [0.25, 1.0, 1.0 / 12.0, 5.0];
    for i in 0..100 {
        let p = i as f64 / 100.0;
        for &t in &horizons {
            assert_abs_diff_eq!(rate_to_prob(prob_to_rate(p, t), t), p, epsilon = 1e-12);
        }
    }
}

#[test]
fn rate_to_prob_is_monotonic_and_bounded() {
    let mut prev = 0.0;
    for i in 1..200 {
        let r = i as f64 * 0.05;
        let p = rate_to_prob(r, 1.0);
        assert!(p > prev, "rate_to_prob must increase with r");
        assert!(p < 1.0);
        prev = p;
    }
}

#[test]
fn twelve_monthly_cycles_compose_to_annual() {
    // Surviving twelve exact monthly cycles must match the annual survival.
    let annual = 0.06;
    let monthly = CycleConversion::Exact.cycle_probability(annual, 1.0 / 12.0);
    let survival = (1.0 - monthly).powi(12);
    assert_abs_diff_eq!(1.0 - survival, annual, epsilon = 1e-12);
}

#[test]
fn reference_conversion_exceeds_exact_for_small_cycles() {
    // The compound conversion yields a rate, which is always >= the matching probability.
    for &annual in &[0.01, 0.06, 0.42, 0.9] {
        let reference = CycleConversion::Reference.cycle_probability(annual, 1.0 / 12.0);
        let exact = CycleConversion::Exact.cycle_probability(annual, 1.0 / 12.0);
        assert!(reference >= exact, "annual={annual}");
        assert_eq!(reference, prob_to_cycle_length(annual, 1.0 / 12.0));
    }
}
