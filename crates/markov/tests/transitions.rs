use approx::assert_relative_eq;
use cessim_markov::{
    Covariates, HealthState, Individual, MarkovError, ModelParams, MortalityCoefficients,
    TransitionProbs,
};
use cessim_rates::{CycleConversion, discount_factor};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Every combination of the covariates the mortality model distinguishes.
fn covariate_grid() -> Vec<Covariates> {
    let mut out = Vec::new();
    for &age in &[18.0, 59.9, 60.0, 65.0, 70.0, 75.0, 80.0, 104.0] {
        for &male in &[false, true] {
            for grade in 0..=4u8 {
                for &smoker in &[false, true] {
                    out.push(Covariates {
                        age,
                        male,
                        grade,
                        smoker,
                    });
                }
            }
        }
    }
    out
}

fn force(state: HealthState) -> impl FnOnce(&TransitionProbs) -> Result<HealthState, MarkovError> {
    move |_| Ok(state)
}

// ---------------------------------------------------------------------------
// 1. probabilities_are_valid_for_all_covariates
// ---------------------------------------------------------------------------
#[test]
fn probabilities_are_valid_for_all_covariates() {
    let settings = [
        ModelParams::new(),
        ModelParams::new().with_conversion(CycleConversion::Exact),
        ModelParams::new().with_cycle_length(1.0),
        // Hazard high enough to push annual mortality above one for the oldest groups.
        ModelParams::new().with_mortality(MortalityCoefficients {
            intercept: 0.2,
            ..MortalityCoefficients::default()
        }),
    ];
    for params in &settings {
        for cov in covariate_grid() {
            for &abstinence in &[0.0, 2.5, 4.99, 5.0, 12.0] {
                let mut ind = Individual::new(0, cov);
                ind.extend_abstinence(abstinence);
                for state in HealthState::ALL {
                    let probs = state.transition_probs(&ind, params);
                    probs
                        .validate()
                        .unwrap_or_else(|e| panic!("{state} {cov:?} abst={abstinence}: {e}"));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. death_probability_is_never_zero_outside_dead
// ---------------------------------------------------------------------------
#[test]
fn death_probability_is_never_zero_outside_dead() {
    let params = ModelParams::new();
    for cov in covariate_grid() {
        let ind = Individual::new(0, cov);
        for state in [HealthState::Current, HealthState::Former] {
            assert!(state.transition_probs(&ind, &params).to_dead() > 0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. dead_ignores_covariates
// ---------------------------------------------------------------------------
#[test]
fn dead_ignores_covariates() {
    let params = ModelParams::new();
    for cov in covariate_grid() {
        let ind = Individual::new(0, cov);
        let probs = HealthState::Dead.transition_probs(&ind, &params);
        assert_eq!(probs, TransitionProbs::ABSORBED);
    }
}

// ---------------------------------------------------------------------------
// 4. abstinence_accumulates_and_resets
// ---------------------------------------------------------------------------
#[test]
fn abstinence_accumulates_and_resets() {
    let params = ModelParams::new();
    let cl = params.cycle_length();
    let mut ind = Individual::new(0, Covariates::default());

    // Cycle 1 in Current: reset, then quit.
    ind.step_with(&params, force(HealthState::Former)).unwrap();
    assert_eq!(ind.abstinence_years(), 0.0);

    // Three cycles spent in Former: one cycle length each.
    for k in 1..=3 {
        ind.step_with(&params, force(HealthState::Former)).unwrap();
        assert_relative_eq!(ind.abstinence_years(), k as f64 * cl, epsilon = 1e-12);
    }

    // Relapse: the Former cycle still counts, the next Current cycle resets.
    ind.step_with(&params, force(HealthState::Current)).unwrap();
    assert_relative_eq!(ind.abstinence_years(), 4.0 * cl, epsilon = 1e-12);
    ind.step_with(&params, force(HealthState::Current)).unwrap();
    assert_eq!(ind.abstinence_years(), 0.0);
}

// ---------------------------------------------------------------------------
// 5. one_cycle_in_former_then_death_cost
// ---------------------------------------------------------------------------
#[test]
fn one_cycle_in_former_then_death_cost() {
    let params = ModelParams::new();
    let cl = params.cycle_length();
    let mut ind = Individual::new(0, Covariates::default());

    let mut total = 0.0;
    total += ind.step_with(&params, force(HealthState::Former)).unwrap();
    total += ind.step_with(&params, force(HealthState::Dead)).unwrap();

    let expected = 5000.0 * cl * discount_factor(0.015, cl);
    assert_relative_eq!(total, expected, epsilon = 1e-9);
    assert!(!ind.is_alive());
}

// ---------------------------------------------------------------------------
// 6. same_seed_same_trajectory
// ---------------------------------------------------------------------------
#[test]
fn same_seed_same_trajectory() {
    let params = ModelParams::new();
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ind = Individual::new(0, Covariates::default());
        let mut path = Vec::new();
        while ind.is_alive() {
            ind.step(&params, &mut rng).unwrap();
            path.push(ind.state());
        }
        path
    };
    assert_eq!(run(2024), run(2024), "same seed must produce identical paths");
}

// ---------------------------------------------------------------------------
// 7. individual_reaches_dead
// ---------------------------------------------------------------------------
#[test]
fn individual_reaches_dead() {
    let params = ModelParams::new();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ind = Individual::new(seed, Covariates::default());
        while ind.is_alive() {
            ind.step(&params, &mut rng).unwrap();
            assert!(ind.cycles() <= 2000, "seed {seed} did not terminate");
        }
        assert_eq!(ind.state(), HealthState::Dead);
    }
}
