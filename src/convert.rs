//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::CommonArgs;
use crate::config::*;

use cessim_cohort::CohortConfig;
use cessim_markov::{Covariates, ModelParams, MortalityCoefficients, StateCosts};
use cessim_rates::CycleConversion;

/// Reads and parses a TOML configuration file, or returns defaults when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<CessimConfig> {
    let Some(path) = path else {
        return Ok(CessimConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Applies command-line overrides on top of a parsed configuration.
pub fn apply_overrides(config: &mut CessimConfig, common: &CommonArgs) {
    if let Some(seed) = common.seed {
        config.seed = Some(seed);
    }
    if let Some(cl) = common.cycle_length {
        config.model.cycle_length = cl;
    }
}

/// Parses a conversion mode name into a [`CycleConversion`].
pub fn parse_conversion(s: &str) -> Result<CycleConversion> {
    match CycleConversion::from_name(s) {
        Some(c) => Ok(c),
        None => bail!("unknown cycle conversion: {s:?} (expected \"reference\" or \"exact\")"),
    }
}

/// Builds [`MortalityCoefficients`] from the TOML mortality section.
pub fn build_mortality(mortality: &MortalityToml) -> Result<MortalityCoefficients> {
    match mortality.coefficients {
        Some(ref values) => MortalityCoefficients::from_slice(values)
            .context("invalid [mortality].coefficients"),
        None => Ok(MortalityCoefficients::default()),
    }
}

/// Builds [`ModelParams`] from the TOML model, cost and mortality sections.
pub fn build_model_params(config: &CessimConfig) -> Result<ModelParams> {
    let model = &config.model;
    let conversion = parse_conversion(&model.conversion)?;
    Ok(ModelParams::new()
        .with_cycle_length(model.cycle_length)
        .with_discount_rate(model.discount_rate)
        .with_cessation_prob(model.cessation_prob)
        .with_relapse_prob(model.relapse_prob)
        .with_abstinence_plateau(model.abstinence_plateau)
        .with_conversion(conversion)
        .with_costs(StateCosts {
            current: config.costs.current,
            former: config.costs.former,
        })
        .with_mortality(build_mortality(&config.mortality)?))
}

/// Builds baseline [`Covariates`] from the TOML baseline section.
pub fn build_baseline(baseline: &BaselineToml) -> Covariates {
    Covariates {
        age: baseline.age,
        male: baseline.male,
        grade: baseline.grade,
        smoker: baseline.smoker,
    }
}

/// Builds a validated [`CohortConfig`] from the whole configuration.
///
/// The global seed, if any, is forwarded to the cohort RNG.
pub fn build_cohort_config(config: &CessimConfig) -> Result<CohortConfig> {
    let mut cfg = CohortConfig::new()
        .with_n_individuals(config.cohort.n_individuals)
        .with_max_cycles(config.cohort.max_cycles)
        .with_quit_threshold_years(config.cohort.quit_threshold_years)
        .with_baseline(build_baseline(&config.baseline))
        .with_params(build_model_params(config)?);
    if let Some(s) = config.seed {
        cfg = cfg.with_seed(s);
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}
