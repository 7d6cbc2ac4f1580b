use serde::Deserialize;

/// Top-level cessim configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CessimConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Cohort settings.
    #[serde(default)]
    pub cohort: CohortToml,

    /// Transition model settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Annual state costs.
    #[serde(default)]
    pub costs: CostsToml,

    /// Mortality regression coefficients.
    #[serde(default)]
    pub mortality: MortalityToml,

    /// Baseline covariates shared by every individual.
    #[serde(default)]
    pub baseline: BaselineToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CohortToml {
    #[serde(default = "default_n_individuals")]
    pub n_individuals: usize,
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
    #[serde(default = "default_quit_threshold_years")]
    pub quit_threshold_years: f64,
}

impl Default for CohortToml {
    fn default() -> Self {
        Self {
            n_individuals: default_n_individuals(),
            max_cycles: default_max_cycles(),
            quit_threshold_years: default_quit_threshold_years(),
        }
    }
}

fn default_n_individuals() -> usize {
    1000
}
fn default_max_cycles() -> u32 {
    6000
}
fn default_quit_threshold_years() -> f64 {
    5.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_cycle_length")]
    pub cycle_length: f64,
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    #[serde(default = "default_cessation_prob")]
    pub cessation_prob: f64,
    #[serde(default = "default_relapse_prob")]
    pub relapse_prob: f64,
    #[serde(default = "default_abstinence_plateau")]
    pub abstinence_plateau: f64,
    #[serde(default = "default_conversion")]
    pub conversion: String,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            cycle_length: default_cycle_length(),
            discount_rate: default_discount_rate(),
            cessation_prob: default_cessation_prob(),
            relapse_prob: default_relapse_prob(),
            abstinence_plateau: default_abstinence_plateau(),
            conversion: default_conversion(),
        }
    }
}

fn default_cycle_length() -> f64 {
    1.0 / 12.0
}
fn default_discount_rate() -> f64 {
    0.015
}
fn default_cessation_prob() -> f64 {
    0.06
}
fn default_relapse_prob() -> f64 {
    0.42
}
fn default_abstinence_plateau() -> f64 {
    5.0
}
fn default_conversion() -> String {
    "reference".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostsToml {
    #[serde(default = "default_current_cost")]
    pub current: f64,
    #[serde(default = "default_former_cost")]
    pub former: f64,
}

impl Default for CostsToml {
    fn default() -> Self {
        Self {
            current: default_current_cost(),
            former: default_former_cost(),
        }
    }
}

fn default_current_cost() -> f64 {
    2000.0
}
fn default_former_cost() -> f64 {
    5000.0
}

/// Flat coefficient vector: intercept followed by eight log hazard ratios.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MortalityToml {
    #[serde(default)]
    pub coefficients: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineToml {
    #[serde(default = "default_age")]
    pub age: f64,
    #[serde(default = "default_true")]
    pub male: bool,
    #[serde(default = "default_grade")]
    pub grade: u8,
    #[serde(default = "default_true")]
    pub smoker: bool,
}

impl Default for BaselineToml {
    fn default() -> Self {
        Self {
            age: default_age(),
            male: true,
            grade: default_grade(),
            smoker: true,
        }
    }
}

fn default_age() -> f64 {
    50.0
}
fn default_true() -> bool {
    true
}
fn default_grade() -> u8 {
    2
}
