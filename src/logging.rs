use tracing::info;
use tracing_subscriber::EnvFilter;

use cessim_cohort::CohortConfig;

/// Workspace crates whose events reach the console.
const CRATE_TARGETS: &[&str] = &["cessim", "cessim_cohort", "cessim_markov", "cessim_rates"];

/// Maps the `-v` count to a level: warn, info (-v), debug (-vv), trace (-vvv and up).
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives enabling `level` on every workspace crate and nothing
/// else, so dependency noise stays out of the output.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. Logs go to stderr so `trace` JSON on
/// stdout stays clean. `RUST_LOG`, when set, replaces the CLI level.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Records the fully resolved run configuration, after file and CLI
/// overrides, so a logged run can be reproduced.
pub fn log_run_config(config: &CohortConfig) {
    let params = config.params();
    let baseline = config.baseline();
    info!(
        seed = ?config.seed(),
        n_individuals = config.n_individuals(),
        max_cycles = config.max_cycles(),
        quit_threshold_years = config.quit_threshold_years(),
        "cohort configuration"
    );
    info!(
        cycle_length = params.cycle_length(),
        discount_rate = params.discount_rate(),
        cessation_prob = params.cessation_prob(),
        relapse_prob = params.relapse_prob(),
        abstinence_plateau = params.abstinence_plateau(),
        conversion = ?params.conversion(),
        "model parameters"
    );
    info!(
        age = baseline.age,
        male = baseline.male,
        grade = baseline.grade,
        smoker = baseline.smoker,
        "baseline covariates"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = default_directives(1);
        assert_eq!(
            directives,
            "cessim=info,cessim_cohort=info,cessim_markov=info,cessim_rates=info"
        );
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn config_logging_without_subscriber_is_harmless() {
        log_run_config(&CohortConfig::new().with_seed(3));
    }
}
