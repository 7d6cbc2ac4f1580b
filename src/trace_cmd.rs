//! Trace command: follow one individual cycle by cycle.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use cessim_cohort::trace_individual;

use crate::cli::TraceArgs;
use crate::convert;
use crate::logging;
use crate::report::TraceReport;

/// Run the single-individual trace.
pub fn run(args: TraceArgs) -> Result<()> {
    let _cmd = info_span!("trace").entered();

    let mut config = convert::load_config(args.common.config.as_deref())?;
    convert::apply_overrides(&mut config, &args.common);
    let cohort_cfg = convert::build_cohort_config(&config)?;
    logging::log_run_config(&cohort_cfg);

    let mut rng = match cohort_cfg.seed() {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let trajectory =
        trace_individual(args.id, &cohort_cfg, &mut rng).context("trace simulation failed")?;
    info!(
        id = args.id,
        cycles = trajectory.records().len(),
        quit = trajectory.outcome().quit,
        "trajectory complete"
    );

    let report = TraceReport::new(cohort_cfg.seed(), &trajectory);
    let json = serde_json::to_string_pretty(&report).context("failed to serialize trajectory")?;
    match args.output {
        Some(ref path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write trajectory: {}", path.display()))?;
            info!(path = %path.display(), "trajectory written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
