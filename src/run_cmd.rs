//! Run command: simulate a cohort and report its outcomes.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cessim_cohort::run_cohort;

use crate::cli::RunArgs;
use crate::convert;
use crate::logging;
use crate::report::RunReport;

/// Run the cohort simulation.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();

    // 1. Load config and apply CLI overrides
    let mut config = convert::load_config(args.common.config.as_deref())?;
    convert::apply_overrides(&mut config, &args.common);
    if let Some(n) = args.n_individuals {
        config.cohort.n_individuals = n;
    }
    let cohort_cfg = convert::build_cohort_config(&config)?;
    logging::log_run_config(&cohort_cfg);

    // 2. Simulate
    let start = Instant::now();
    let summary = run_cohort(&cohort_cfg).context("cohort simulation failed")?;
    let runtime = start.elapsed().as_secs_f64();

    // 3. Console report
    println!(
        "Proportion quit: {:.4} (SE {:.4}, {} of {})",
        summary.proportion_quit(),
        summary.standard_error(),
        summary.n_quit(),
        summary.n_individuals()
    );
    println!(
        "Total discounted cost: {:.2} (mean {:.2} per person)",
        summary.total_cost(),
        summary.mean_cost()
    );
    println!("Runtime: {runtime:.3}s");

    // 4. Optional JSON report
    if let Some(ref path) = args.output {
        let report = RunReport::new(&cohort_cfg, &summary, runtime);
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
