//! Set command: change watering settings and propagate them.
//!
//! A new threshold or period changes the daily decay for every day, so
//! every stored moisture value is recomputed from the beginning before the
//! log is saved.

use anyhow::{Context, Result, bail};
use tracing::info;

use demeter_engine::recompute_all;
use demeter_io::{Settings, read_log, write_log};

use crate::cli::SetArgs;

pub fn run(args: SetArgs) -> Result<()> {
    if args.threshold.is_none() && args.period.is_none() {
        bail!("nothing to change: pass --threshold and/or --period");
    }

    // 1. Overlay the requested changes and validate before saving
    let mut settings = Settings::load(&args.settings);
    if let Some(threshold) = args.threshold {
        settings.threshold_mm = threshold;
    }
    if let Some(period) = args.period {
        settings.period_days = period;
    }
    let params = settings.params().context("rejected settings")?;
    settings.save(&args.settings)?;

    // 2. Every stored moisture value is now stale; recompute from the start
    let mut store = read_log(&settings.data_file)?;
    let rewritten = recompute_all(&mut store, &params);
    write_log(&settings.data_file, &store)?;

    info!(
        threshold_mm = settings.threshold_mm,
        period_days = settings.period_days,
        rows = rewritten,
        "settings changed, chain recomputed"
    );
    println!(
        "threshold {} mm, period {} days; {rewritten} records recomputed",
        settings.threshold_mm, settings.period_days
    );
    Ok(())
}
