//! Migrate command: one-time conversion of a log without moisture data.
//!
//! Reads an existing day log (a `Moisture` column may be present or not,
//! its values are ignored either way), runs a cold recompute from a zero
//! balance, and writes a new log with the column populated.

use anyhow::{Context, Result, bail};
use tracing::info;

use demeter_engine::recompute_all;
use demeter_io::{Settings, read_log, write_log};

use crate::cli::MigrateArgs;

pub fn run(args: MigrateArgs) -> Result<()> {
    let settings = Settings::load(&args.settings);
    let params = settings.params().context("invalid settings")?;

    if !args.input.exists() {
        bail!("input log not found: {}", args.input.display());
    }

    let mut store = read_log(&args.input)?;
    // The cold recompute overwrites every record, so whatever moisture the
    // input carried never survives.
    let rewritten = recompute_all(&mut store, &params);
    write_log(&args.output, &store)?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        rows = rewritten,
        "log migrated"
    );
    println!("{rewritten} rows migrated to {}", args.output.display());
    Ok(())
}
