//! Recompute command: restore the whole chain under current settings.

use anyhow::{Context, Result};
use tracing::info;

use demeter_engine::recompute_all;
use demeter_io::{Settings, read_log, write_log};

use crate::cli::RecomputeArgs;

pub fn run(args: RecomputeArgs) -> Result<()> {
    let settings = Settings::load(&args.settings);
    let params = settings.params().context("invalid settings")?;

    let mut store = read_log(&settings.data_file)?;
    let rewritten = recompute_all(&mut store, &params);
    write_log(&settings.data_file, &store)?;

    info!(rows = rewritten, "full recompute complete");
    println!("{rewritten} records recomputed");
    Ok(())
}
