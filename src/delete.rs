//! Delete command: remove one day and reseed its successor.

use anyhow::{Context, Result};
use tracing::info;

use demeter_engine::delete_record;
use demeter_io::{Settings, read_log, write_log};
use demeter_store::LogDate;

use crate::cli::DeleteArgs;

pub fn run(args: DeleteArgs) -> Result<()> {
    let settings = Settings::load(&args.settings);
    let params = settings.params().context("invalid settings")?;

    let mut store = read_log(&settings.data_file)?;
    let date = LogDate::from(args.date);

    // Deleting an absent date is a quiet no-op, not an error.
    match delete_record(&mut store, &date, &params) {
        Some(_) => {
            info!(date = %date, rows = store.len(), "entry deleted, chain recomputed");
            write_log(&settings.data_file, &store)?;
            println!("deleted {date}");
        }
        None => println!("no entry for {date}"),
    }
    Ok(())
}
