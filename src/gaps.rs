//! Gaps command: list the missing days.

use anyhow::Result;

use demeter_io::{Settings, read_log};
use demeter_store::missing_dates;

use crate::cli::GapsArgs;

pub fn run(args: GapsArgs) -> Result<()> {
    let settings = Settings::load(&args.settings);
    let store = read_log(&settings.data_file)?;

    let missing = missing_dates(&store);
    if missing.is_empty() {
        println!("no missing days");
        return Ok(());
    }
    for day in missing {
        println!("{day}");
    }
    Ok(())
}
