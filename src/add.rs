//! Add command: upsert one day's entry and restore the chain.

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::info;

use demeter_engine::{Dashboard, upsert_record};
use demeter_io::{Settings, read_log, write_log};
use demeter_store::{DayRecord, LogDate};

use crate::cli::AddArgs;

pub fn run(args: AddArgs) -> Result<()> {
    // 1. Load settings and derive parameters
    let settings = Settings::load(&args.settings);
    let params = settings.params().context("invalid settings")?;

    // 2. Validate the submission. The core accepts anything and degrades;
    //    the entry form does not.
    let today = Local::now().date_naive();
    if args.date > today {
        bail!("future dates are not allowed: {}", args.date);
    }
    let rain_user = args.rain.filter(|mm| *mm >= 0.0);
    let rain_official = args.official.filter(|mm| *mm >= 0.0);
    if rain_user.is_none() && rain_official.is_none() {
        bail!("enter at least one rainfall value >= 0 (--rain or --official)");
    }

    // 3. Read the day log
    let mut store = read_log(&settings.data_file)?;
    let date = LogDate::from(args.date);
    let updating = store.contains(&date);

    // 4. Upsert and recompute forward
    let record = DayRecord {
        date: date.clone(),
        rain_user,
        rain_official,
        watered: args.watered,
        notes: args.notes.unwrap_or_default(),
        moisture: 0.0,
    };
    upsert_record(&mut store, record, &params);
    info!(
        date = %date,
        updating,
        rows = store.len(),
        "entry recorded, chain recomputed"
    );

    // 5. Persist
    write_log(&settings.data_file, &store)?;

    // 6. Report the day and the current balance
    if let Some(rec) = store.get(&date) {
        let flag = if rec.watered { " (watered)" } else { "" };
        println!("{}: moisture {:.2} mm{flag}", rec.date, rec.moisture);
    }
    let dash = Dashboard::derive(&store);
    if dash.watering_needed {
        println!("balance {:.1} mm: water the lawn", dash.current_moisture);
    } else {
        println!("balance {:.1} mm: no watering needed", dash.current_moisture);
    }
    Ok(())
}
