//! Status command: the watering dashboard.

use anyhow::Result;
use chrono::Local;

use demeter_engine::{Dashboard, days_since};
use demeter_io::{Settings, read_log};
use demeter_store::missing_dates;

use crate::cli::StatusArgs;

pub fn run(args: StatusArgs) -> Result<()> {
    let settings = Settings::load(&args.settings);
    let store = read_log(&settings.data_file)?;

    let dash = Dashboard::derive(&store);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!(
        "Moisture balance: {:.1} mm (threshold {} mm, period {} days)",
        dash.current_moisture, settings.threshold_mm, settings.period_days
    );
    if dash.watering_needed {
        println!("Watering needed:  YES, water the lawn");
    } else {
        println!("Watering needed:  no");
    }

    match dash.last_watered {
        Some(day) => println!(
            "Last watered:     {} ({} days ago)",
            day,
            days_since(day, today)
        ),
        None => println!("Last watered:     never"),
    }
    match dash.last_rain {
        Some(day) => println!(
            "Last rain:        {} ({} days ago)",
            day,
            days_since(day, today)
        ),
        None => println!("Last rain:        never"),
    }

    let missing = missing_dates(&store);
    if missing.is_empty() {
        println!("Missing days:     none");
    } else {
        println!("Missing days:     {} (see `demeter gaps`)", missing.len());
    }
    Ok(())
}
