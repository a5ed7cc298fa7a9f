use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Demeter rainfall and watering log.
#[derive(Parser)]
#[command(
    name = "demeter",
    version,
    about = "Rainfall log with a daily soil-moisture balance"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Add or update one day's entry.
    Add(AddArgs),
    /// Delete one day's entry.
    Delete(DeleteArgs),
    /// Show the watering dashboard.
    Status(StatusArgs),
    /// List the missing days inside the recorded range.
    Gaps(GapsArgs),
    /// Recompute the whole moisture chain and save the log.
    Recompute(RecomputeArgs),
    /// Change watering settings and recompute.
    Set(SetArgs),
    /// Populate the moisture column of an existing log.
    Migrate(MigrateArgs),
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Day to record (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Rainfall from your own gauge, in millimetres.
    #[arg(short, long)]
    pub rain: Option<f64>,

    /// Rainfall from the official (bureau) source, in millimetres.
    #[arg(short, long)]
    pub official: Option<f64>,

    /// Free-text note for the day.
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Mark the day as watered.
    #[arg(short, long)]
    pub watered: bool,
}

/// Arguments for the `delete` subcommand.
#[derive(clap::Args)]
pub struct DeleteArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Day to delete (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args)]
pub struct StatusArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Override "today" for the days-since figures (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the `gaps` subcommand.
#[derive(clap::Args)]
pub struct GapsArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,
}

/// Arguments for the `recompute` subcommand.
#[derive(clap::Args)]
pub struct RecomputeArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,
}

/// Arguments for the `set` subcommand.
#[derive(clap::Args)]
pub struct SetArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// New full-moisture threshold, in millimetres.
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// New decay period, in days.
    #[arg(short, long)]
    pub period: Option<u32>,
}

/// Arguments for the `migrate` subcommand.
#[derive(clap::Args)]
pub struct MigrateArgs {
    /// Path to the JSON settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Existing log to read, with or without a Moisture column.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the converted log.
    #[arg(short, long)]
    pub output: PathBuf,
}
