mod add;
mod cli;
mod delete;
mod gaps;
mod logging;
mod migrate;
mod recompute;
mod set;
mod status;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Add(args) => add::run(args),
        Command::Delete(args) => delete::run(args),
        Command::Status(args) => status::run(args),
        Command::Gaps(args) => gaps::run(args),
        Command::Recompute(args) => recompute::run(args),
        Command::Set(args) => set::run(args),
        Command::Migrate(args) => migrate::run(args),
    }
}
