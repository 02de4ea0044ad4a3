//! `tasksheet` -- markdown task list to XLSX converter.
//!
//! Parses arguments with clap, sets up logging and runs the
//! read -> extract -> write pipeline once.

mod cli;
mod pipeline;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("tasksheet=debug,tasksheet_io_md=debug,tasksheet_io_xlsx=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    pipeline::run(&cli.input, &cli.output, &mut stdout)?;
    Ok(())
}
