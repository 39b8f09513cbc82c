//! Markyt CLI
//!
//! Command-line interface for Markyt lead personalization administration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use markyt_cli::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    markyt_cli::init_tracing(args.verbose);
    markyt_cli::run(args)?;
    Ok(())
}
