// SPDX-License-Identifier: MIT OR Apache-2.0

//! `samplify` - generate a sample configuration file from an existing one.

use clap::Parser;
use samplify::adapters::cli::{run, CliArgs};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    println!("{}", args.banner());

    match run(&args) {
        Ok(report) => {
            tracing::info!(
                "{} sections, {} keys written to {}",
                report.sections,
                report.keys,
                report.destination.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
