//! Trackdrop - CLI for fetching tracks into your media library.
//!
//! This is the main entry point: it parses arguments, wires the settings
//! resolver to the console reporter and the host media library, and is the
//! single place a fatal error terminates the process.

mod cli;
mod commands;

use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use trackdrop_core::{ConfigResolver, ConsoleReporter, HostLibrary};

fn main() {
    // Diagnostics go through tracing; user-facing output goes through the
    // reporter. RUST_LOG controls the former only.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    debug!("Parsed command line: {cli:?}");

    let mut resolver = ConfigResolver::new(Box::new(ConsoleReporter), Box::new(HostLibrary));
    cli::bind_flags(&mut resolver, &cli);

    if let Err(e) = commands::run(&cli, &mut resolver, &ConsoleReporter) {
        eprintln!("{} {e}", "Fatal:".red().bold());
        process::exit(1);
    }
}
