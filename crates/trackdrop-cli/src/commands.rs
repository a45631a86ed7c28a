//! Subcommand implementations.

use trackdrop_core::{ConfigResolver, Reporter, Result};

use crate::cli::{Cli, Commands};

/// Dispatch the parsed command line.
///
/// # Errors
///
/// Propagates every fatal resolution error to the top-level handler.
pub fn run(cli: &Cli, resolver: &mut ConfigResolver, reporter: &dyn Reporter) -> Result<()> {
    match cli.command {
        Commands::Settings => settings(resolver, reporter),
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Resolve and print the effective settings.
fn settings(resolver: &mut ConfigResolver, reporter: &dyn Reporter) -> Result<()> {
    let permalink = resolver.permalink()?;
    reporter.info("permalink", &permalink);

    let dl_folder = resolver.dl_folder()?;
    reporter.info("dl_folder", &dl_folder.display().to_string());

    if let Some(playlist) = resolver.playlist()? {
        reporter.info("playlist", &playlist);
    }

    Ok(())
}
