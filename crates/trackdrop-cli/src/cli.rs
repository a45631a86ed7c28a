//! Command-line surface and flag binding.

use clap::{Parser, Subcommand};
use trackdrop_core::{ConfigResolver, DL_FOLDER_KEY, Flag, PERMALINK_KEY, PLAYLIST_KEY};

/// Trackdrop command line.
#[derive(Debug, Parser)]
#[command(name = "trackdrop")]
#[command(about = "Fetch tracks and file them into your media library")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Permalink of the user whose tracks are fetched.
    #[arg(short, long, global = true)]
    pub permalink: Option<String>,

    /// Folder tracks are downloaded to.
    #[arg(short, long, global = true)]
    pub dl_folder: Option<String>,

    /// Media-library playlist downloaded tracks are added to.
    #[arg(short = 'l', long, global = true)]
    pub playlist: Option<String>,
}

/// Trackdrop subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the effective settings after flag and config-file resolution.
    Settings,
    /// Print trackdrop's version.
    #[command(alias = "v")]
    Version,
}

/// Register every global flag with the resolver.
///
/// An argument is `Some` exactly when the user passed it, which is the
/// "explicitly set this run" bit the resolver's precedence rule needs.
pub fn bind_flags(resolver: &mut ConfigResolver, cli: &Cli) {
    bind(resolver, PERMALINK_KEY, cli.permalink.as_deref());
    bind(resolver, DL_FOLDER_KEY, cli.dl_folder.as_deref());
    bind(resolver, PLAYLIST_KEY, cli.playlist.as_deref());
}

fn bind(resolver: &mut ConfigResolver, key: &str, arg: Option<&str>) {
    resolver.bind_flag(key, Flag::new(arg.unwrap_or_default(), arg.is_some()));
}
