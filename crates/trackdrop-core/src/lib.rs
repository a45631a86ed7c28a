//! `Trackdrop` Core Library
//!
//! This crate provides the core functionality for the `Trackdrop` CLI:
//! - Effective-settings resolution from flags and the config dotfile
//! - User-facing feedback (info/warning lines)
//! - Host media-library playlist lookup
//!
//! # Error Handling
//!
//! Every fatal condition is a typed [`error::Error`] propagated up to the
//! CLI's single top-level handler; the library itself never terminates the
//! process.

pub mod error;
pub mod feedback;
pub mod library;
pub mod settings;

pub use error::{Error, Result};
pub use feedback::{ConsoleReporter, Reporter};
pub use library::{HostLibrary, MediaLibrary, parse_playlist_output};
pub use settings::{
    CONFIG_FILE_NAME, ConfigResolver, DL_FOLDER_KEY, Flag, PERMALINK_KEY, PLAYLIST_KEY,
    default_config_path,
};
