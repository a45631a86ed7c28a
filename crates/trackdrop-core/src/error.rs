//! Error types for Trackdrop core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving settings.
///
/// Every variant is fatal once it reaches the top level: the message is
/// printed and the process exits non-zero. Recoverable conditions (missing
/// file, missing optional setting) never surface here; they are reported as
/// warnings and resolution continues with a default.
#[derive(Debug, Error)]
pub enum Error {
    /// The config file exists but could not be read.
    #[error("Couldn't read the config file at {path}: {reason}")]
    ConfigUnreadable {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying read failure.
        reason: String,
    },

    /// The config file content is not a flat string-to-string mapping.
    #[error("Couldn't parse the config file at {path}: {reason}")]
    ConfigMalformed {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse failure.
        reason: String,
    },

    /// A required setting resolved to nothing.
    #[error("You didn't set a {key}. Use the '{flag}' flag or set '{key}' in your config file.")]
    MissingSetting {
        /// Config key of the missing setting.
        key: String,
        /// Command-line flag that supplies it.
        flag: String,
    },

    /// A playlist name was configured but the media library doesn't know it.
    #[error("Playlist '{0}' doesn't exist. Please enter a correct name.")]
    UnknownPlaylist(String),

    /// The media library could not be queried for its playlists.
    #[error("Couldn't list media library playlists: {0}")]
    PlaylistQuery(String),
}
