//! Effective-settings resolution.
//!
//! This module merges two sources into one lookup surface:
//! - command-line flags, bound by the command definitions
//! - the `~/.trackdropconfig` dotfile, loaded lazily exactly once
//!
//! Typed accessors sit on top of the generic lookup and add the per-setting
//! policy: required-ness, defaulting with a warning, and platform-gated
//! validation against the host media library.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::feedback::Reporter;
use crate::library::MediaLibrary;

/// File name of the config dotfile in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".trackdropconfig";

/// Config key for the track permalink.
pub const PERMALINK_KEY: &str = "permalink";
/// Config key for the download folder.
pub const DL_FOLDER_KEY: &str = "dl_folder";
/// Config key for the target media-library playlist.
pub const PLAYLIST_KEY: &str = "playlist";

/// A command-line flag handle as seen by the resolver.
///
/// `changed` is true only when the user explicitly supplied the flag this
/// invocation. A flag that merely exists with its default value resolves
/// like an absent flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Current flag value.
    pub value: String,
    /// Whether the user explicitly set the flag this run.
    pub changed: bool,
}

impl Flag {
    /// Create a flag handle.
    #[must_use]
    pub fn new(value: impl Into<String>, changed: bool) -> Self {
        Self {
            value: value.into(),
            changed,
        }
    }
}

/// Resolves effective settings from flags and the config file.
///
/// Constructed once at program start and handed to commands; the config
/// file is read at most once per resolver, on the first lookup. Within one
/// run, repeated lookups of the same key return the same value.
pub struct ConfigResolver {
    flags: HashMap<String, Flag>,
    file: HashMap<String, String>,
    loaded: bool,
    config_path: PathBuf,
    reporter: Box<dyn Reporter>,
    library: Box<dyn MediaLibrary>,
}

impl ConfigResolver {
    /// Create a resolver reading from the default config path.
    #[must_use]
    pub fn new(reporter: Box<dyn Reporter>, library: Box<dyn MediaLibrary>) -> Self {
        Self::with_config_path(default_config_path(), reporter, library)
    }

    /// Create a resolver reading from a specific config path.
    #[must_use]
    pub fn with_config_path(
        config_path: PathBuf,
        reporter: Box<dyn Reporter>,
        library: Box<dyn MediaLibrary>,
    ) -> Self {
        Self {
            flags: HashMap::new(),
            file: HashMap::new(),
            loaded: false,
            config_path,
            reporter,
            library,
        }
    }

    /// Register a flag handle under a setting name.
    ///
    /// Must happen before the first [`Self::get`] that should see the flag;
    /// command definitions own this ordering.
    pub fn bind_flag(&mut self, key: impl Into<String>, flag: Flag) {
        self.flags.insert(key.into(), flag);
    }

    /// Look up a setting by key.
    ///
    /// Sources are consulted in order: explicitly-set flag, then config
    /// file. Returns an empty string when neither supplies the key; typed
    /// accessors turn emptiness into defaults or errors. The first call
    /// (whatever the key) loads the config file; the load is never retried.
    ///
    /// # Errors
    ///
    /// Fails only when the first call finds a config file that exists but
    /// cannot be read or parsed.
    pub fn get(&mut self, key: &str) -> Result<String> {
        if !self.loaded {
            self.loaded = true;
            self.load_file()?;
        }

        // flags first
        if let Some(flag) = self.flags.get(key) {
            if flag.changed {
                return Ok(flag.value.clone());
            }
        }

        Ok(self.file.get(key).cloned().unwrap_or_default())
    }

    /// Load the config file into the in-memory map.
    ///
    /// A missing file is a normal first-run state: warn and continue with
    /// an empty map. An unreadable or unparsable file is fatal upstream.
    fn load_file(&mut self) -> Result<()> {
        if !self.config_path.exists() {
            debug!("No config file at {}", self.config_path.display());
            self.reporter
                .warning("There is no config file in your home directory");
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| Error::ConfigUnreadable {
            path: self.config_path.clone(),
            reason: e.to_string(),
        })?;

        // An empty file resolves like a missing one, without the warning.
        if content.trim().is_empty() {
            debug!("Config file at {} is empty", self.config_path.display());
            return Ok(());
        }

        self.file =
            serde_yaml::from_str(&content).map_err(|e| Error::ConfigMalformed {
                path: self.config_path.clone(),
                reason: e.to_string(),
            })?;

        info!(
            "Loaded {} settings from {}",
            self.file.len(),
            self.config_path.display()
        );
        Ok(())
    }

    /// Resolve the track permalink. Required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] when neither flag nor file supplies
    /// it; the returned string is never empty.
    pub fn permalink(&mut self) -> Result<String> {
        let permalink = self.get(PERMALINK_KEY)?;
        if permalink.is_empty() {
            return Err(Error::MissingSetting {
                key: PERMALINK_KEY.to_string(),
                flag: "--permalink".to_string(),
            });
        }
        Ok(permalink)
    }

    /// Resolve the download folder, defaulting to the home directory.
    ///
    /// Warns when the default is used; always returns a non-empty path.
    pub fn dl_folder(&mut self) -> Result<PathBuf> {
        let folder = self.get(DL_FOLDER_KEY)?;
        if folder.is_empty() {
            self.reporter.warning(
                "You didn't set a download folder. Tracks will be downloaded to your home directory.",
            );
            return Ok(home_dir());
        }
        Ok(PathBuf::from(folder))
    }

    /// Resolve the target media-library playlist.
    ///
    /// Inapplicable hosts get `None` with no lookup and no warning. On a
    /// host with a media library, an unset playlist degrades to `None` with
    /// a warning; a set playlist is validated against the library's
    /// playlist listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlaylist`] when the configured name is not in
    /// the library, or [`Error::PlaylistQuery`] when the listing itself
    /// fails.
    pub fn playlist(&mut self) -> Result<Option<String>> {
        if !self.library.is_available() {
            return Ok(None);
        }

        let playlist = self.get(PLAYLIST_KEY)?;
        if playlist.is_empty() {
            self.reporter.warning(
                "You didn't set a playlist. Tracks won't be added to your media library.",
            );
            return Ok(None);
        }

        let names = self.library.playlist_names()?;
        if !names.iter().any(|name| name == &playlist) {
            return Err(Error::UnknownPlaylist(playlist));
        }
        Ok(Some(playlist))
    }
}

/// Default path of the config dotfile.
#[must_use]
pub fn default_config_path() -> PathBuf {
    home_dir().join(CONFIG_FILE_NAME)
}

/// The user's home directory, falling back to the current directory.
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
