//! Media library playlist lookup.
//!
//! The playlist setting is only meaningful on hosts with a scriptable media
//! player (macOS). The lookup is behind the [`MediaLibrary`] trait so the
//! resolver can be tested on any platform without shelling out.

#[cfg(target_os = "macos")]
use std::process::Command;

use crate::error::Result;

/// Trait for querying the host media library.
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
pub trait MediaLibrary {
    /// Whether the host has a scriptable media library at all.
    fn is_available(&self) -> bool;

    /// List the names of every playlist known to the library.
    ///
    /// One blocking query; called at most once per resolution.
    fn playlist_names(&self) -> Result<Vec<String>>;
}

/// Real media library backed by the host's Music application.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostLibrary;

impl MediaLibrary for HostLibrary {
    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    #[cfg(target_os = "macos")]
    fn playlist_names(&self) -> Result<Vec<String>> {
        use crate::error::Error;

        let output = Command::new("osascript")
            .arg("-e")
            .arg("tell application \"Music\" to get name of every playlist")
            .output()
            .map_err(|e| Error::PlaylistQuery(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::PlaylistQuery(stderr.trim().to_string()));
        }

        Ok(parse_playlist_output(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    #[cfg(not(target_os = "macos"))]
    fn playlist_names(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Parse osascript's comma-separated playlist listing into names.
#[must_use]
pub fn parse_playlist_output(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(", ").map(ToString::to_string).collect()
}
