use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::error::Error;

/// Canonical watch URL handed to the player.
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

/// A playback backend. Adding one means implementing this trait and
/// appending it to the probe list in [`detect`].
pub trait Player {
    /// Binary looked up on PATH.
    fn binary(&self) -> &'static str;

    /// Extra arguments placed before the URL.
    fn args(&self) -> &'static [&'static str] {
        &[]
    }

    fn available(&self) -> bool {
        Command::new(self.binary())
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Launch the player and block until it exits. The child inherits the
    /// terminal; a nonzero player exit is logged but not treated as our
    /// failure.
    fn play(&self, url: &str) -> Result<()> {
        debug!(player = self.binary(), url, "launching player");
        let status = Command::new(self.binary())
            .args(self.args())
            .arg(url)
            .status()
            .with_context(|| format!("failed to launch {}", self.binary()))?;
        if !status.success() {
            warn!(player = self.binary(), %status, "player exited with error");
        }
        Ok(())
    }
}

pub struct Mpv;

impl Player for Mpv {
    fn binary(&self) -> &'static str {
        "mpv"
    }
}

pub struct Vlc;

impl Player for Vlc {
    fn binary(&self) -> &'static str {
        "vlc"
    }

    // vlc keeps its window open after playback unless told otherwise.
    fn args(&self) -> &'static [&'static str] {
        &["--play-and-exit"]
    }
}

/// Probe the supported backends in preference order. Runs before any network
/// call so a missing player fails the run up front.
pub fn detect() -> Result<Box<dyn Player>> {
    let candidates: Vec<Box<dyn Player>> = vec![Box::new(Mpv), Box::new(Vlc)];
    for candidate in candidates {
        if candidate.available() {
            debug!(player = candidate.binary(), "player backend selected");
            return Ok(candidate);
        }
    }
    Err(Error::DependencyMissing.into())
}
