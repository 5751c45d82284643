//! # MPD Client
//!
//! [`Player`] implementation backed by the `mpc` command-line client.
//!
//! Goes through `mpc` rather than the MPD protocol, so `MPD_HOST` and
//! `MPD_PORT` work as usual unless overridden.
//!
//! Commands used:
//!
//! - `mpc version` to check MPD is reachable
//! - `mpc current -f <format>` for the playing track and its metadata
//! - `mpc add <file>` to append to the queue (never clears, never starts playback)

use crate::error::LovedError;
use crate::player::Player;
use crate::track::Track;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::process::{Command, Output};

/// Fields requested from `mpc current`, tab separated. Bracketed fields
/// print as empty when the tag is missing.
const CURRENT_FORMAT: &str = "%file%\t[%artist%]\t[%title%]\t[%genre%]\t[%date%]";

#[derive(Debug, Clone, Default)]
pub struct Mpc {
    host: Option<String>,
    port: Option<u16>,
}

impl Mpc {
    pub fn new(host: Option<String>, port: Option<u16>) -> Self {
        Self { host, port }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("mpc");
        if let Some(host) = &self.host {
            cmd.arg(format!("--host={host}"));
        }
        if let Some(port) = self.port {
            cmd.arg(format!("--port={port}"));
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .output()
            .map_err(|e| {
                LovedError::PlayerUnavailable(format!(
                    "failed to execute mpc ({e}). Please install mpc (MPD client)"
                ))
            })
            .with_context(|| format!("Failed to run mpc {}", args.join(" ")))
    }
}

impl Player for Mpc {
    fn check_connection(&self) -> Result<()> {
        let output = self.run(&["version"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LovedError::PlayerUnavailable(stderr.trim().to_string()).into());
        }

        debug!("MPD is reachable");
        Ok(())
    }

    fn current_track(&self) -> Result<Option<Track>> {
        self.check_connection()?;

        let output = self.run(&["current", "-f", CURRENT_FORMAT])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to query current song: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let track = parse_current(&stdout);
        match &track {
            Some(track) => debug!("Current song: {}", track.file),
            None => debug!("Nothing playing"),
        }
        Ok(track)
    }

    fn enqueue(&self, track_ids: &[String]) -> Result<usize> {
        if track_ids.is_empty() {
            return Ok(0);
        }

        self.check_connection()
            .context("Cannot queue songs: MPD connection failed")?;

        let mut added_count = 0;
        let mut failed_count = 0;

        for file in track_ids {
            debug!("Adding song to MPD queue: {file}");

            let output = self.run(&["add", file.as_str()])?;
            if output.status.success() {
                added_count += 1;
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!("Failed to add song '{file}' to queue: {}", stderr.trim());
                failed_count += 1;
            }
        }

        if failed_count > 0 {
            warn!(
                "Added {added_count} songs to MPD queue, but {failed_count} songs failed. \
                 Check that they are still in MPD's database."
            );
        } else {
            info!("Added {added_count} songs to MPD queue");
        }

        Ok(added_count)
    }
}

/// Parse the output of `mpc current -f CURRENT_FORMAT`.
fn parse_current(stdout: &str) -> Option<Track> {
    let line = stdout.lines().next()?.trim_end_matches('\r');

    let mut fields = line.split('\t');
    let file = fields.next()?.trim();
    if file.is_empty() {
        return None;
    }

    let mut next_field = || {
        fields
            .next()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    let mut track = Track::new(file);
    track.artist = next_field();
    track.title = next_field();
    track.genre = next_field();
    track.date = next_field();
    Some(track)
}
