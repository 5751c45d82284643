//! Boundary between the tag store and whatever is playing music.
//!
//! The store never talks to the player itself. Actions get a [`Player`] and
//! use it to find out what is playing and to queue tracks back up.

use crate::track::Track;
use anyhow::Result;

pub trait Player {
    /// Fails with [`crate::error::LovedError::PlayerUnavailable`] when the
    /// player cannot be reached.
    fn check_connection(&self) -> Result<()>;

    /// The track currently playing, or `None` when the player is idle.
    fn current_track(&self) -> Result<Option<Track>>;

    /// Append `track_ids` to the play queue. Returns how many were accepted.
    fn enqueue(&self, track_ids: &[String]) -> Result<usize>;
}
