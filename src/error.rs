//! Typed errors for conditions callers want to match on.
//!
//! Everything else (storage failures, `mpc` plumbing) travels as
//! `anyhow::Error` with context attached at the failing call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LovedError {
    /// The player is reachable but nothing is playing.
    #[error("Couldn't determine current song. Check that MPD is playing.")]
    NoCurrentTrack,

    /// A track id that cannot be stored as a ledger key.
    #[error("invalid track id {id:?}: {reason}")]
    InvalidTrackId { id: String, reason: &'static str },

    /// `mpc` is missing or MPD refused the connection.
    #[error("Couldn't connect to MPD: {0}")]
    PlayerUnavailable(String),
}
