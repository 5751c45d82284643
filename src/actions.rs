//! User-facing actions, built only from [`TagStore`] operations and the
//! [`Player`] boundary.
//!
//! - [`love_current_track`]: file the playing track under the given tags
//!   plus its metadata auto-tags
//! - [`append_found_tracks`]: query by tags and append the result to the
//!   play queue
//! - [`is_current_track_loved`]: check the playing track against tags

use crate::error::LovedError;
use crate::player::Player;
use crate::store::TagStore;
use crate::track::{AutoTag, Track};
use anyhow::Result;
use log::info;

/// Outcome of [`append_found_tracks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueReport {
    /// Tracks the query returned, duplicates included.
    pub found: Vec<String>,
    /// How many the player accepted.
    pub queued: usize,
}

/// Love whatever is playing right now.
///
/// The returned track carries the effective tags it was filed under.
///
/// # Errors
///
/// - [`LovedError::NoCurrentTrack`] when the player is idle
/// - Player and storage errors are passed through
pub fn love_current_track<P, T>(
    store: &TagStore,
    player: &P,
    tags: &[T],
    auto_fields: &[AutoTag],
) -> Result<Track>
where
    P: Player + ?Sized,
    T: AsRef<str>,
{
    let mut track = player
        .current_track()?
        .ok_or(LovedError::NoCurrentTrack)?;

    let auto_tags = track.auto_tags(auto_fields);
    track.tags = store.record(&track.file, tags, &auto_tags)?;

    info!("Loved {} as [{}]", track.file, track.tags.join(" "));
    Ok(track)
}

/// Find tracks by tags and append them to the player's queue.
///
/// Follows [`TagStore::query`], so several tags queue each tag's tracks in
/// turn and a track under more than one of them is queued more than once.
pub fn append_found_tracks<P, T>(store: &TagStore, player: &P, tags: &[T]) -> Result<QueueReport>
where
    P: Player + ?Sized,
    T: AsRef<str>,
{
    let found = store.query(tags)?;
    if found.is_empty() {
        info!("No loved songs match, nothing to queue");
        return Ok(QueueReport { found, queued: 0 });
    }

    let queued = player.enqueue(&found)?;
    Ok(QueueReport { found, queued })
}

/// Whether the playing track is filed under `tags` (any loved track when
/// `tags` is empty).
pub fn is_current_track_loved<P, T>(store: &TagStore, player: &P, tags: &[T]) -> Result<(Track, bool)>
where
    P: Player + ?Sized,
    T: AsRef<str>,
{
    let track = player
        .current_track()?
        .ok_or(LovedError::NoCurrentTrack)?;

    let loved = store.is_loved(&track.file, tags)?;
    Ok((track, loved))
}
