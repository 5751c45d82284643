//! # Tag Store
//!
//! Flat-file multi-map from tag to the tracks carrying it. The store owns a
//! directory holding one ledger file per normalized tag:
//!
//! ```text
//! ~/.loved/
//! ├── all          every loved track
//! ├── artist-a
//! ├── favorite
//! └── rock
//! ```
//!
//! Ledgers are append-only. A track id appears at most once per ledger,
//! which is checked by scanning the file before each write. Nothing is ever
//! rewritten, compacted or deleted.
//!
//! There is no locking: concurrent writers from other processes can
//! interleave lines.
//!
//! ## Example
//!
//! ```no_run
//! use loved::store::TagStore;
//!
//! let store = TagStore::open("/home/user/.loved")?;
//! store.record("artist/album/song1.mp3", &["favorite"], &["Artist A", "Rock"])?;
//!
//! assert_eq!(store.query(&["rock"])?, vec!["artist/album/song1.mp3"]);
//! assert!(store.is_loved("artist/album/song1.mp3", &["all"])?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::error::LovedError;
use crate::ledger::{self, LedgerEntry};
use crate::normalize;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Pseudo-tag every recorded track is filed under.
pub const ALL_TAG: &str = "all";

/// Handle on a ledger directory.
#[derive(Debug, Clone)]
pub struct TagStore {
    root: PathBuf,
}

impl TagStore {
    /// Open the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            fs::create_dir_all(&root).with_context(|| {
                format!(
                    "Failed to create loved directory at {}. Please check file permissions.",
                    root.display()
                )
            })?;
            info!("Created loved directory at {}", root.display());
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ledger file backing `tag`.
    pub fn file_path(&self, tag: &str) -> PathBuf {
        normalize::file_path(&self.root, tag)
    }

    /// Record `track_id` under `tags` plus the caller-supplied `auto_tags`.
    ///
    /// Tags are deduplicated by slug and [`ALL_TAG`] is always added. Each
    /// ledger gets the line `track_id # <slugs>` unless it already lists the
    /// track, in which case that ledger is left alone. Re-recording a track
    /// with extra tags therefore only touches the new ledgers, and different
    /// ledgers can end up holding different tag lists for the same track.
    ///
    /// Tags that normalize to nothing are skipped with a warning.
    ///
    /// Returns the effective slugs, in first-seen order.
    ///
    /// # Errors
    ///
    /// - [`LovedError::InvalidTrackId`] for an empty id, or one holding a line
    ///   break or the ` # ` separator
    /// - Any I/O failure opening, reading or appending to a ledger
    pub fn record<T, A>(&self, track_id: &str, tags: &[T], auto_tags: &[A]) -> Result<Vec<String>>
    where
        T: AsRef<str>,
        A: AsRef<str>,
    {
        validate_track_id(track_id)?;

        let effective = effective_tags(
            tags.iter()
                .map(|tag| tag.as_ref())
                .chain(auto_tags.iter().map(|tag| tag.as_ref())),
        );
        let line = LedgerEntry::new(track_id, effective.clone()).to_string();

        for slug in &effective {
            if self.append_once(slug, track_id, &line)? {
                debug!("Added {track_id} to ledger '{slug}'");
            } else {
                debug!("{track_id} already in ledger '{slug}', leaving it untouched");
            }
        }

        Ok(effective)
    }

    /// Tracks filed under `tags`.
    ///
    /// - no tags: same as [`TagStore::all`]
    /// - one tag: that ledger's tracks in append order
    /// - several tags: each tag's tracks one after the other, in argument order
    ///
    /// Several tags give a concatenation, not an intersection: a track under
    /// both "rock" and "jazz" comes back twice for `["rock", "jazz"]`.
    /// Known quirk, kept as-is.
    ///
    /// A tag without a ledger contributes nothing.
    pub fn query<T: AsRef<str>>(&self, tags: &[T]) -> Result<Vec<String>> {
        if tags.is_empty() {
            return self.all();
        }

        let mut tracks = Vec::new();
        for tag in tags {
            tracks.extend(self.tracks_for(tag.as_ref())?);
        }
        Ok(tracks)
    }

    /// Whether `track_id` shows up in `query(tags)`.
    pub fn is_loved<T: AsRef<str>>(&self, track_id: &str, tags: &[T]) -> Result<bool> {
        Ok(self.query(tags)?.iter().any(|t| t == track_id))
    }

    /// Every loved track, in the order it was first loved.
    pub fn all(&self) -> Result<Vec<String>> {
        self.tracks_for(ALL_TAG)
    }

    /// Parsed lines of the ledger for `tag`. Damaged lines are skipped.
    pub fn entries(&self, tag: &str) -> Result<Vec<LedgerEntry>> {
        let slug = normalize::normalize(tag);
        if slug.is_empty() {
            debug!("Tag {tag:?} normalizes to nothing, no ledger to read");
            return Ok(Vec::new());
        }

        let path = self.root.join(&slug);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No ledger for '{slug}' yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read ledger {}", path.display()))
            }
        };

        let contents = String::from_utf8_lossy(&bytes);
        let mut entries = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            match LedgerEntry::parse(line) {
                Some(entry) => entries.push(entry),
                None if line.trim().is_empty() => {}
                None => warn!("Skipping damaged line {} in {}", number + 1, path.display()),
            }
        }

        Ok(entries)
    }

    /// Slugs that currently have a ledger, sorted.
    pub fn tags(&self) -> Result<Vec<String>> {
        let dir = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to list loved directory {}", self.root.display()))?;

        let mut tags = Vec::new();
        for entry in dir {
            let entry = entry.with_context(|| format!("Failed to list {}", self.root.display()))?;
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            // Anything that isn't a slug was not written by us
            if let Some(name) = entry.file_name().to_str() {
                if !name.is_empty() && normalize::normalize(name) == name {
                    tags.push(name.to_string());
                }
            }
        }

        tags.sort();
        Ok(tags)
    }

    fn tracks_for(&self, tag: &str) -> Result<Vec<String>> {
        Ok(self
            .entries(tag)?
            .into_iter()
            .map(|entry| entry.track_id)
            .collect())
    }

    /// Append `line` to the ledger for `slug` unless `track_id` is already
    /// listed. Returns whether anything was written.
    fn append_once(&self, slug: &str, track_id: &str, line: &str) -> Result<bool> {
        let path = self.root.join(slug);
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .with_context(|| format!("Failed to open ledger {}", path.display()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read ledger {}", path.display()))?;
        let contents = String::from_utf8_lossy(&bytes);

        if contents
            .lines()
            .any(|existing| ledger::track_id_of(existing) == Some(track_id))
        {
            return Ok(false);
        }

        let mut record = String::with_capacity(line.len() + 2);
        if !contents.is_empty() && !contents.ends_with('\n') {
            // Keep a half-written line from swallowing ours
            warn!("Ledger {} ends mid-line, starting a fresh one", path.display());
            record.push('\n');
        }
        record.push_str(line);
        record.push('\n');

        file.write_all(record.as_bytes())
            .with_context(|| format!("Failed to append to ledger {}", path.display()))?;

        Ok(true)
    }
}

fn validate_track_id(track_id: &str) -> Result<()> {
    let reason = if track_id.is_empty() {
        "track id is empty"
    } else if track_id.contains(['\n', '\r']) {
        "track id contains a line break"
    } else if track_id.contains(ledger::SEPARATOR) || track_id.ends_with(" #") {
        "track id contains the ledger separator"
    } else {
        return Ok(());
    };

    Err(LovedError::InvalidTrackId {
        id: track_id.to_string(),
        reason,
    }
    .into())
}

/// Distinct slugs of `tags` in first-seen order, with [`ALL_TAG`] added.
fn effective_tags<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();

    for tag in tags.chain(std::iter::once(ALL_TAG)) {
        let slug = normalize::normalize(tag);
        if slug.is_empty() {
            warn!("Ignoring tag {tag:?}: nothing left after normalization");
            continue;
        }
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }

    slugs
}
