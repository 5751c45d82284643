//! Ledger line codec.
//!
//! Every ledger file holds one entry per line:
//!
//! ```text
//! <track_id> # <tag1> <tag2> ...
//! ```
//!
//! The ` # ` separator is literal. Lines without it are treated as damaged
//! (for example a write cut short by a crash) and skipped by readers.

use std::fmt;

/// Separator between the track id and the tag list.
pub const SEPARATOR: &str = " # ";

/// One parsed ledger line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub track_id: String,
    pub tags: Vec<String>,
}

impl LedgerEntry {
    pub fn new(track_id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            track_id: track_id.into(),
            tags,
        }
    }

    /// Parse a single line. Returns `None` for malformed lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);

        let (track_id, tags) = match line.split_once(SEPARATOR) {
            Some((id, tags)) => (id, tags),
            // An empty tag list may have lost its trailing space
            None => (line.strip_suffix(" #")?, ""),
        };

        if track_id.is_empty() {
            return None;
        }

        Some(Self {
            track_id: track_id.to_string(),
            tags: tags.split_whitespace().map(str::to_string).collect(),
        })
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.track_id, SEPARATOR, self.tags.join(" "))
    }
}

/// Track id of a line, without allocating the tag list.
pub fn track_id_of(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let id = match line.split_once(SEPARATOR) {
        Some((id, _)) => id,
        None => line.strip_suffix(" #")?,
    };
    (!id.is_empty()).then_some(id)
}
