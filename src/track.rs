//! The currently playing track as reported by the player, plus the tags it
//! ends up filed under.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata fields that can be turned into tags automatically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoTag {
    Artist,
    Genre,
    Date,
}

impl AutoTag {
    /// Fields used when nothing else is configured.
    pub const DEFAULT: [AutoTag; 3] = [AutoTag::Artist, AutoTag::Genre, AutoTag::Date];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    /// Player-relative file path, used as the track id.
    pub file: String,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub date: Option<String>,
    /// Slugs the track was filed under, filled in once it has been loved.
    pub tags: Vec<String>,
}

impl Track {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn field(&self, field: AutoTag) -> Option<&str> {
        let value = match field {
            AutoTag::Artist => &self.artist,
            AutoTag::Genre => &self.genre,
            AutoTag::Date => &self.date,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Values of `fields` that this track actually has, in field order.
    pub fn auto_tags(&self, fields: &[AutoTag]) -> Vec<String> {
        fields
            .iter()
            .filter_map(|&field| self.field(field))
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.artist, &self.title) {
            (Some(artist), Some(title)) => write!(f, "{artist} - {title}")?,
            (None, Some(title)) => write!(f, "{title}")?,
            _ => write!(f, "{}", self.file)?,
        }

        if !self.tags.is_empty() {
            write!(f, "\n   tags: {}", self.tags.join(" "))?;
        }
        Ok(())
    }
}
