//! # Configuration Module
//!
//! Resolves where the ledgers live and which metadata fields become
//! auto-tags.
//!
//! ## Data Storage
//!
//! Ledgers default to `~/.loved/`. The `--dir` flag or the `LOVED_DIR`
//! environment variable point somewhere else.

use crate::track::AutoTag;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Name of the ledger directory inside the home directory.
const LOVED_DIR_NAME: &str = ".loved";

/// Returns the default ledger directory, `~/.loved`, creating it if needed.
///
/// # Errors
///
/// This function will return an error if:
/// - The home directory cannot be determined
/// - The directory cannot be created due to permissions
///
/// # Examples
///
/// ```no_run
/// use loved::config::get_loved_dir;
///
/// let dir = get_loved_dir()?;
/// println!("Ledgers live in {}", dir.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_loved_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine home directory. Use --dir or LOVED_DIR to choose where tags are stored."
        )
    })?;

    let loved_dir = home.join(LOVED_DIR_NAME);
    fs::create_dir_all(&loved_dir).with_context(|| {
        format!(
            "Failed to create loved directory at {}. Please check file permissions.",
            loved_dir.display()
        )
    })?;

    Ok(loved_dir)
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Directory holding one ledger file per tag
    pub directory: PathBuf,
    /// Metadata fields recorded as tags alongside the user's own
    pub auto_tags: Vec<AutoTag>,
}

impl RuntimeConfig {
    /// Create configuration with explicit ledger directory
    pub fn with_directory(directory: PathBuf) -> Self {
        Self {
            directory,
            auto_tags: AutoTag::DEFAULT.to_vec(),
        }
    }

    /// Replace the auto-tag fields
    pub fn auto_tags(mut self, auto_tags: Vec<AutoTag>) -> Self {
        self.auto_tags = auto_tags;
        self
    }
}
