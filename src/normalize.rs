//! # Tag Normalization
//!
//! Converts free-text tags ("Björk", "Hip-Hop!!", "  Post Rock ") into the
//! lowercase ASCII slugs used both as lookup keys and as ledger file names.
//!
//! A slug always matches `^[a-z0-9_]+(-[a-z0-9_]+)*$` or is empty. The empty
//! slug is not an error here; the store decides what to do with it.
//!
//! ```
//! use loved::normalize::normalize;
//!
//! assert_eq!(normalize("Björk"), "bjork");
//! assert_eq!(normalize("Hip-Hop!!"), "hip-hop");
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref NON_ASCII: Regex = Regex::new(r"[^\x00-\x7F]+").unwrap();
    static ref UNWANTED: Regex = Regex::new(r"[^A-Za-z0-9_ \-]+").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[ \-]+").unwrap();
}

/// Normalize a tag into a filesystem-safe slug.
///
/// Steps, each applied to the output of the previous one:
///
/// 1. Transliterate to ASCII, dropping characters without an equivalent
/// 2. Strip whatever non-ASCII is left
/// 3. Keep only word characters, spaces and hyphens
/// 4. Collapse runs of spaces/hyphens into one hyphen
/// 5. Trim a leading and a trailing hyphen
/// 6. Lowercase
///
/// Deterministic and idempotent: normalizing a slug returns it unchanged.
pub fn normalize(tag: &str) -> String {
    let ascii = deunicode::deunicode_with_tofu(tag, "");
    let ascii = NON_ASCII.replace_all(&ascii, "");
    let cleaned = UNWANTED.replace_all(&ascii, "");
    let collapsed = SEPARATORS.replace_all(&cleaned, "-");

    let trimmed = collapsed.strip_prefix('-').unwrap_or(&*collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);

    trimmed.to_ascii_lowercase()
}

/// Ledger file for `tag` under `root`. Pure path arithmetic, no I/O.
pub fn file_path(root: &Path, tag: &str) -> PathBuf {
    root.join(normalize(tag))
}
