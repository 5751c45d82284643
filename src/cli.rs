//! # Command-Line Interface Module
//!
//! Clap derive definitions for the `loved` command.
//!
//! ## Commands
//!
//! - `love`: tag the song MPD is playing
//! - `play`: append loved songs matching tags to the MPD queue
//! - `list`: print loved songs matching tags
//! - `check`: tell whether the playing song is loved
//! - `tags`: list every tag in use
//!
//! ## Examples
//!
//! ```bash
//! loved love favorite summer
//! loved play rock
//! loved list --json jazz
//! ```

use crate::track::AutoTag;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "loved")]
#[command(about = "Loved: tag the songs you love in MPD and queue them back by tag")]
#[command(version)]
pub struct Args {
    /// Directory holding the tag ledgers [default: ~/.loved]
    #[arg(long, global = true, env = "LOVED_DIR", value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Metadata fields recorded as tags when loving a song
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        default_value = "artist,genre,date"
    )]
    pub auto_tags: Vec<AutoTag>,

    /// MPD host passed on to mpc (mpc falls back to MPD_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// MPD port passed on to mpc (mpc falls back to MPD_PORT)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Love the song MPD is currently playing
    ///
    /// The song is filed under every given tag, under its artist, genre and
    /// date (see --auto-tags), and under "all". Loving a song again under
    /// the same tags changes nothing.
    Love {
        /// Extra tags, free text
        tags: Vec<String>,
    },

    /// Append loved songs to the MPD queue
    ///
    /// Without tags every loved song is queued. With several tags each
    /// tag's songs are queued one after the other, so a song carrying more
    /// than one of them is queued more than once.
    Play {
        /// Tags to look up
        tags: Vec<String>,
    },

    /// Print loved songs, one per line
    ///
    /// Uses the same lookup as `play` without touching MPD.
    List {
        /// Tags to look up
        tags: Vec<String>,

        /// Print a JSON array instead
        #[arg(long)]
        json: bool,
    },

    /// Tell whether the current song is loved
    ///
    /// Exits successfully either way; the answer is printed.
    Check {
        /// Tags to check against (any loved song when empty)
        tags: Vec<String>,
    },

    /// List every tag that has songs
    Tags,

    /// Generate shell completions
    ///
    /// Usage: loved completion bash > ~/.local/share/bash-completion/completions/loved
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
