//! Personal "loved songs" tag index for MPD.
//!
//! Core modules:
//! - [`normalize`] - Tag to filesystem-safe slug
//! - [`store`] - Ledger directory: record, query, is_loved, all
//! - [`ledger`] - Ledger line format
//!
//! ### Supporting Modules
//!
//! - [`actions`] - Love the current song, queue songs by tag
//! - [`player`] - Boundary trait for the music player
//! - [`mpd_client`] - [`player::Player`] over the `mpc` command
//! - [`track`] - Current song metadata and auto-tags
//! - [`config`] - Ledger directory and runtime settings
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`error`] - Typed errors callers can match on
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use loved::store::TagStore;
//!
//! let store = TagStore::open(loved::config::get_loved_dir()?)?;
//!
//! // Love a song under "favorite", plus tags taken from its metadata
//! let tags = store.record("artist_a/album/song1.mp3", &["favorite"], &["Artist A", "Rock"])?;
//! assert_eq!(tags, vec!["favorite", "artist-a", "rock", "all"]);
//!
//! // Everything tagged rock, in the order it was loved
//! for track in store.query(&["rock"])? {
//!     println!("{track}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Storage
//!
//! One plain-text file per tag, one `track_id # tags...` line per song:
//!
//! ```text
//! $ cat ~/.loved/rock
//! artist_a/album/song1.mp3 # favorite artist-a rock all
//! ```
//!
//! Files are only ever appended to, so they can be edited, grepped, or
//! synced by hand.
//!
//! ## Error Handling
//!
//! Public functions return `anyhow::Result`. Conditions worth matching on
//! (nothing playing, MPD unreachable, unusable track id) are
//! [`error::LovedError`] values and can be recovered with `downcast_ref`.
//! A missing ledger is not an error: it simply has no songs.

pub mod actions;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod ledger;
pub mod mpd_client;
pub mod normalize;
pub mod player;
pub mod store;
pub mod track;
