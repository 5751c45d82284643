//! # Loved
//!
//! Tag the song MPD is playing and queue loved songs back up by tag.
//!
//! ## Usage
//!
//! ```bash
//! # Love the current song, filed under its artist/genre/date and "favorite"
//! loved love favorite
//!
//! # Queue every loved rock song
//! loved play rock
//!
//! # Queue everything
//! loved play
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use loved::config::{self, RuntimeConfig};
use loved::mpd_client::Mpc;
use loved::store::TagStore;
use loved::{actions, cli, completion};

/// Resolve the runtime configuration from the parsed arguments.
fn runtime_config(args: &cli::Args) -> Result<RuntimeConfig> {
    let directory = match &args.dir {
        Some(dir) => dir.clone(),
        None => config::get_loved_dir()?,
    };

    Ok(RuntimeConfig::with_directory(directory).auto_tags(args.auto_tags.clone()))
}

fn open_store(args: &cli::Args) -> Result<(RuntimeConfig, TagStore)> {
    let config = runtime_config(args)?;
    debug!("Using loved directory {}", config.directory.display());
    let store = TagStore::open(&config.directory)?;
    Ok((config, store))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Main entry point for Loved.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug loved love` - Enable debug logging
/// - `RUST_LOG=loved::store=debug loved play rock` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let player = Mpc::new(args.host.clone(), args.port);

    match &args.command {
        cli::Command::Love { tags } => {
            let (config, store) = open_store(&args)?;
            info!("Loving current song with tags {tags:?}");
            let track = actions::love_current_track(&store, &player, tags, &config.auto_tags)?;
            println!("Loved {track}");
        }
        cli::Command::Play { tags } => {
            let (_, store) = open_store(&args)?;
            let report = actions::append_found_tracks(&store, &player, tags)?;
            let count = report.queued;
            println!("Appended {count} song{} to your MPD playlist. Enjoy!", plural(count));
        }
        cli::Command::List { tags, json } => {
            let (_, store) = open_store(&args)?;
            let tracks = store.query(tags)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&tracks)?);
            } else {
                for track in tracks {
                    println!("{track}");
                }
            }
        }
        cli::Command::Check { tags } => {
            let (_, store) = open_store(&args)?;
            let (track, loved) = actions::is_current_track_loved(&store, &player, tags)?;
            if loved {
                println!("{track} is loved");
            } else {
                println!("{track} is not loved");
            }
        }
        cli::Command::Tags => {
            let (_, store) = open_store(&args)?;
            for tag in store.tags()? {
                println!("{tag}");
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
        }
    }

    Ok(())
}
