//! # Integration Tests for Loved
//!
//! End-to-end checks of the tag store through the public API and through the
//! `loved` binary. Nothing here needs a running MPD.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test helper to create a ledger directory with a few loved songs
fn create_test_library() -> Result<(TempDir, loved::store::TagStore)> {
    let temp_dir = TempDir::new()?;
    let store = loved::store::TagStore::open(temp_dir.path().join("loved"))?;

    store.record("artist_a/one.mp3", &["favorite"], &["Artist A", "Rock", "2007"])?;
    store.record("artist_b/two.flac", &["chill"], &["Artist B", "Jazz"])?;
    store.record("artist_a/three.ogg", &["favorite", "Jazz"], &["Artist A", "Rock"])?;

    Ok((temp_dir, store))
}

fn run_loved(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loved"))
        .arg("--dir")
        .arg(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run loved binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod store_workflow_tests {
    use super::*;
    use loved::actions;
    use loved::player::Player;
    use loved::track::{AutoTag, Track};
    use std::cell::RefCell;

    const NONE: &[&str] = &[];

    struct ScriptedPlayer {
        playing: RefCell<Option<Track>>,
        queue: RefCell<Vec<String>>,
    }

    impl ScriptedPlayer {
        fn new() -> Self {
            Self {
                playing: RefCell::new(None),
                queue: RefCell::new(Vec::new()),
            }
        }

        fn play(&self, file: &str, artist: &str, genre: &str, date: &str) {
            let mut track = Track::new(file);
            track.artist = Some(artist.to_string());
            track.title = Some(file.to_string());
            track.genre = Some(genre.to_string());
            track.date = Some(date.to_string());
            *self.playing.borrow_mut() = Some(track);
        }
    }

    impl Player for ScriptedPlayer {
        fn check_connection(&self) -> Result<()> {
            Ok(())
        }

        fn current_track(&self) -> Result<Option<Track>> {
            Ok(self.playing.borrow().clone())
        }

        fn enqueue(&self, track_ids: &[String]) -> Result<usize> {
            self.queue.borrow_mut().extend_from_slice(track_ids);
            Ok(track_ids.len())
        }
    }

    #[test]
    fn test_ledgers_on_disk() -> Result<()> {
        let (_temp_dir, store) = create_test_library()?;

        let rock = fs::read_to_string(store.file_path("Rock"))?;
        assert_eq!(
            rock,
            "artist_a/one.mp3 # favorite artist-a rock 2007 all\n\
             artist_a/three.ogg # favorite jazz artist-a rock all\n"
        );

        assert_eq!(
            store.tags()?,
            vec!["2007", "all", "artist-a", "artist-b", "chill", "favorite", "jazz", "rock"]
        );
        Ok(())
    }

    #[test]
    fn test_every_recorded_track_is_in_all() -> Result<()> {
        let (_temp_dir, store) = create_test_library()?;

        for track in ["artist_a/one.mp3", "artist_b/two.flac", "artist_a/three.ogg"] {
            assert!(store.is_loved(track, &["all"])?, "{track} missing from all");
        }
        assert_eq!(store.all()?, store.query(NONE)?);
        assert_eq!(store.all()?, store.query(&["all"])?);
        Ok(())
    }

    #[test]
    fn test_multi_tag_query_keeps_duplicates() -> Result<()> {
        let (_temp_dir, store) = create_test_library()?;

        assert_eq!(
            store.query(&["rock", "jazz"])?,
            vec![
                "artist_a/one.mp3",
                "artist_a/three.ogg",
                "artist_b/two.flac",
                "artist_a/three.ogg",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_love_then_play_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = loved::store::TagStore::open(temp_dir.path())?;
        let player = ScriptedPlayer::new();

        player.play("a/first.mp3", "Björk", "Electronic", "1997");
        let track = actions::love_current_track(&store, &player, &["late night"], &AutoTag::DEFAULT)?;
        assert_eq!(track.tags, vec!["late-night", "bjork", "electronic", "1997", "all"]);

        player.play("b/second.mp3", "Someone Else", "Electronic", "2001");
        actions::love_current_track(&store, &player, NONE, &[AutoTag::Genre])?;

        // Loving the same song again leaves the ledgers alone
        let before = fs::read_to_string(store.file_path("all"))?;
        actions::love_current_track(&store, &player, NONE, &[AutoTag::Genre])?;
        assert_eq!(fs::read_to_string(store.file_path("all"))?, before);

        let report = actions::append_found_tracks(&store, &player, &["Electronic"])?;
        assert_eq!(report.found, vec!["a/first.mp3", "b/second.mp3"]);
        assert_eq!(*player.queue.borrow(), vec!["a/first.mp3", "b/second.mp3"]);
        Ok(())
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_loved(temp_dir.path(), &["--help"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        for command in ["love", "play", "list", "check", "tags", "completion"] {
            assert!(stdout.contains(command), "help is missing {command}");
        }
    }

    #[test]
    fn test_list_prints_tracks_in_order() -> Result<()> {
        let (temp_dir, _store) = create_test_library()?;
        let dir = temp_dir.path().join("loved");

        let output = run_loved(&dir, &["list"]);
        assert!(output.status.success());
        assert_eq!(
            stdout_lines(&output),
            vec!["artist_a/one.mp3", "artist_b/two.flac", "artist_a/three.ogg"]
        );

        let output = run_loved(&dir, &["list", "Favorite"]);
        assert_eq!(stdout_lines(&output), vec!["artist_a/one.mp3", "artist_a/three.ogg"]);

        let output = run_loved(&dir, &["list", "no such tag"]);
        assert!(output.status.success());
        assert!(stdout_lines(&output).is_empty());
        Ok(())
    }

    #[test]
    fn test_list_json() -> Result<()> {
        let (temp_dir, _store) = create_test_library()?;
        let dir = temp_dir.path().join("loved");

        let output = run_loved(&dir, &["list", "--json", "chill"]);
        assert!(output.status.success());
        let tracks: Vec<String> = serde_json::from_slice(&output.stdout)?;
        assert_eq!(tracks, vec!["artist_b/two.flac"]);
        Ok(())
    }

    #[test]
    fn test_tags_command() -> Result<()> {
        let (temp_dir, _store) = create_test_library()?;
        let dir = temp_dir.path().join("loved");

        let output = run_loved(&dir, &["tags"]);
        assert!(output.status.success());
        assert!(stdout_lines(&output).contains(&"artist-b".to_string()));
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("fresh").join("loved");

        let output = run_loved(&dir, &["tags"]);
        assert!(output.status.success());
        assert!(dir.is_dir());
        assert!(stdout_lines(&output).is_empty());
    }

    #[test]
    fn test_play_with_no_matches_skips_mpd() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("loved");

        // Nothing matches, so mpc is never invoked even with a dead port
        let output = run_loved(&dir, &["--host", "127.0.0.1", "--port", "1", "play", "rock"]);
        assert!(output.status.success());
        assert_eq!(
            stdout_lines(&output),
            vec!["Appended 0 songs to your MPD playlist. Enjoy!"]
        );
    }

    #[test]
    fn test_list_fails_when_directory_is_a_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("loved");
        fs::write(&file, "")?;

        let output = run_loved(&file, &["list"]);
        assert!(!output.status.success());
        assert!(stdout_lines(&output).is_empty());
        Ok(())
    }

    #[test]
    fn test_love_fails_without_mpd() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("loved");

        // Port 1 never has an MPD behind it
        let output = run_loved(&dir, &["--host", "127.0.0.1", "--port", "1", "love", "rock"]);
        assert!(!output.status.success());
        assert!(!dir.join("rock").exists());
        assert!(!dir.join("all").exists());
    }

    #[test]
    fn test_completion_generation() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_loved(temp_dir.path(), &["completion", "bash"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_loved"));
        assert!(stdout.contains("complete"));
    }
}
