//! CLI integration tests
//!
//! Discogs is replaced by a local mockito server and HOME by a temp
//! directory, so nothing here touches the network or the real config.

use assert_cmd::Command;
use mockito::{Matcher, Mock, ServerGuard};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the binary, isolated from the user's environment
fn shuffle_cmd(home: &TempDir, api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("discogs-shuffle").unwrap();
    cmd.env("HOME", home.path())
        .env("DISCOGS_SHUFFLE_API_URL", api_url)
        .env("NO_COLOR", "1")
        .env_remove("DISCOGS_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// Command that must never reach the API
fn offline_cmd(home: &TempDir) -> Command {
    shuffle_cmd(home, "http://127.0.0.1:9")
}

/// One-release collection, expected to be fetched `hits` times
fn mock_single_release(server: &mut ServerGuard, username: &str, hits: usize) -> Mock {
    let body = serde_json::json!({
        "pagination": {"page": 1, "pages": 1, "per_page": 100, "items": 1},
        "releases": [{
            "id": 1,
            "basic_information": {
                "title": "Moon Safari",
                "cover_image": "https://i.discogs.com/moon.jpg",
                "artists": [{"name": "Air"}]
            }
        }]
    });
    server
        .mock(
            "GET",
            format!("/users/{username}/collection/folders/0/releases").as_str(),
        )
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and argument parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick a random record"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("discogs-shuffle"));
}

#[test]
fn test_cache_help() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["cache", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage locally cached collections"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn test_invalid_command() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["--quiet", "--verbose", "config", "path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_output_format_options() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["--output", "json", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": false"));

    offline_cmd(&home)
        .args(["--output", "invalid", "config", "path"])
        .assert()
        .failure();
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("discogs-shuffle"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".discogs-shuffle/config.toml"));
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["config", "set", "defaults.username", "kasn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set defaults.username = kasn"));

    offline_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username = kasn"));

    assert!(home.path().join(".discogs-shuffle/config.toml").exists());
}

#[test]
fn test_config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["config", "set", "defaults.app_slug", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Shuffle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shuffle_without_username_fails() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .arg("shuffle")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No username given"));
}

#[test]
fn test_shuffle_loads_then_uses_cache() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_single_release(&mut server, "kasn", 1);

    for _ in 0..2 {
        shuffle_cmd(&home, &server.url())
            .args(["shuffle", "kasn"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Moon Safari"))
            .stdout(predicate::str::contains("Air"))
            .stdout(predicate::str::contains("https://i.discogs.com/moon.jpg"));
    }

    mock.assert();
    assert!(home
        .path()
        .join(".discogs-shuffle/cache/releases_kasn.json")
        .exists());
}

#[test]
fn test_shuffle_uses_configured_username() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_single_release(&mut server, "kasn", 1);

    offline_cmd(&home)
        .args(["config", "set", "defaults.username", "kasn"])
        .assert()
        .success();

    shuffle_cmd(&home, &server.url())
        .arg("s")
        .assert()
        .success()
        .stdout(predicate::str::contains("Moon Safari"));

    mock.assert();
}

#[test]
fn test_shuffle_json_output() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = mock_single_release(&mut server, "kasn", 1);

    let output = shuffle_cmd(&home, &server.url())
        .args(["--output", "json", "shuffle", "kasn"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["title"], "Moon Safari");
    assert_eq!(item["artists"][0], "Air");
    assert_eq!(item["cover_image"], "https://i.discogs.com/moon.jpg");
}

#[test]
fn test_shuffle_refresh_refetches() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_single_release(&mut server, "kasn", 2);

    shuffle_cmd(&home, &server.url())
        .args(["shuffle", "kasn"])
        .assert()
        .success();
    shuffle_cmd(&home, &server.url())
        .args(["shuffle", "kasn", "--refresh"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_shuffle_remote_error_shows_hint() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/users/ghost/collection/folders/0/releases")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message": "User does not exist or may have been deleted."}"#)
        .create();

    shuffle_cmd(&home, &server.url())
        .args(["shuffle", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HTTP 404"))
        .stderr(predicate::str::contains("switch your collection to public"));

    assert!(!home
        .path()
        .join(".discogs-shuffle/cache/releases_ghost.json")
        .exists());
}

#[test]
fn test_list_collection() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = mock_single_release(&mut server, "kasn", 1);

    shuffle_cmd(&home, &server.url())
        .args(["list", "kasn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kasn's collection (1 releases)"))
        .stdout(predicate::str::contains("1. Air - Moon Safari"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_cache_status_when_empty() {
    let home = TempDir::new().unwrap();
    offline_cmd(&home)
        .args(["cache", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache Status"))
        .stdout(predicate::str::contains("Nothing cached"));
}

#[test]
fn test_cache_clear_forces_reload() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_single_release(&mut server, "kasn", 2);

    shuffle_cmd(&home, &server.url())
        .args(["shuffle", "kasn"])
        .assert()
        .success();

    offline_cmd(&home)
        .args(["cache", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("releases_kasn"))
        .stdout(predicate::str::contains("Releases: 1"));

    offline_cmd(&home)
        .args(["cache", "clear", "--user", "kasn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache cleared for kasn"));

    shuffle_cmd(&home, &server.url())
        .args(["shuffle", "kasn"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_cache_clear_all_is_idempotent() {
    let home = TempDir::new().unwrap();
    for _ in 0..2 {
        offline_cmd(&home)
            .args(["cache", "clear"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache cleared"));
    }
}
