//! Shared setup for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use inflight_testing::fixtures::{Fixture, FixtureDir};
use std::path::PathBuf;

/// Isolated working area: fixture logs and an optional config file, with
/// the user's own config kept out of the way
pub struct TestFixture {
    dir: FixtureDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: FixtureDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn place(&self, fixture: Fixture) -> PathBuf {
        self.dir.place(fixture).expect("Failed to write fixture")
    }

    pub fn write(&self, file_name: &str, text: &str) -> PathBuf {
        self.dir.write(file_name, text).expect("Failed to write file")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        self.write("config.toml", body)
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("inflight").expect("Failed to find binary");
        cmd.env("INFLIGHT_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
