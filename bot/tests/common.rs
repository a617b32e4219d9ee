//! # QClip Integration Test Common Helpers
//!
//! File: bot/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `bot/tests/`. Every test runs
//! the compiled `qclip` binary inside a throwaway [`Sandbox`] so that the
//! developer's own `.qclip.toml`, user config and environment never leak in.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the six-verse fixture shipped with the tests.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample.csv")
}

/// An isolated working directory and config home.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        // Stops the upward `.qclip.toml` search at the sandbox root.
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        fs::create_dir(dir.path().join("config-home")).expect("Failed to create config home");
        Sandbox { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the sandbox root and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    /// A `qclip` command running inside the sandbox with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("qclip").expect("Failed to find qclip binary for testing");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config-home"))
            .env_remove("TELEGRAM_BOT_TOKEN")
            .env_remove("QCLIP_DATA")
            .env_remove("RUST_LOG");
        cmd
    }
}
