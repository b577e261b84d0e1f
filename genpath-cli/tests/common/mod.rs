//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated configuration directory
//! - Command builder helpers
//! - Output helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const GENPATH_ENV_VARS: &[&str] = &[
    "GENPATH_CONFIG_DIR",
    "GENPATH_OUTPUT_FORMAT",
    "GENPATH_KNOWN_SCHEMES",
    "GENPATH_LOG_MODE",
];

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the genpath configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The configuration directory exists but holds no `config.yaml` until
    /// [`TestEnv::write_config`] is called.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("genpath-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Get a bare command builder with the host `GENPATH_*` variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("genpath").expect("Failed to find genpath binary");
        for var in GENPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Write `config.yaml` into the configuration directory.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Get the configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run genpath");

        assert!(
            output.status.success(),
            "genpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
