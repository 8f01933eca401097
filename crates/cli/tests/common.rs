// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `finetrack` binary, isolated from the caller's environment.
pub fn ft(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("finetrack");
    cmd.arg("-C")
        .arg(temp.path())
        .env_remove("FINETRACK_DIR")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp data directory in local mode
pub fn init_temp_local() -> TempDir {
    let temp = TempDir::new().unwrap();
    ft(&temp).arg("init").assert().success();
    temp
}

/// Helper to create an initialized temp data directory in hybrid mode
pub fn init_temp_hybrid(url: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    ft(&temp)
        .args(["init", "--mode", "hybrid", "--url", url, "--timeout-secs", "2"])
        .assert()
        .success();
    temp
}

/// Helper to add a parking fine and return its ID
pub fn add_fine(temp: &TempDir, title: &str, due: &str) -> String {
    let output = ft(temp)
        .args(["add", "parking", title, "-a", "60", "--due", due])
        .args(["--issued", "2025-01-01", "-o", "id"])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Run `list -o json` and return the parsed fines
pub fn list_json(temp: &TempDir) -> Vec<serde_json::Value> {
    let output = ft(temp).args(["list", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}
