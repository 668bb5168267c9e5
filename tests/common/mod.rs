//! Common test utilities for ageguard CLI tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary in `dir` with an isolated config environment
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_ageguard");

    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("AGEGUARD_POLICY")
        .env_remove("AGEGUARD_MIN_AGE")
        .env_remove("AGEGUARD_FORMAT")
        .env_remove("AGEGUARD_VERBOSITY")
        .output()
        .unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse every stdout line as JSON
pub fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    stdout_of(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
