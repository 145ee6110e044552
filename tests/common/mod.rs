//! Integration test common infrastructure.
//!
//! Runs the real parkd binary against scripted input and captures the reply
//! stream for byte-exact assertions.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the daemon over `input` with no configuration file, returning stdout.
pub fn run_script(input: &str) -> String {
    run_script_with_config(None, input)
}

/// Run the daemon over `input`, optionally pointing it at a config file
/// written into a fresh temporary directory.
pub fn run_script_with_config(config: Option<&str>, input: &str) -> String {
    // Each run gets its own working directory so a stray parkd.toml on the
    // host can't leak into the default config lookup.
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut command = Command::new(env!("CARGO_BIN_EXE_parkd"));
    command.current_dir(dir.path());
    if let Some(config_toml) = config {
        let config_path = dir.path().join("parkd.toml");
        std::fs::write(&config_path, config_toml).expect("Failed to write config");
        command.arg(&config_path);
    }

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn parkd");

    let mut stdin = child.stdin.take().expect("stdin was piped");
    stdin
        .write_all(input.as_bytes())
        .expect("Failed to write script");
    // Close the pipe so the session sees end of input.
    drop(stdin);

    let output = child.wait_with_output().expect("Failed to wait for parkd");
    assert!(output.status.success(), "parkd exited with failure");
    String::from_utf8(output.stdout).expect("stdout was not UTF-8")
}
