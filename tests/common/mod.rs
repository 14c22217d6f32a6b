// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Command for the mindtrack binary with a clean environment
pub fn mindtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mindtrack").unwrap();
    cmd.env_remove("MINDTRACK_TODAY");
    cmd
}

/// Command pinned to a session date, running in the given directory so a
/// stray mindtrack.toml in the workspace cannot leak in
pub fn mindtrack_in(dir: &Path, today: &str) -> Command {
    let mut cmd = mindtrack_cmd();
    cmd.current_dir(dir).arg("--today").arg(today);
    cmd
}
