use assert_cmd::Command;
use std::path::Path;

pub fn shelf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env_remove("SHELF_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A command running inside `dir`.
pub fn shelf_in(dir: &Path) -> Command {
    let mut cmd = shelf_cmd();
    cmd.current_dir(dir);
    cmd
}
