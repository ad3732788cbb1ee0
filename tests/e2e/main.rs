//! End-to-end tests for the `pv` binary

mod cli_basic;
mod config_file;
mod list_mode;

use assert_cmd::Command;

/// `pv` with the user's config file out of the way
pub fn pv() -> Command {
    let mut cmd = Command::cargo_bin("pv").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/petview-e2e")
        .env_remove("PETVIEW_LOG");
    cmd
}
