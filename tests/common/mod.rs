use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Command isolated to `dir`: its own config file and entries file
pub fn diarist_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diarist").unwrap();
    cmd.env_remove("DIARIST_LOG");
    cmd.env("DIARIST_CONFIG", dir.join("config.toml"));
    cmd.env("DIARIST_FILE", entries_file(dir));
    cmd
}

pub fn entries_file(dir: &Path) -> PathBuf {
    dir.join("entries.json")
}

#[allow(dead_code)]
pub fn add_entry(dir: &Path, title: &str, content: &str) {
    diarist_cmd(dir)
        .arg("add")
        .arg(title)
        .arg("--content")
        .arg(content)
        .assert()
        .success();
}
