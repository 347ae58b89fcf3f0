#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const DAY_TEMPLATE: &str = "## Notes\n\nLinks: ";
pub const MONTH_TEMPLATE: &str = "## Goals\n\nYear: ";

#[allow(deprecated)]
pub fn mdcal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mdcal").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `templates/day.txt` and `templates/month.txt` under `root`
pub fn write_templates(root: &Path) {
    let templates = root.join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("day.txt"), DAY_TEMPLATE).unwrap();
    fs::write(templates.join("month.txt"), MONTH_TEMPLATE).unwrap();
}
