#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wlg() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test log path inside the system temp dir and remove any
/// existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Write a small log fixture: three entries, already in date order
pub fn write_fixture(log_path: &str) {
    fs::write(
        log_path,
        "Date,Title,Time,Notes\n\
         2024-01-05,Alpha,30,first entry\n\
         2024-01-05,Beta,45,second entry\n\
         2024-01-06,Gamma,30,third entry\n",
    )
    .expect("failed to write fixture");
}
