#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's config and environment.
pub fn bjj() -> Command {
    let mut cmd = cargo_bin_cmd!("bjjdb");
    cmd.env("HOME", test_home())
        .env("APPDATA", test_home())
        .env_remove("BJJDB_DATABASE");
    cmd
}

/// Throwaway HOME so no test reads or writes a real config file.
pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("bjjdb_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bjjdb.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and add drills spanning three categories
pub fn init_db_with_drills(db_path: &str) {
    bjj()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (class, from, todo) in [
        ("escapes", "mount bottom", "bridge and roll"),
        ("escapes", "side control bottom", "frame and shrimp"),
        ("passing", "closed guard top", "posture and open"),
        ("passing", "half guard top", "crossface and flatten"),
        ("sweeps", "butterfly guard", "hook sweep"),
    ] {
        bjj()
            .args([
                "--db", db_path, "drill", "add", "--class", class, "--from", from, "--do", todo,
            ])
            .assert()
            .success();
    }
}
