#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcorridas::db::pool::DbPool;
use rcorridas::models::session::WorkSession;
use rcorridas::store::SESSIONS_KEY;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rco() -> Command {
    cargo_bin_cmd!("rcorridas")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcorridas.sqlite", name));
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

/// `YYYY-MM-DD` of `n` days before today.
pub fn days_ago(n: i64) -> String {
    (chrono::Local::now().date_naive() - chrono::Duration::days(n))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn init_db(db_path: &str) {
    rco()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Efficiency 10 km/l, fuel 5.00, maintenance 365/year, no tax.
pub fn set_vehicle(db_path: &str) {
    rco()
        .args([
            "--db",
            db_path,
            "vehicle",
            "--set",
            "--model",
            "Onix",
            "--year",
            "2020",
            "--efficiency",
            "10",
            "--price",
            "5",
            "--maintenance",
            "365",
        ])
        .assert()
        .success();
}

pub fn add_session(db_path: &str, date: &str, km: &str, gross: &str) {
    rco()
        .args([
            "--db", db_path, "add", date, "--hours", "6", "--km", km, "--trips", "9", "--gross",
            gross,
        ])
        .assert()
        .success();
}

/// Sessions as stored, read through the library.
pub fn stored_sessions(db_path: &str) -> Vec<WorkSession> {
    let pool = DbPool::open_ready(db_path).expect("open db");
    pool.with_persistence(|p| p.load_collection::<WorkSession>(SESSIONS_KEY))
        .expect("load sessions")
        .items
}

/// Write a raw value under `key`, bypassing validation.
pub fn put_raw(db_path: &str, key: &str, value: &str) {
    use rcorridas::store::KeyValueStore;
    let pool = DbPool::open_ready(db_path).expect("open db");
    pool.store().set(key, value).expect("write key");
}

pub fn get_raw(db_path: &str, key: &str) -> Option<String> {
    use rcorridas::store::KeyValueStore;
    let pool = DbPool::open_ready(db_path).expect("open db");
    pool.store().get(key).expect("read key")
}
