use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add_session, init_db, rco, set_vehicle, setup_test_db, temp_out};

fn seeded(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    set_vehicle(&db_path);
    add_session(&db_path, "2025-05-20", "100", "260");
    add_session(&db_path, "2025-06-02", "40", "120");
    add_session(&db_path, "2025-06-18", "60", "180");
    db_path
}

#[test]
fn export_csv_with_range() {
    let db_path = seeded("export_csv_range");
    let out = temp_out("export_csv_range", "csv");

    rco()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-06",
        ])
        .assert()
        .success()
        .stdout(contains("2 sessions"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,hours_worked,distance_km,fuel_cost,trip_count,gross_earnings,after_fuel")
    );
    assert!(content.contains("2025-06-02"));
    assert!(content.contains("2025-06-18"));
    assert!(!content.contains("2025-05-20"));
}

#[test]
fn export_json_all() {
    let db_path = seeded("export_json_all");
    let out = temp_out("export_json_all", "json");

    rco()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["date"], "2025-05-20");
    assert_eq!(rows[0]["fuel_cost"], 50.0);
    assert_eq!(rows[0]["after_fuel"], 210.0);
}

#[test]
fn export_requires_absolute_path() {
    let db_path = seeded("export_relative");

    rco()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_existing_file_needs_force() {
    let db_path = seeded("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    rco()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rco()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn backup_plain_and_compressed() {
    let db_path = seeded("backup_db");
    let out = temp_out("backup_db", "sqlite");
    let zip = temp_out("backup_db", "zip");

    rco()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&out).exists());

    rco()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn export_of_unreadable_collection_is_logged_as_reset() {
    let db_path = setup_test_db("export_reset_log");
    init_db(&db_path);
    common::put_raw(&db_path, "corridas", "{not json");
    let out = temp_out("export_reset_log", "csv");

    rco()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("have been reset"))
        .stdout(contains("No sessions found"));

    rco()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Unreadable sessions reset"));
}
