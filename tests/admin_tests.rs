use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, init_db, put_raw, rco, setup_test_db, stored_sessions};
use rcorridas::db::pool::DbPool;
use rcorridas::models::session::WorkSession;

#[test]
fn log_records_mutations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);
    add_session(&db_path, "2025-06-01", "10", "100");

    rco()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"))
        .stdout(contains("Session added"));
}

#[test]
fn db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    add_session(&db_path, "2025-06-01", "10", "100");

    rco()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("corridas"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn config_print_in_test_mode() {
    rco()
        .args(["--test", "--db", "/tmp/cfg_print.sqlite", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database: /tmp/cfg_print.sqlite"))
        .stdout(contains("currency_symbol:"));
}

fn seed_recovery(db_path: &str) {
    put_raw(
        db_path,
        "corridas_antigas",
        r#"[{"id":"old1","data":"2024-01-10T00:00:00.000Z","ganhoBruto":90},
            {"id":"old2","data":"2024-01-11T00:00:00.000Z","ganhoBruto":70}]"#,
    );
    put_raw(db_path, "corridas_lixo", "\"nope\"");
    put_raw(
        db_path,
        "usuarios_cadastrados",
        r#"[{"id":"u7","nome":"Rita","email":"rita@example.com"}]"#,
    );
}

#[test]
fn recover_scans_and_restores() {
    let db_path = setup_test_db("recover_restore");
    init_db(&db_path);
    add_session(&db_path, "2024-01-12", "10", "100");
    seed_recovery(&db_path);

    rco()
        .args(["--db", &db_path, "recover"])
        .assert()
        .success()
        .stdout(contains("old1").and(contains("old2")))
        .stdout(contains("3 unique session(s)"))
        .stdout(contains("corridas_lixo"));

    rco()
        .args(["--db", &db_path, "recover", "--email", "RITA@example.com"])
        .assert()
        .success()
        .stdout(contains("3 session(s) restored to Rita"));

    let pool = DbPool::open_ready(&db_path).unwrap();
    let restored: Vec<WorkSession> = pool
        .with_persistence(|p| p.load("corridas_u7", Vec::new()))
        .unwrap();
    assert_eq!(restored.len(), 3);

    // second run adds nothing new
    rco()
        .args(["--db", &db_path, "recover", "--email", "rita@example.com"])
        .assert()
        .success()
        .stdout(contains("0 session(s) restored"));

    // the main collection is never touched
    assert_eq!(stored_sessions(&db_path).len(), 1);
}

#[test]
fn recover_unknown_user_fails() {
    let db_path = setup_test_db("recover_unknown");
    init_db(&db_path);
    seed_recovery(&db_path);

    rco()
        .args(["--db", &db_path, "recover", "--email", "bob@example.com"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
