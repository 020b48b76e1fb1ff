use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, days_ago, get_raw, init_db, put_raw, rco, set_vehicle, setup_test_db, stored_sessions};

#[test]
fn add_derives_fuel_cost_from_vehicle() {
    let db_path = setup_test_db("add_fuel");
    init_db(&db_path);
    set_vehicle(&db_path);

    add_session(&db_path, "2025-06-01", "100", "250");

    let sessions = stored_sessions(&db_path);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].date, "2025-06-01T00:00:00.000Z");
    assert!((sessions[0].fuel_cost - 50.0).abs() < 1e-9);
    assert_eq!(sessions[0].trip_count, 9);
    assert!(!sessions[0].id.is_empty());
}

#[test]
fn add_without_vehicle_warns_and_stores_zero_fuel() {
    let db_path = setup_test_db("add_no_vehicle");
    init_db(&db_path);

    rco()
        .args(["--db", &db_path, "add", "2025-06-01", "--km", "80", "--gross", "abc"])
        .assert()
        .success()
        .stdout(contains("Vehicle profile not found"));

    let sessions = stored_sessions(&db_path);
    assert_eq!(sessions[0].fuel_cost, 0.0);
    assert_eq!(sessions[0].gross_earnings, 0.0);
    assert_eq!(sessions[0].distance_km, 80.0);
}

#[test]
fn add_rejects_invalid_date() {
    let db_path = setup_test_db("add_bad_date");
    init_db(&db_path);

    rco()
        .args(["--db", &db_path, "add", "2025-02-30", "--gross", "100"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert!(stored_sessions(&db_path).is_empty());
}

#[test]
fn edit_keeps_id_and_recomputes_fuel() {
    let db_path = setup_test_db("edit_session");
    init_db(&db_path);
    set_vehicle(&db_path);
    add_session(&db_path, "2025-06-01", "100", "250");
    add_session(&db_path, "2025-06-02", "40", "120");

    let before = stored_sessions(&db_path);
    let id = before[0].id.clone();

    rco()
        .args(["--db", &db_path, "edit", &id, "--km", "60", "--gross", "300"])
        .assert()
        .success()
        .stdout(contains(id.as_str()));

    let after = stored_sessions(&db_path);
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].id, id);
    assert_eq!(after[0].date, before[0].date);
    assert!((after[0].fuel_cost - 30.0).abs() < 1e-9);
    assert_eq!(after[0].gross_earnings, 300.0);
    assert_eq!(after[1], before[1]);
}

#[test]
fn edit_unknown_id_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db(&db_path);

    rco()
        .args(["--db", &db_path, "edit", "missing-id", "--gross", "10"])
        .assert()
        .failure()
        .stderr(contains("No session found"));
}

#[test]
fn del_removes_exactly_one() {
    let db_path = setup_test_db("del_session");
    init_db(&db_path);
    add_session(&db_path, "2025-06-01", "10", "100");
    add_session(&db_path, "2025-06-02", "20", "200");
    add_session(&db_path, "2025-06-03", "30", "300");

    let before = stored_sessions(&db_path);
    let target = before[1].id.clone();

    rco()
        .args(["--db", &db_path, "del", &target, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let after = stored_sessions(&db_path);
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
}

#[test]
fn del_without_confirmation_is_cancelled() {
    let db_path = setup_test_db("del_cancel");
    init_db(&db_path);
    add_session(&db_path, "2025-06-01", "10", "100");
    let id = stored_sessions(&db_path)[0].id.clone();

    rco()
        .args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(stored_sessions(&db_path).len(), 1);
}

#[test]
fn list_by_period_and_range() {
    let db_path = setup_test_db("list_filters");
    init_db(&db_path);
    let recent = days_ago(3);
    let older = days_ago(60);
    add_session(&db_path, &recent, "10", "100");
    add_session(&db_path, &older, "10", "100");
    add_session(&db_path, "2020-03-15", "10", "100");

    rco()
        .args(["--db", &db_path, "list", "--period", "week"])
        .assert()
        .success()
        .stdout(contains(recent.as_str()).and(contains(older.as_str()).not()));

    rco()
        .args(["--db", &db_path, "list", "--period", "year"])
        .assert()
        .success()
        .stdout(contains(recent.as_str()).and(contains(older.as_str())))
        .stdout(contains("2020-03-15").not());

    rco()
        .args(["--db", &db_path, "list", "--range", "2020"])
        .assert()
        .success()
        .stdout(contains("2020-03-15").and(contains(recent.as_str()).not()));

    rco()
        .args(["--db", &db_path, "list", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("3 session(s)"));
}

#[test]
fn list_rejects_period_and_range_together() {
    let db_path = setup_test_db("list_conflict");
    init_db(&db_path);

    rco()
        .args(["--db", &db_path, "list", "--period", "week", "--range", "2025"])
        .assert()
        .failure();
}

#[test]
fn list_empty_period() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    rco()
        .args(["--db", &db_path, "list", "--period", "month"])
        .assert()
        .success()
        .stdout(contains("No sessions found"));
}

#[test]
fn corrupt_sessions_are_reset_with_warning() {
    let db_path = setup_test_db("corrupt_sessions");
    init_db(&db_path);
    put_raw(&db_path, "corridas", "{not json");

    rco()
        .args(["--db", &db_path, "list", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("have been reset"));

    assert!(stored_sessions(&db_path).is_empty());

    // once reset, the warning is gone
    rco()
        .args(["--db", &db_path, "list", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("have been reset").not());
}

#[test]
fn unreadable_dates_are_skipped_and_reported() {
    let db_path = setup_test_db("unreadable_dates");
    init_db(&db_path);
    put_raw(
        &db_path,
        "corridas",
        r#"[{"id":"bad1","data":"ontem","ganhoBruto":50},
            {"id":"ok1","data":"2021-05-04T00:00:00.000Z","ganhoBruto":80}]"#,
    );

    rco()
        .args(["--db", &db_path, "list", "--range", "2021"])
        .assert()
        .success()
        .stdout(contains("ok1").and(contains("bad1")))
        .stdout(contains("unreadable date"));
}

#[test]
fn legacy_record_survives_list_and_add() {
    let db_path = setup_test_db("legacy_record");
    init_db(&db_path);
    put_raw(
        &db_path,
        "corridas",
        r#"[{"id":"good","data":"2021-05-04T00:00:00.000Z","kmRodados":100,
             "gastoGasolina":50,"quantidadeViagens":8,"ganhoBruto":200},
            {"id":"legacy","data":"2021-05-05T00:00:00.000Z","kmRodados":40,
             "gastoGasolina":null,"quantidadeViagens":2.5,"ganhoBruto":90},
            {"id":"nodate","ganhoBruto":10}]"#,
    );

    rco()
        .args(["--db", &db_path, "list", "--range", "2021"])
        .assert()
        .success()
        .stdout(contains("good").and(contains("legacy")))
        .stdout(contains("left untouched: nodate"))
        .stdout(contains("have been reset").not());

    add_session(&db_path, "2021-05-06", "10", "30");

    let sessions = stored_sessions(&db_path);
    let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(&ids[..2], &["good", "legacy"]);
    assert_eq!(sessions[1].trip_count, 2);

    let raw = get_raw(&db_path, "corridas").unwrap();
    assert!(raw.contains("\"nodate\""));
}
