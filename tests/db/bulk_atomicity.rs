//! Bulk employee insertion is all-or-nothing.

#[path = "../common/mod.rs"]
mod common;

use common::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_bulk_insert_creates_all_rows() {
    let mut conn = setup_test_db();
    let owner = queries::create_owner(&conn, "Alice1234567", "hash").unwrap();
    let company = queries::create_company(&conn, &owner.id, "Acme Corp1").unwrap();

    let created = queries::create_employees(&mut conn, &company.id, &names(&["Bob", "Carol"]))
        .expect("Bulk insert failed");

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|e| e.company_id == company.id));
    assert_ne!(created[0].id, created[1].id, "each employee gets its own ID");
    assert_eq!(queries::count_employees(&conn, &company.id).unwrap(), 2);
}

#[test]
fn test_bulk_insert_rolls_back_on_failure() {
    let mut conn = setup_test_db();
    let owner = queries::create_owner(&conn, "Alice1234567", "hash").unwrap();
    let company = queries::create_company(&conn, &owner.id, "Acme Corp1").unwrap();

    // Fail the second row of the batch.
    conn.execute_batch(
        "CREATE TRIGGER fail_boom BEFORE INSERT ON employees
         WHEN NEW.name = 'Boom'
         BEGIN SELECT RAISE(ABORT, 'boom'); END;",
    )
    .unwrap();

    let result =
        queries::create_employees(&mut conn, &company.id, &names(&["Bob", "Boom", "Carol"]));

    assert!(result.is_err(), "batch with a failing row should fail");
    assert_eq!(
        queries::count_employees(&conn, &company.id).unwrap(),
        0,
        "rows inserted before the failure must be rolled back"
    );
}

#[test]
fn test_bulk_insert_into_missing_company_inserts_nothing() {
    let mut conn = setup_test_db();
    let result = queries::create_employees(&mut conn, "missing", &names(&["Bob"]));

    assert!(result.is_err(), "foreign key should reject the batch");
    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
        .unwrap();
    assert_eq!(total, 0);
}
