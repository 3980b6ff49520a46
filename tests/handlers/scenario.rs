//! End-to-end: register, create company, bulk employees, delete company.

use axum::http::StatusCode;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::*;

#[tokio::test]
async fn test_owner_company_employee_lifecycle() {
    let (app, state) = test_app();

    let (status, owner) = send(
        &app,
        "POST",
        "/create/owner",
        None,
        Some(json!({ "name": "Alice1234567", "password": "Passw0rd12345" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let auth = credentials("Alice1234567", "Passw0rd12345");

    let (status, company) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/create/employees",
        Some(auth.as_str()),
        Some(json!({ "array": [{ "name": "Bob" }, { "name": "Carol" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = send(&app, "GET", "/company/by/owner", Some(auth.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Acme Corp1");
    assert_eq!(fetched["owner_id"], owner["id"], "company should point at the owner");

    let company_id = company["id"].as_str().unwrap().to_string();
    {
        let conn = state.db.get().unwrap();
        assert_eq!(queries::count_employees(&conn, &company_id).unwrap(), 2);
    }

    let (status, _) = send(
        &app,
        "DELETE",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "GET", "/company/by/owner", Some(auth.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "company should be gone");

    let conn = state.db.get().unwrap();
    assert_eq!(
        queries::count_employees(&conn, &company_id).unwrap(),
        0,
        "employees should be deleted with their company"
    );
}
