//! Company routes: create, delete, get by owner.

use axum::http::StatusCode;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::*;

#[tokio::test]
async fn test_create_company() {
    let (app, _state) = test_app();
    let auth = register_default_owner(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Acme Corp1");
    assert!(body["owner_id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_company_unknown_owner_is_401() {
    let (app, _state) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/company",
        Some(credentials("Nobody12345", OWNER_PASSWORD).as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["details"], msg::OWNER_NOT_FOUND);
}

#[tokio::test]
async fn test_create_company_wrong_password_is_403() {
    let (app, _state) = test_app();
    register_default_owner(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/company",
        Some(credentials(OWNER_NAME, "WrongPassword1").as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_second_company_is_400() {
    let (app, _state) = test_app();
    let auth = register_default_owner(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Beta Corp2" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], msg::OWNER_HAS_COMPANY);
}

#[tokio::test]
async fn test_company_name_taken_is_400() {
    let (app, state) = test_app();
    {
        let conn = state.db.get().unwrap();
        let other = create_test_owner(&conn, "Bobby1234567", OWNER_PASSWORD);
        create_test_company(&conn, &other, "Acme Corp1");
    }
    let auth = register_default_owner(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], msg::COMPANY_NAME_TAKEN);
}

#[tokio::test]
async fn test_delete_other_owners_company_is_400() {
    let (app, state) = test_app();
    {
        let conn = state.db.get().unwrap();
        let other = create_test_owner(&conn, "Bobby1234567", OWNER_PASSWORD);
        create_test_company(&conn, &other, "Beta Corp2");
    }
    let auth = register_default_owner(&app).await;

    let (status, _) = send(
        &app,
        "DELETE",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Beta Corp2" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let conn = state.db.get().unwrap();
    assert!(
        queries::get_company_by_name(&conn, "Beta Corp2").unwrap().is_some(),
        "another owner's company must not be deleted"
    );
}

#[tokio::test]
async fn test_delete_then_recreate_company() {
    let (app, _state) = test_app();
    let auth = register_default_owner(&app).await;

    send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;

    let (status, body) = send(
        &app,
        "DELETE",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, _) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Beta Corp2" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "a new company is allowed after deletion");
}

#[tokio::test]
async fn test_get_company_by_owner() {
    let (app, _state) = test_app();
    let auth = register_default_owner(&app).await;

    let (status, _) = send(&app, "GET", "/company/by/owner", Some(auth.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "no company yet");

    let (_, created) = send(
        &app,
        "POST",
        "/company",
        Some(auth.as_str()),
        Some(json!({ "name": "Acme Corp1" })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/company/by/owner", Some(auth.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], "Acme Corp1");
    assert_eq!(body["owner_id"], created["owner_id"]);
}
