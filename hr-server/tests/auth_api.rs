//! HTTP-level tests for login, menus and capability gates
//!
//! Drives the real router with tower's `oneshot`, no TCP involved.

mod common;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> (Router, tempfile::TempDir) {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let state = common::seeded_state(&work_dir).await;
    (hr_server::api::build_router(state), work_dir)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

async fn token_for(app: &Router, username: &str) -> String {
    let (status, body) = login(app, username, "123").await;
    assert_eq!(status, StatusCode::OK, "demo login should succeed");
    body["token"].as_str().expect("token").to_string()
}

async fn get_authed(app: &Router, path: &str, token: &str) -> axum::response::Response {
    let request = Request::get(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn login_returns_token_and_user_info() {
    let (app, _dir) = test_app().await;

    let (status, body) = login(&app, "nhanvien", "123").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "nhanvien");
    assert_eq!(body["user"]["role"], "NhanVien");
    assert_eq!(body["user"]["full_name"], "Nguyễn Văn An");
}

#[tokio::test]
async fn login_rejects_wrong_password_with_unified_message() {
    let (app, _dir) = test_app().await;

    let (status, body) = login(&app, "nhanvien", "wrong").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");

    // Unknown user gets the identical error shape
    let (status, body2) = login(&app, "ghost", "123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body2["message"], body["message"]);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (app, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/api/menu").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["code"], "E3001");
}

#[tokio::test]
async fn health_is_public() {
    let (app, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn menu_is_derived_from_role() {
    let (app, _dir) = test_app().await;

    let employee = token_for(&app, "nhanvien").await;
    let response = get_authed(&app, "/api/menu", &employee).await;
    assert_eq!(response.status(), StatusCode::OK);
    let menu = read_json(response).await;
    let ids: Vec<_> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["home", "leave-submission"]);

    let hr = token_for(&app, "qlns").await;
    let response = get_authed(&app, "/api/menu", &hr).await;
    let menu = read_json(response).await;
    let ids: Vec<_> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["home", "contracts"]);
}

#[tokio::test]
async fn employee_cannot_reach_approval_or_contract_routes() {
    let (app, _dir) = test_app().await;
    let employee = token_for(&app, "nhanvien").await;

    let response = get_authed(&app, "/api/leave-requests/pending", &employee).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await["code"], "E2001");

    let response = get_authed(&app, "/api/contracts", &employee).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn leave_request_flow_over_http() {
    let (app, _dir) = test_app().await;

    // Employee submits
    let employee = token_for(&app, "nhanvien").await;
    let request = Request::post("/api/leave-requests")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {employee}"))
        .body(Body::from(
            json!({
                "leave_type": "Annual",
                "start_date": "2024-03-01",
                "end_date": "2024-03-05",
                "reason": "nghi phep nam"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = read_json(response).await;
    assert_eq!(created["status"], "Pending");
    let id = created["id"].as_str().unwrap().to_string();

    // Supervisor sees it in the pending list, with the submitter's name
    let supervisor = token_for(&app, "truongbp").await;
    let response = get_authed(&app, "/api/leave-requests/pending", &supervisor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let pending = read_json(response).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["full_name"], "Nguyễn Văn An");

    // Approve it
    let request = Request::post(format!("/api/leave-requests/{id}/approve"))
        .header(header::AUTHORIZATION, format!("Bearer {supervisor}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "Approved");

    // A second decision on the same request conflicts
    let request = Request::post(format!("/api/leave-requests/{id}/reject"))
        .header(header::AUTHORIZATION, format!("Bearer {supervisor}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(response).await["code"], "E0004");

    // And the pending list is empty again
    let response = get_authed(&app, "/api/leave-requests/pending", &supervisor).await;
    assert!(read_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn submission_requires_both_dates() {
    let (app, _dir) = test_app().await;
    let employee = token_for(&app, "nhanvien").await;

    let request = Request::post("/api/leave-requests")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {employee}"))
        .body(Body::from(
            json!({
                "leave_type": "Sick",
                "start_date": "",
                "end_date": "2024-03-05"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["code"], "E0002");
}

#[tokio::test]
async fn contract_list_and_pdf_export() {
    let (app, _dir) = test_app().await;
    let hr = token_for(&app, "qlns").await;

    let response = get_authed(&app, "/api/contracts", &hr).await;
    assert_eq!(response.status(), StatusCode::OK);
    let contracts = read_json(response).await;
    let rows = contracts.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        assert!(row["salary_display"].as_str().unwrap().ends_with(" VND"));
    }
    assert!(rows.iter().any(|r| r["active"] == false));

    let response = get_authed(&app, "/api/contracts/export", &hr).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("attachment")
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn logout_is_acknowledged() {
    let (app, _dir) = test_app().await;
    let token = token_for(&app, "nhanvien").await;

    let request = Request::post("/api/auth/logout")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
