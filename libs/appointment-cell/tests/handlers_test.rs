// libs/appointment-cell/tests/handlers_test.rs

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use appointment_cell::router::appointment_routes;
use appointment_cell::services::{AppointmentBookingService, AppointmentStore};
use doctor_cell::services::DoctorCatalog;
use shared_utils::test_utils::{body_json, get_request, json_request, post_request, TestBookingForm, TestConfig};

fn create_test_app(delay_ms: u64) -> Router {
    let service = AppointmentBookingService::new(
        &TestConfig::with_delay(delay_ms).to_app_config(),
        Arc::new(DoctorCatalog::default()),
        AppointmentStore::new(),
    );
    appointment_routes(Arc::new(service))
}

async fn book_and_wait(app: &Router, doctor_id: &str, date: &str, time: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/doctors/{}?wait=true", doctor_id),
            &TestBookingForm::new(date, time).to_json(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_book_appointment_and_wait() {
    let app = create_test_app(0);

    let body = book_and_wait(&app, "1", "2025-01-20", "10:00").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["appointment"]["status"], "confirmed");
    assert_eq!(body["appointment"]["doctor_name"], "Dr. Sarah Johnson");
    assert_eq!(body["appointment"]["date"], "2025-01-20");
    assert_eq!(body["receipt"]["date_label"], "Monday, January 20, 2025");

    let response = app.clone().oneshot(get_request("/")).await.unwrap();
    let state = body_json(response).await;
    assert_eq!(state["appointments"].as_array().unwrap().len(), 1);
    assert_eq!(state["loading"], false);
    assert_eq!(state["error"], serde_json::Value::Null);
}

#[tokio::test(start_paused = true)]
async fn test_book_appointment_returns_before_the_delay() {
    let app = create_test_app(1000);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/doctors/2",
            &TestBookingForm::new("2025-01-23", "14:00").to_json(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = body_json(response).await;
    assert_eq!(body["receipt"]["doctor_name"], "Dr. Michael Chen");

    let state = body_json(app.clone().oneshot(get_request("/")).await.unwrap()).await;
    assert_eq!(state["loading"], true);
    assert!(state["appointments"].as_array().unwrap().is_empty());

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    let state = body_json(app.clone().oneshot(get_request("/")).await.unwrap()).await;
    assert_eq!(state["loading"], false);
    assert_eq!(state["appointments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_book_with_invalid_form_returns_field_errors() {
    let app = create_test_app(0);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/doctors/1",
            &json!({ "patient_name": "Jane", "email": "jane@" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["fields"]["email"], "Please enter a valid email address");
    assert_eq!(body["fields"]["date"], "Please select a date");
    assert_eq!(body["fields"]["time"], "Please select a time slot");
    assert!(body["fields"].get("patient_name").is_none());
}

#[tokio::test]
async fn test_book_on_leave_doctor_is_conflict() {
    let app = create_test_app(0);

    let response = app
        .oneshot(json_request(
            "POST",
            "/doctors/5",
            &TestBookingForm::new("2025-01-20", "09:00").to_json(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_book_unknown_doctor_is_not_found() {
    let app = create_test_app(0);

    let response = app
        .oneshot(json_request(
            "POST",
            "/doctors/77",
            &TestBookingForm::new("2025-01-20", "09:00").to_json(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_options_list_dates() {
    let app = create_test_app(0);

    let response = app.oneshot(get_request("/doctors/3/options")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["bookable"], true);
    assert_eq!(body["dates"][0]["date"], "2025-01-22");
    assert_eq!(body["dates"][0]["slot_count"], 2);
    assert_eq!(body["dates"][1]["label"], "Thursday, January 23, 2025");
}

#[tokio::test]
async fn test_get_and_cancel_appointment() {
    let app = create_test_app(0);
    let booked = book_and_wait(&app, "6", "2025-01-22", "16:00").await;
    let id = booked["appointment"]["id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(get_request(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "confirmed");

    let response = app
        .clone()
        .oneshot(post_request(&format!("/{}/cancel", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["appointment"]["status"], "cancelled");

    let response = app.clone().oneshot(get_request("/doctors/6")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["appointments"][0]["status"], "cancelled");
}

#[tokio::test]
async fn test_cancel_unknown_appointment_is_not_found() {
    let app = create_test_app(0);
    book_and_wait(&app, "1", "2025-01-22", "09:00").await;

    let response = app
        .clone()
        .oneshot(post_request(&format!("/{}/cancel", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let state = body_json(app.oneshot(get_request("/")).await.unwrap()).await;
    assert_eq!(state["appointments"][0]["status"], "confirmed");
}

#[tokio::test]
async fn test_get_unknown_appointment_is_not_found() {
    let app = create_test_app(0);
    book_and_wait(&app, "1", "2025-01-22", "09:00").await;

    let response = app
        .oneshot(get_request(&format!("/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Appointment not found");
}

#[tokio::test]
async fn test_malformed_appointment_id_returns_json_error() {
    let app = create_test_app(0);

    for request in [get_request("/not-a-uuid"), post_request("/not-a-uuid/cancel")] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_malformed_booking_body_returns_json_error() {
    let app = create_test_app(0);

    let request = Request::builder()
        .method("POST")
        .uri("/doctors/1")
        .header("content-type", "application/json")
        .body(Body::from("{\"patient_name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/doctors/1")
        .body(Body::from(TestBookingForm::new("2025-01-20", "09:00").to_json().to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["error"].is_string());

    let state = body_json(app.oneshot(get_request("/")).await.unwrap()).await;
    assert!(state["appointments"].as_array().unwrap().is_empty());
    assert_eq!(state["loading"], false);
}
