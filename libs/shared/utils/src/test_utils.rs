use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
};
use serde::Serialize;
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub booking_delay_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self { booking_delay_ms: 0 }
    }
}

impl TestConfig {
    pub fn with_delay(booking_delay_ms: u64) -> Self {
        Self { booking_delay_ms }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            booking_delay_ms: self.booking_delay_ms,
            catalog_path: None,
        }
    }
}

/// A completed booking form as posted by a patient.
#[derive(Debug, Clone, Serialize)]
pub struct TestBookingForm {
    pub patient_name: String,
    pub email: String,
    pub date: String,
    pub time: String,
}

impl TestBookingForm {
    pub fn new(date: &str, time: &str) -> Self {
        Self {
            patient_name: "Jane Patient".to_string(),
            email: "jane@example.com".to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap()
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn post_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
