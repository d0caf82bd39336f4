//! Test helper utilities for reqres-contract unit tests
//!
//! Canned response bodies mirror what reqres.in returns for the fixtures the
//! contract cases depend on.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::client::ApiResponse;
use crate::endpoints::Endpoint;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Build an [`ApiResponse`] as the HTTP client would have produced it.
pub fn api_response(endpoint: Endpoint, status: u16, body: Option<Value>) -> ApiResponse {
    let raw_body = body.as_ref().map(Value::to_string).unwrap_or_default();
    ApiResponse {
        endpoint,
        status: StatusCode::from_u16(status).expect("valid status code"),
        body,
        raw_body,
    }
}

pub fn user_json(id: u32, email: &str, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "first_name": first_name,
        "last_name": last_name,
        "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg")
    })
}

pub fn support_json() -> Value {
    json!({
        "url": "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral",
        "text": "Tired of writing endless social media content? Let Content Caddy generate it for you."
    })
}

/// Body of `GET /api/users/2`
pub fn single_user_body() -> Value {
    json!({
        "data": user_json(2, "janet.weaver@reqres.in", "Janet", "Weaver"),
        "support": support_json()
    })
}

/// Body of `GET /api/users?page=2`
pub fn user_page_body() -> Value {
    json!({
        "page": 2,
        "per_page": 6,
        "total": 12,
        "total_pages": 2,
        "data": [
            user_json(7, "michael.lawson@reqres.in", "Michael", "Lawson"),
            user_json(8, "lindsay.ferguson@reqres.in", "Lindsay", "Ferguson"),
            user_json(9, "tobias.funke@reqres.in", "Tobias", "Funke"),
            user_json(10, "byron.fields@reqres.in", "Byron", "Fields"),
            user_json(11, "george.edwards@reqres.in", "George", "Edwards"),
            user_json(12, "rachel.howell@reqres.in", "Rachel", "Howell")
        ],
        "support": support_json()
    })
}

pub fn created_user_body() -> Value {
    json!({
        "name": "vicky",
        "job": "teacher",
        "id": "457",
        "createdAt": "2025-06-01T12:30:45.123Z"
    })
}

pub fn updated_user_body() -> Value {
    json!({
        "name": "vicky",
        "job": "teacher",
        "updatedAt": "2025-06-01T12:31:02.456Z"
    })
}

pub fn register_success_body() -> Value {
    json!({ "id": 4, "token": "QpwL5tke4Pnpja7X4" })
}

pub fn register_failure_body() -> Value {
    json!({ "error": "Missing email or username" })
}
