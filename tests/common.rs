//! Test helper utilities for reqres-contract integration tests
//!
//! [`mount_reqres`] stands up a wiremock server that answers the contract's
//! requests the way reqres.in does, and only when the API key header and
//! request bodies are exactly what the cases should send.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use reqres_contract::config::DEFAULT_API_KEY;
use reqres_contract::{ReqresClient, ReqresConfig};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

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

pub fn single_user_body() -> Value {
    json!({
        "data": user_json(2, "janet.weaver@reqres.in", "Janet", "Weaver"),
        "support": support_json()
    })
}

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

/// Client aimed at a mock server with the default API key.
pub fn client_for(server: &MockServer) -> ReqresClient {
    ReqresClient::new(ReqresConfig::with_base_url(server.uri())).expect("valid mock config")
}

/// Mount a faithful reqres stand-in on `server`.
pub async fn mount_reqres(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_page_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_user_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/unknown/23"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/users/"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .and(body_json(json!({ "name": "vicky", "job": "teacher" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created_user_body()))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/users/2"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .and(body_json(json!({ "name": "vicky", "job": "teacher" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated_user_body()))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .and(body_json(
            json!({ "email": "eve.holt@reqres.in", "password": "pistol" }),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 4, "token": "QpwL5tke4Pnpja7X4" })),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(header("x-api-key", DEFAULT_API_KEY))
        .and(body_json(json!({ "password": "pistol" })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Missing email or username" })),
        )
        .mount(server)
        .await;
}
