//! Test helper functions for API integration tests
//!
//! Provides utility functions for issuing requests against an in-process
//! router and reading their bodies.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Issue a GET request and return status and body text
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Execute a GraphQL query and return the decoded response body
pub async fn graphql(app: Router, query: &str) -> Value {
    graphql_with_variables(app, query, json!({})).await
}

/// Execute a GraphQL query with variables and return the decoded response body
pub async fn graphql_with_variables(app: Router, query: &str, variables: Value) -> Value {
    let body = json!({ "query": query, "variables": variables });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Collect a string field from every edge node of a connection
pub fn node_field(connection: &Value, field: &str) -> Vec<String> {
    connection["edges"]
        .as_array()
        .map(|edges| {
            edges
                .iter()
                .filter_map(|edge| edge["node"][field].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Error codes carried by a GraphQL response
pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["extensions"]["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
