use axum::{body::Body, http::Response};

/// Largest response body read by tests
const BODY_LIMIT: usize = 1024 * 1024;

/// Read a response body into a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}
