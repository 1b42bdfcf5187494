use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;

/// JSON error envelope shared by every failing endpoint. The `code` is a
/// stable machine token; the message is the human-readable Spanish text.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let err = serde_json::json!({
        "error": {
            "message": message,
            "code": code,
        }
    });
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(err.to_string()))
        .unwrap()
}

pub fn not_found(message: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, "not_found", message)
}
