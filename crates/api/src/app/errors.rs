use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_infra::StoreError;
use stockroom_inventory::FieldError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 400 carrying every field-level validation message.
pub fn validation_error(violations: Vec<FieldError>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "fields": violations,
        })),
    )
        .into_response()
}

/// 404 with an empty body: an expected negative-lookup outcome, not a fault.
pub fn not_found() -> axum::response::Response {
    StatusCode::NOT_FOUND.into_response()
}

/// Storage failures are not handled beyond logging; the request fails.
pub fn store_error(err: StoreError) -> axum::response::Response {
    tracing::error!("storage failure: {err}");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        err.to_string(),
    )
}
