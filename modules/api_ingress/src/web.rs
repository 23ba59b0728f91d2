use axum::{http::Uri, response::Json, Extension};
use serde_json::{json, Value};

use crate::problem::{not_found, ProblemResponse};
use crate::request_id::XRequestId;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "health": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Fallback for unmatched routes.
pub async fn route_not_found(uri: Uri, rid: Option<Extension<XRequestId>>) -> ProblemResponse {
    let problem = not_found(format!("no route for {}", uri.path()))
        .0
        .with_instance(uri.path())
        .with_request_id(rid.map(|Extension(XRequestId(id))| id));
    ProblemResponse(problem)
}
