use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{info, warn};
use uuid::Uuid;

use api_ingress::problem::{Problem, ProblemResponse};
use api_ingress::request_id::XRequestId;

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserEnvelope, UserListEnvelope};
use crate::api::rest::error::{invalid_body, invalid_id, map_domain_error};
use crate::domain::service::Service;

type ApiResult<T> = Result<T, ProblemResponse>;

/// Request id set by the ingress middleware; absent when mounted without it.
type RequestId = Option<Extension<XRequestId>>;

fn rid(req_id: &RequestId) -> Option<&str> {
    req_id.as_ref().map(|Extension(XRequestId(id))| id.as_str())
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    operation_id = "users_info.list_users",
    responses(
        (status = 200, description = "Every stored user, in no particular order", body = UserListEnvelope)
    )
)]
pub async fn list_users(Extension(svc): Extension<Arc<Service>>) -> Json<UserListEnvelope> {
    info!("Listing users");
    Json(svc.list_users().into())
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    operation_id = "users_info.get_user",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 400, description = "Id is not a UUID", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
    req_id: RequestId,
) -> ApiResult<Json<UserEnvelope>> {
    info!("Getting user with id: {}", id);

    Uuid::parse_str(&id).map_err(|e| invalid_id(&e, uri.path(), rid(&req_id)))?;

    svc.get_user(&id)
        .map(|user| Json(user.into()))
        .map_err(|e| {
            warn!("Failed to get user {}: {}", id, e);
            map_domain_error(&e, uri.path(), rid(&req_id))
        })
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    operation_id = "users_info.create_user",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Created user", body = UserEnvelope),
        (status = 400, description = "Validation failed; every offending field is listed", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Body is not valid JSON", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    req_id: RequestId,
    payload: Result<Json<CreateUserReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserEnvelope>)> {
    let Json(req) = payload.map_err(|rej| invalid_body(&rej, uri.path(), rid(&req_id)))?;
    info!("Creating user");

    svc.create_user(req.into())
        .map(|user| (StatusCode::CREATED, Json(user.into())))
        .map_err(|e| {
            warn!("Failed to create user: {}", e);
            map_domain_error(&e, uri.path(), rid(&req_id))
        })
}

/// Update an existing user; blank fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    operation_id = "users_info.update_user",
    params(("id" = String, Path, description = "User UUID")),
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserEnvelope),
        (status = 400, description = "Validation failed", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Body is not valid JSON", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
    req_id: RequestId,
    payload: Result<Json<UpdateUserReq>, JsonRejection>,
) -> ApiResult<Json<UserEnvelope>> {
    let Json(req) = payload.map_err(|rej| invalid_body(&rej, uri.path(), rid(&req_id)))?;
    info!("Updating user {}", id);

    svc.update_user(&id, req.into())
        .map(|user| Json(user.into()))
        .map_err(|e| {
            warn!("Failed to update user {}: {}", id, e);
            map_domain_error(&e, uri.path(), rid(&req_id))
        })
}

/// Delete a user by ID, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    operation_id = "users_info.delete_user",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Deleted user as it was before removal", body = UserEnvelope),
        (status = 400, description = "Id is not a UUID", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
    req_id: RequestId,
) -> ApiResult<Json<UserEnvelope>> {
    info!("Deleting user: {}", id);

    Uuid::parse_str(&id).map_err(|e| invalid_id(&e, uri.path(), rid(&req_id)))?;

    svc.delete_user(&id)
        .map(|user| Json(user.into()))
        .map_err(|e| {
            warn!("Failed to delete user {}: {}", id, e);
            map_domain_error(&e, uri.path(), rid(&req_id))
        })
}
