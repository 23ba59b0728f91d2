use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Mount the users routes onto `router`.
///
/// - `GET    /api/users`       list
/// - `POST   /api/users`       create
/// - `GET    /api/users/{id}`  fetch one
/// - `PUT    /api/users/{id}`  partial update
/// - `DELETE /api/users/{id}`  delete
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let users = Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(Extension(service));

    router.merge(users)
}
