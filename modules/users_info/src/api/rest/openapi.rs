use utoipa::OpenApi;

use api_ingress::problem::{Problem, ValidationError};

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto, UserEnvelope, UserListEnvelope};
use crate::api::rest::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "CRUD over in-memory user records"),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::update_user,
        handlers::delete_user
    ),
    components(schemas(
        UserDto,
        UserEnvelope,
        UserListEnvelope,
        CreateUserReq,
        UpdateUserReq,
        Problem,
        ValidationError
    )),
    tags((name = "users", description = "User records"))
)]
pub struct UsersApiDoc;
