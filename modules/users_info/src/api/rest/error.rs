use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use api_ingress::problem::{Problem, ProblemResponse, ValidationError};

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance)
        .with_request_id(request_id);

    ProblemResponse(problem)
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(
    e: &DomainError,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    match e {
        DomainError::UserNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "USERS_NOT_FOUND",
            "User not found",
            e.to_string(),
            instance,
            request_id,
        ),
        DomainError::Validation { errors } => {
            let details = errors
                .iter()
                .flat_map(|(field, messages)| {
                    messages.iter().map(move |m| ValidationError {
                        detail: m.clone(),
                        pointer: format!("/{field}"),
                    })
                })
                .collect();

            let mut resp = from_parts(
                StatusCode::BAD_REQUEST,
                "USERS_VALIDATION",
                "Validation error",
                e.to_string(),
                instance,
                request_id,
            );
            resp.0 = resp.0.with_errors(details);
            resp
        }
        DomainError::IdGeneration { .. } => {
            // Keep the cause in the logs, not in the response
            tracing::error!(error = ?e, request_id = ?request_id, "User id generation failed");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "USERS_INTERNAL",
                "Internal error",
                "could not insert user",
                instance,
                request_id,
            )
        }
    }
}

/// Request body that could not be decoded into the expected JSON shape
pub fn invalid_body(
    rejection: &JsonRejection,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    from_parts(
        StatusCode::UNPROCESSABLE_ENTITY,
        "USERS_INVALID_BODY",
        "Invalid request body",
        rejection.body_text(),
        instance,
        request_id,
    )
}

/// Path id that is not a UUID
pub fn invalid_id(err: &uuid::Error, instance: &str, request_id: Option<&str>) -> ProblemResponse {
    from_parts(
        StatusCode::BAD_REQUEST,
        "USERS_INVALID_ID",
        "Invalid id",
        format!("id must be of type uuid: {err}"),
        instance,
        request_id,
    )
}
