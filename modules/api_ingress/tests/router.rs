use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::util::ServiceExt;
use utoipa::OpenApi;

use api_ingress::problem::APPLICATION_PROBLEM_JSON;
use api_ingress::{ApiIngress, ApiIngressConfig};

#[derive(OpenApi)]
#[openapi(info(title = "test api"))]
struct TestDoc;

fn ingress(enable_docs: bool) -> ApiIngress {
    ApiIngress::new(ApiIngressConfig {
        enable_docs,
        ..Default::default()
    })
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, content_type, json)
}

#[tokio::test]
async fn health_is_served_on_root_and_health() {
    for uri in ["/", "/health"] {
        let router = ingress(false).build_router(Router::new(), None).unwrap();
        let (status, _, json) = get_json(router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json["health"], "ok");
        assert!(json["timestamp"].is_string());
    }
}

#[tokio::test]
async fn module_routes_are_merged() {
    let routes = Router::new().route("/api/ping", get(|| async { "pong" }));
    let router = ingress(false).build_router(routes, None).unwrap();

    let response = router
        .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_renders_problem() {
    let router = ingress(false).build_router(Router::new(), None).unwrap();
    let (status, content_type, json) = get_json(router, "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type.as_deref(), Some(APPLICATION_PROBLEM_JSON));
    assert_eq!(json["status"], 404);
    assert_eq!(json["instance"], "/nope");
}

#[tokio::test]
async fn openapi_served_only_when_enabled() {
    let router = ingress(true)
        .build_router(Router::new(), Some(TestDoc::openapi()))
        .unwrap();
    let (status, _, json) = get_json(router, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "test api");

    let router = ingress(false)
        .build_router(Router::new(), Some(TestDoc::openapi()))
        .unwrap();
    let (status, _, _) = get_json(router, "/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
