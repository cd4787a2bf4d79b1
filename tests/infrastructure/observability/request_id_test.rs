use axum::body::Body;
use axum::http::Request;
use axum::middleware;
use axum::routing::get;
use axum::{Extension, Router};
use tower::ServiceExt;

use voxnote::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

fn echo_router() -> Router {
    Router::new()
        .route(
            "/",
            get(|Extension(id): Extension<RequestId>| async move { id.0 }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[tokio::test]
async fn given_supplied_id_when_handling_then_handler_and_response_see_it() {
    let request = Request::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "abc-123")
        .body(Body::empty())
        .unwrap();

    let response = echo_router().oneshot(request).await.unwrap();

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"abc-123");
}

#[tokio::test]
async fn given_empty_id_header_when_handling_then_generates_uuid() {
    let request = Request::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "")
        .body(Body::empty())
        .unwrap();

    let response = echo_router().oneshot(request).await.unwrap();

    let id = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
