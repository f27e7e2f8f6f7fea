use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use restbase_core::http::StatusCode;
use restbase_core::{ApiResponse, HttpError};
use tower::util::ServiceExt;

async fn dispatch(app: Router) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn envelope_status_drives_the_http_status() {
    let app = Router::new().route(
        "/",
        get(|| async {
            ApiResponse::new(StatusCode::UNAUTHORIZED, "no peeking").with_data("secret")
        }),
    );

    let (status, json) = dispatch(app).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        json,
        serde_json::json!({ "status": 401, "message": "no peeking", "data": "secret" })
    );
}

#[tokio::test]
async fn http_error_renders_a_data_less_envelope() {
    let app = Router::new().route(
        "/",
        get(|| async { Err::<ApiResponse<()>, _>(HttpError::missing_body()) }),
    );

    let (status, json) = dispatch(app).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({ "status": 400, "message": "the request body is missing" })
    );
}

#[tokio::test]
async fn internal_error_maps_to_500() {
    let app = Router::new().route(
        "/",
        get(|| async { Err::<ApiResponse<()>, _>(HttpError::Internal("backend down".into())) }),
    );

    let (status, json) = dispatch(app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "backend down");
}
