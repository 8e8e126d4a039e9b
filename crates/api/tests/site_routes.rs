mod support;

use axum::http::{Method, StatusCode};
use support::{TestApp, INDEX_HTML};

#[tokio::test]
async fn test_root_redirects_to_front_end() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .uri("/")
        .body(axum::body::Body::empty())
        .expect("bad request");
    let response = tower::ServiceExt::oneshot(mergington_api::router(app.ctx.clone()), request)
        .await
        .expect("router failed");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(axum::http::header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/static/index.html")
    );
}

#[tokio::test]
async fn test_static_files_served() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/static/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);

    let (status, _) = app.send(Method::GET, "/static/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_directory() {
    let app = TestApp::new();
    app.send(Method::POST, "/activities/Math%20Club/signup?email=ada@mergington.edu").await;

    let (status, body) = app.json(Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_healthy"], true);
    assert_eq!(body["components"][0]["name"], "directory");
    assert_eq!(body["components"][0]["message"], "9 activities, 19 registrations");
    assert_eq!(body["components"][1]["name"], "static_assets");
}
