//! HTTP metrics recorded through the router.
//!
//! Lives in its own test binary: it installs the process-wide recorder.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bingo::{CallerActor, GameEngine};
use bingo_server::api::{AppState, create_router, request_id::UNMATCHED_ROUTE};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::collections::BTreeSet;
use tower::ServiceExt; // For `oneshot` method

/// Distinct `path` labels of the `http_requests_total` series
fn request_path_labels(rendered: &str) -> BTreeSet<String> {
    rendered
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .filter_map(|line| {
            let start = line.find("path=\"")? + "path=\"".len();
            let len = line[start..].find('"')?;
            Some(line[start..start + len].to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_http_metrics_use_route_templates() {
    let handle = PrometheusBuilder::new().install_recorder().unwrap();
    let caller = CallerActor::spawn(GameEngine::with_seed(3), 16);
    let app = create_router(AppState { caller });

    for i in 0..50 {
        let request = Request::builder()
            .uri(format!("/scan-{i}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let request = Request::builder()
        .method("POST")
        .uri("/api/game/new")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"type": "keno"}"#))
        .unwrap();
    assert_eq!(app.clone().oneshot(request).await.unwrap().status(), StatusCode::OK);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    assert_eq!(app.oneshot(request).await.unwrap().status(), StatusCode::OK);

    let paths = request_path_labels(&handle.render());
    let expected: BTreeSet<String> = [UNMATCHED_ROUTE, "/api/game/new", "/health"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(paths, expected);
}
