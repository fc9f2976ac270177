use httpmock::prelude::*;
use search_loadgen::core::run_ticks;
use search_loadgen::{LoadgenError, SearchSession, UserTask};

#[tokio::test]
async fn test_health_check_decodes_service_banner() {
    let server = MockServer::start();

    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "message": "Go Product Search Service running",
                "num_products": 100000,
                "checks_per_search": 100
            }));
    });

    let session = SearchSession::new(&server.base_url()).unwrap();

    let health = session.health_check().await.unwrap();

    health_mock.assert();
    assert_eq!(
        health.message.as_deref(),
        Some("Go Product Search Service running")
    );
    assert_eq!(health.num_products, Some(100000));
    assert_eq!(health.checks_per_search, Some(100));
}

#[tokio::test]
async fn test_unhealthy_service_reports_its_status() {
    let server = MockServer::start();

    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(503);
    });

    let session = SearchSession::new(&server.base_url()).unwrap();

    let result = session.health_check().await;

    health_mock.assert();
    assert!(matches!(
        result,
        Err(LoadgenError::ServiceUnavailable { status: 503 })
    ));
}

#[tokio::test]
async fn test_run_ticks_issues_one_request_per_tick() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"total_found": 1}));
    });

    let mut session = SearchSession::new(&server.base_url()).unwrap();

    run_ticks(&mut session, 5).await;

    api_mock.assert_hits(5);
}

#[tokio::test]
async fn test_tick_survives_an_unreachable_service() {
    // Nothing listens here; the tick logs a warning instead of panicking.
    let mut session = SearchSession::new("http://127.0.0.1:1").unwrap();

    session.tick().await;
}
