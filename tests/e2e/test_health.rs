use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    assert_eq!(response.text(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ready_status(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("storage").and_then(|v| v.as_str()), Some("available"));
    assert_eq!(body.get("tts").and_then(|v| v.as_str()), Some("mock"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_not_ready_without_storage(ctx: &TestContext) {
    tokio::fs::remove_dir_all(&ctx.config.output_dir).await.unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(body.get("storage").and_then(|v| v.as_str()), Some("unavailable"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/download/1").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_client_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "client-trace-42")])
        .await
        .unwrap();

    response.assert_header("x-request-id", "client-trace-42");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_any_origin(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("origin", "http://localhost:5500")])
        .await
        .unwrap();

    response.assert_header("access-control-allow-origin", "*");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
