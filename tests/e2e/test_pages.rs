use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_fallback_page_without_frontend(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    let content_type = response.header("content-type").unwrap();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);
    assert!(response.text().contains("Backend working!"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_the_frontend_page_when_present(ctx: &TestContext) {
    tokio::fs::write(
        &ctx.config.index_page,
        "<html><body><h1>Shorts Studio</h1></body></html>",
    )
    .await
    .unwrap();

    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.text(),
        "<html><body><h1>Shorts Studio</h1></body></html>"
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_when_page_is_not_utf8(ctx: &TestContext) {
    tokio::fs::write(&ctx.config.index_page, [0xff, 0xfe, 0x00])
        .await
        .unwrap();

    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("Backend working!"));
}
