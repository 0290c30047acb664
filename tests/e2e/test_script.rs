use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

fn script_of(response: &helpers::api_client::ApiResponse) -> String {
    response
        .body
        .as_ref()
        .and_then(|b| b.get("script"))
        .and_then(|s| s.as_str())
        .expect("Missing script field")
        .to_string()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fill_every_slot_with_the_prompt(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/generate-script", &json!({ "prompt": "budget travel" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let script = script_of(&response);

    assert!(script.starts_with("🎬 AI SCRIPT FOR: budget travel"));
    assert!(script.contains("EVERYTHING about budget travel"));
    assert!(script.contains("\"budget travel\""));
    assert_eq!(script.matches("budget travel").count(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_fallback_text_for_empty_prompt(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/generate-script", &json!({ "prompt": "" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let script = script_of(&response);

    assert!(script.contains("AI SCRIPT FOR: Your Topic"));
    assert!(script.contains("EVERYTHING about success"));
    assert!(script.contains("Most people miss this simple trick"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_treat_missing_prompt_as_empty(ctx: &TestContext) {
    let empty = ctx
        .client
        .post("/api/generate-script", &json!({ "prompt": "" }))
        .await
        .unwrap();
    let missing = ctx
        .client
        .post("/api/generate-script", &json!({}))
        .await
        .unwrap();

    missing.assert_status(StatusCode::OK);
    assert_eq!(script_of(&missing), script_of(&empty));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_malformed_bodies(ctx: &TestContext) {
    for body in ["not json", "[1, 2, 3]", ""] {
        let response = ctx
            .client
            .post_raw("/api/generate-script", body, Some("application/json"))
            .await
            .unwrap();

        response.assert_status(StatusCode::OK);
        assert!(script_of(&response).contains("Your Topic"));
    }

    // No content type at all
    let response = ctx
        .client
        .post_raw("/api/generate-script", r#"{"prompt":"cats"}"#, None)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert!(script_of(&response).contains("AI SCRIPT FOR: cats"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_coerce_non_string_prompts(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/generate-script", &json!({ "prompt": 2026 }))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert!(script_of(&response).contains("AI SCRIPT FOR: 2026"));

    let response = ctx
        .client
        .post("/api/generate-script", &json!({ "prompt": ["a", "b"] }))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert!(script_of(&response).contains("AI SCRIPT FOR: Your Topic"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_call_the_speech_provider(ctx: &TestContext) {
    ctx.client
        .post("/api/generate-script", &json!({ "prompt": "x" }))
        .await
        .unwrap();

    assert!(ctx.tts.calls().is_empty());
}
