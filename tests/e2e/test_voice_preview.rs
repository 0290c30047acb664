use crate::e2e::helpers;

use helpers::assertions::{assert_audio_response, assert_error_body};
use helpers::{MockTtsRepository, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_audio_for_a_preview(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/preview-voice",
            &json!({ "text": "hello", "voice": "en-US-AvaNeural", "rate": 1.0 }),
        )
        .await
        .unwrap();

    assert_audio_response(&response);

    let call = ctx.tts.last_call();
    assert_eq!(call.text, "hello");
    assert_eq!(call.voice, "en-US-AvaNeural");
    assert_eq!(call.rate.as_offset_string(), "+0%");
    assert_eq!(response.body_bytes, MockTtsRepository::audio_for(&call));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_store_the_preview_under_its_timestamp(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/preview-voice", &json!({ "text": "hello" }))
        .await
        .unwrap();

    assert_audio_response(&response);
    response.assert_header_exists("x-artifact-id");

    let id = response.header("x-artifact-id").unwrap();
    assert!(id.chars().all(|c| c.is_ascii_digit()), "not unix seconds: {}", id);

    let stored = tokio::fs::read(ctx.audio_path(&format!("preview_{}.mp3", id)))
        .await
        .unwrap();
    assert_eq!(stored, response.body_bytes);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_truncate_preview_text_to_100_characters(ctx: &TestContext) {
    let text = "word ".repeat(60);

    let response = ctx
        .client
        .post("/api/preview-voice", &json!({ "text": text }))
        .await
        .unwrap();

    assert_audio_response(&response);
    let call = ctx.tts.last_call();
    assert_eq!(call.text.chars().count(), 100);
    assert!(text.starts_with(&call.text));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_defaults_for_missing_fields(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/preview-voice", &json!({}))
        .await
        .unwrap();

    assert_audio_response(&response);
    let call = ctx.tts.last_call();
    assert_eq!(call.text, "Preview of your voice");
    assert_eq!(call.voice, "en-US-AvaNeural");
    assert_eq!(call.rate.as_offset_string(), "+0%");
    response.assert_header("x-voice-used", "en-US-AvaNeural");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_for_empty_voice_and_bad_rate(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/preview-voice",
            &json!({ "text": "hi", "voice": "", "rate": "very fast" }),
        )
        .await
        .unwrap();

    assert_audio_response(&response);
    let call = ctx.tts.last_call();
    assert_eq!(call.voice, "en-US-AvaNeural");
    assert_eq!(call.rate.as_offset_string(), "+0%");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_rate_as_percentage_offset(ctx: &TestContext) {
    let cases = [(1.2, "+10%"), (0.8, "-10%"), (1.5, "+25%"), (2.0, "+50%")];

    for (rate, expected) in cases {
        let response = ctx
            .client
            .post(
                "/api/preview-voice",
                &json!({ "text": "hi", "voice": "en-GB-SoniaNeural", "rate": rate }),
            )
            .await
            .unwrap();

        assert_audio_response(&response);
        let call = ctx.tts.last_call();
        assert_eq!(call.voice, "en-GB-SoniaNeural");
        assert_eq!(call.rate.as_offset_string(), expected, "rate {}", rate);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_numeric_strings_for_rate(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/preview-voice", &json!({ "text": "hi", "rate": "1.2" }))
        .await
        .unwrap();

    assert_audio_response(&response);
    assert_eq!(ctx.tts.last_call().rate.as_offset_string(), "+10%");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_synthesis_failures_as_json(ctx: &TestContext) {
    ctx.tts.fail_with("voice not available");

    let response = ctx
        .client
        .post("/api/preview-voice", &json!({ "text": "hi", "voice": "xx-XX-Nobody" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_header("content-type", "application/json");
    assert_error_body(&response, "EXTERNAL_SERVICE");
    response.assert_error_message("voice not available");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_storage_failures_as_json(ctx: &TestContext) {
    tokio::fs::remove_dir_all(&ctx.config.audio_dir).await.unwrap();

    let response = ctx
        .client
        .post("/api/preview-voice", &json!({ "text": "hi" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_body(&response, "STORAGE");
}
