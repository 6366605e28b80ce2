//! HTTP integration tests for the Astra advisory API.
//!
//! These use the Axum `oneshot` approach for full end-to-end handler dispatch
//! against the in-memory store and the deterministic template generator, so
//! they run without any external services.

use std::sync::Arc;

use astra_core::{ConversationStore, TemplateGenerator};
use astra_server::http::{build_router, HttpState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn make_app() -> Router {
    let state = Arc::new(HttpState {
        store: Arc::new(ConversationStore::new()),
        generator: Arc::new(TemplateGenerator),
    });
    build_router(state)
}

fn profile_payload() -> Value {
    json!({
        "gradeLevel": "grade-11",
        "intendedMajors": ["Computer Science"],
        "targetUniversities": ["MIT"],
        "currentActivities": "Robotics club member",
        "strengths": "strong GPA, club president",
        "weaknesses": "weak test scores",
        "timeline": "2025-2026",
    })
}

async fn post_chat(app: &Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ===========================================================================
// TEST 1: GET /version — returns version and protocol
// ===========================================================================
#[tokio::test]
async fn test_version_endpoint() {
    let app = make_app();
    let (status, body) = get_json(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["version"].is_string());
    assert_eq!(body["protocol"], "astra/1");
}

// ===========================================================================
// TEST 2: GET /health — healthy, names the generator backend
// ===========================================================================
#[tokio::test]
async fn test_health_endpoint() {
    let app = make_app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["generator"], "template");
}

// ===========================================================================
// TEST 3: initial greeting — empty message + profile creates conversation
// and returns the profile walkthrough
// ===========================================================================
#[tokio::test]
async fn test_initial_greeting_flow() {
    let app = make_app();
    let (status, body) = post_chat(
        &app,
        json!({ "message": "", "profile": profile_payload() }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["role"], "assistant");
    assert!(body["conversationId"].is_string());

    let content = body["message"]["content"].as_str().unwrap();
    // MIT → ivy_plus expectations
    assert!(content.contains("Near-perfect academics (top 1-5% of class, 4.0+ weighted GPA)"));
    // grade-11 priorities
    assert!(content.contains("This is the most critical year for college admissions"));
    // cs knowledge slices
    assert!(content.contains("AP Computer Science A (essential)"));
    assert!(content.contains("USACO (USA Computing Olympiad)"));
    // "president" in strengths → leadership guidance
    assert!(content.contains("Take on higher-level positions (regional, state, national)"));
}

// ===========================================================================
// TEST 4: follow-up topic — competitions question answered from the cs list
// on the same conversation
// ===========================================================================
#[tokio::test]
async fn test_competition_follow_up() {
    let app = make_app();
    let (_, greeting) = post_chat(
        &app,
        json!({ "message": "", "profile": profile_payload() }),
    )
    .await;
    let conversation_id = greeting["conversationId"].as_str().unwrap();

    let (status, body) = post_chat(
        &app,
        json!({
            "message": "What competitions should I do?",
            "conversationId": conversation_id,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["conversationId"], greeting["conversationId"]);
    let content = body["message"]["content"].as_str().unwrap();
    assert!(content.contains("USACO"));
    assert!(content.contains("Google Code Jam / Kick Start"));
    assert!(!content.contains("Let me help with your college admissions journey"));
}

// ===========================================================================
// TEST 5: waterloo topic — answered with Waterloo content even though the
// profile targets MIT
// ===========================================================================
#[tokio::test]
async fn test_waterloo_topic() {
    let app = make_app();
    let (_, greeting) = post_chat(
        &app,
        json!({ "message": "", "profile": profile_payload() }),
    )
    .await;
    let conversation_id = greeting["conversationId"].as_str().unwrap();

    let (status, body) = post_chat(
        &app,
        json!({
            "message": "tell me about waterloo AIF",
            "conversationId": conversation_id,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let content = body["message"]["content"].as_str().unwrap();
    assert!(content.contains("**Waterloo Admissions Strategy**"));
    assert!(content.contains("CCC (Canadian Computing Competition)"));
}

// ===========================================================================
// TEST 6: validation — missing message yields 400 with field-level details
// ===========================================================================
#[tokio::test]
async fn test_validation_error_shape() {
    let app = make_app();
    let (status, body) = post_chat(&app, json!({ "conversationId": "nope" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");

    let details = body["details"].as_array().unwrap();
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"message"));
    assert!(fields.contains(&"conversationId"));
}

// ===========================================================================
// TEST 7: unknown conversation id — explicit 404, no silent new conversation
// ===========================================================================
#[tokio::test]
async fn test_unknown_conversation_is_404() {
    let app = make_app();
    let (status, body) = post_chat(
        &app,
        json!({
            "message": "hello",
            "conversationId": "00000000-0000-4000-8000-000000000000",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Conversation not found");
}

// ===========================================================================
// TEST 8: no profile — reply asks for onboarding, conversation still created
// ===========================================================================
#[tokio::test]
async fn test_chat_without_profile_prompts_onboarding() {
    let app = make_app();
    let (status, body) = post_chat(&app, json!({ "message": "help me with essays" })).await;
    assert_eq!(status, StatusCode::OK);
    let content = body["message"]["content"].as_str().unwrap();
    assert!(content.contains("complete the onboarding questionnaire"));

    let id = body["conversationId"].as_str().unwrap();
    let (status, conversation) = get_json(&app, &format!("/conversation/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    // user turn + assistant turn
    assert_eq!(conversation["messages"].as_array().unwrap().len(), 2);
}

// ===========================================================================
// TEST 9: GET /conversation — full record in append order after two turns
// ===========================================================================
#[tokio::test]
async fn test_conversation_record_ordering() {
    let app = make_app();
    let (_, greeting) = post_chat(
        &app,
        json!({ "message": "", "profile": profile_payload() }),
    )
    .await;
    let conversation_id = greeting["conversationId"].as_str().unwrap();

    post_chat(
        &app,
        json!({
            "message": "What competitions should I do?",
            "conversationId": conversation_id,
        }),
    )
    .await;

    let (status, body) = get_json(&app, &format!("/conversation/{conversation_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_str().unwrap(), conversation_id);
    assert!(body["profileId"].is_string());

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["role"], "assistant");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "What competitions should I do?");
    assert_eq!(messages[2]["role"], "assistant");
}

// ===========================================================================
// TEST 10: GET /conversation with unknown id — 404
// ===========================================================================
#[tokio::test]
async fn test_get_unknown_conversation_is_404() {
    let app = make_app();
    let (status, body) =
        get_json(&app, "/conversation/00000000-0000-4000-8000-000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Conversation not found");
}

// ===========================================================================
// TEST 11: repeated greeting requests are deterministic across conversations
// ===========================================================================
#[tokio::test]
async fn test_greeting_is_deterministic_across_conversations() {
    let app = make_app();
    let (_, first) = post_chat(
        &app,
        json!({ "message": "", "profile": profile_payload() }),
    )
    .await;
    let (_, second) = post_chat(
        &app,
        json!({ "message": "", "profile": profile_payload() }),
    )
    .await;

    assert_ne!(first["conversationId"], second["conversationId"]);
    assert_eq!(
        first["message"]["content"].as_str().unwrap(),
        second["message"]["content"].as_str().unwrap()
    );
}
