//! HTTP-level integration tests for the `/ai` endpoints, run against an
//! in-memory language model.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, get, get_auth, post_json_auth, register, FakeLlm};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ai_endpoints_require_auth(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/ai/models").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_models_marks_configured_default(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;

    let llm = FakeLlm::replying("unused");
    let app = common::build_test_app_with(pool, Some(llm), None);
    let response = get_auth(app, "/api/v1/ai/models", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["defaultModel"], "openai/gpt-4o");
    let models = json["models"].as_array().unwrap();
    assert!(models.len() > 5);
    let defaults: Vec<&str> = models
        .iter()
        .filter(|m| m["isDefault"] == true)
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(defaults, vec!["openai/gpt-4o"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_models_listed_without_provider(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/ai/models", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["defaultModel"], "openai/gpt-4.5-preview");
    assert_eq!(json["models"][0]["isDefault"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_models_come_from_provider(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;

    let app = common::build_test_app_with(pool.clone(), Some(FakeLlm::replying("x")), None);
    let response = get_auth(app, "/api/v1/ai/models/available", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["models"][0]["id"], "openai/gpt-4o");

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/ai/models/available",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_key(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let llm = FakeLlm::replying("x");

    let cases = [
        (serde_json::json!({ "apiKey": "sk-valid" }), true),
        (serde_json::json!({ "apiKey": "sk-revoked" }), false),
        (serde_json::json!({}), true),
        (serde_json::json!({ "apiKey": "  " }), true),
    ];
    for (body, valid) in cases {
        let app = common::build_test_app_with(pool.clone(), Some(llm.clone()), None);
        let response = post_json_auth(app, "/api/v1/ai/verify", body, &token).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["valid"], valid);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generate_uses_default_writer_prompt(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let llm = FakeLlm::replying("Warm bread, warmer welcomes.");

    let app = common::build_test_app_with(pool, Some(llm.clone()), None);
    let response = post_json_auth(
        app,
        "/api/v1/ai/generate",
        serde_json::json!({ "prompt": "Write a slogan for a bakery" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["content"], "Warm bread, warmer welcomes.");

    let (model, messages) = llm.last_request().unwrap();
    assert_eq!(model, "openai/gpt-4o");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert!(messages[0].content.contains("copywriter"));
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "Write a slogan for a bakery");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generate_with_project_context_and_overrides(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Bakery launch").await;
    let llm = FakeLlm::replying("ok");

    let app = common::build_test_app_with(pool, Some(llm.clone()), None);
    let response = post_json_auth(
        app,
        "/api/v1/ai/generate",
        serde_json::json!({
            "prompt": "Write the hero headline",
            "projectId": project,
            "systemPrompt": "Answer in one line.",
            "model": "deepseek/deepseek-chat"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (model, messages) = llm.last_request().unwrap();
    assert_eq!(model, "deepseek/deepseek-chat");
    assert_eq!(messages[0].content, "Answer in one line.");
    assert!(messages[1].content.contains("Bakery launch"));
    assert!(messages[1].content.ends_with("Write the hero headline"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generate_errors(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;

    let app = common::build_test_app_with(pool.clone(), Some(FakeLlm::replying("x")), None);
    let response =
        post_json_auth(app, "/api/v1/ai/generate", serde_json::json!({ "prompt": " " }), &token)
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Prompt is required");

    let app = common::build_test_app_with(pool.clone(), Some(FakeLlm::failing()), None);
    let response =
        post_json_auth(app, "/api/v1/ai/generate", serde_json::json!({ "prompt": "hi" }), &token)
            .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/ai/generate",
        serde_json::json!({ "prompt": "hi" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_suggest_blocks_parses_model_reply(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Bakery launch").await;
    let llm = FakeLlm::replying(
        "Here you go:\n[{\"id\": \"hero\", \"title\": \"Hero\", \"description\": \"Open strong\"}, \
         {\"id\": \"menu\", \"title\": \"Menu\", \"description\": \"Daily bakes\"}]",
    );

    let app = common::build_test_app_with(pool, Some(llm.clone()), None);
    let response = post_json_auth(
        app,
        &format!("/api/v1/ai/suggest-blocks?projectId={project}"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[1]["id"], "menu");

    let (_, messages) = llm.last_request().unwrap();
    assert!(messages[1].content.contains("Bakery launch"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_suggest_blocks_falls_back_to_defaults(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Launch").await;

    let llm = FakeLlm::replying("Sorry, I cannot help with that.");
    let app = common::build_test_app_with(pool, Some(llm), None);
    let response = post_json_auth(
        app,
        &format!("/api/v1/ai/suggest-blocks?projectId={project}"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 10);
    assert_eq!(suggestions[0]["id"], "hero");
}
