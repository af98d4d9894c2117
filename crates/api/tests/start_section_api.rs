//! HTTP-level integration tests for the `/start-section` questionnaire.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, delete_auth, get_auth, post_json_auth, put_json_auth, register,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_start_section_is_null_before_first_save(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Launch").await;

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/start-section?projectId={project}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.get("startSection").is_some());
    assert!(json["startSection"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_is_a_full_replace(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Launch").await;
    let uri = format!("/api/v1/start-section?projectId={project}");

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({
            "projectOverview": "Neighbourhood bakery going online",
            "timeline": "Six weeks",
            "frameworkWhyEmotionalHook": "The smell of fresh bread"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let first_id = json["startSection"]["id"].as_i64().unwrap();
    assert_eq!(json["startSection"]["projectId"], project);
    assert_eq!(json["startSection"]["timeline"], "Six weeks");
    assert_eq!(
        json["startSection"]["frameworkWhyEmotionalHook"],
        "The smell of fresh bread"
    );

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "projectOverview": "Bakery and cafe" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["startSection"]["id"], first_id);
    assert_eq!(json["startSection"]["projectOverview"], "Bakery and cafe");
    assert!(json["startSection"]["timeline"].is_null());
    assert!(json["startSection"]["frameworkWhyEmotionalHook"].is_null());

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM start_sections")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_saved_answers_feed_the_project_detail(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Launch").await;

    post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/start-section?projectId={project}"),
        serde_json::json!({ "idealClientGoals": "Skip the supermarket" }),
        &token,
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project}"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["startSection"]["idealClientGoals"], "Skip the supermarket");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_start_section(pool: PgPool) {
    let token = register(&pool, "owner@example.com").await;
    let project = create_project(&pool, &token, "Launch").await;
    let uri = format!("/api/v1/start-section?projectId={project}");

    post_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "deliverables": "Website copy" }),
        &token,
    )
    .await;

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Start section deleted successfully");

    let response = get_auth(common::build_test_app(pool), &uri, &token).await;
    assert!(body_json(response).await["startSection"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_start_section_of_foreign_project_is_not_found(pool: PgPool) {
    let owner = register(&pool, "owner@example.com").await;
    let intruder = register(&pool, "intruder@example.com").await;
    let project = create_project(&pool, &owner, "Launch").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/start-section?projectId={project}"),
        serde_json::json!({ "timeline": "Tomorrow" }),
        &intruder,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
