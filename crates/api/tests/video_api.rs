//! Integration tests for the `/api/v1/videos` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

fn video_body() -> Value {
    json!({
        "title": "The Long Night",
        "description": "A slow film about a very long night in a small northern town",
        "year_launched": 2015,
        "opened": true,
        "rating": "14",
        "duration": 120,
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/v1/videos", video_body()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "The Long Night");
    assert_eq!(data["year_launched"], 2015);
    assert_eq!(data["opened"], true);
    assert_eq!(data["rating"], "14");
    assert_eq!(data["duration"], 120);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn opened_defaults_to_false(pool: PgPool) {
    let mut body = video_body();
    body.as_object_mut().unwrap().remove("opened");

    let data = create(&pool, "/api/v1/videos", body).await;
    assert_eq!(data["opened"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_reports_first_failing_field(pool: PgPool) {
    let mut body = video_body();
    body["rating"] = json!("99");
    body["duration"] = json!(0);

    let response = post_json(build_test_app(pool), "/api/v1/videos", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "Rating must be a valid value");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_description_returns_422(pool: PgPool) {
    let mut body = video_body();
    body["description"] = json!("Too few words here");

    let response = post_json(build_test_app(pool), "/api/v1/videos", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["error"],
        "Description must have at least 10 words and 15 characters"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn future_year_returns_422(pool: PgPool) {
    let mut body = video_body();
    body["year_launched"] = json!(9999);

    let response = post_json(build_test_app(pool), "/api/v1/videos", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["error"],
        "Year launched must be between 1895 and current year"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_keeps_other_fields(pool: PgPool) {
    let created = create(&pool, "/api/v1/videos", video_body()).await;
    let uri = format!("/api/v1/videos/{}", created["id"].as_str().unwrap());

    let response = put_json(build_test_app(pool), &uri, json!({ "duration": 95 })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["duration"], 95);
    assert_eq!(json["data"]["title"], "The Long Night");
    assert_eq!(json["data"]["rating"], "14");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_validates_only_supplied_fields(pool: PgPool) {
    let created = create(&pool, "/api/v1/videos", video_body()).await;
    let uri = format!("/api/v1/videos/{}", created["id"].as_str().unwrap());

    let response = put_json(build_test_app(pool.clone()), &uri, json!({ "rating": "L" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(build_test_app(pool.clone()), &uri, json!({ "duration": -5 })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "Duration must be greater than 0");

    let response = put_json(build_test_app(pool), &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["error"],
        "Video must update at least one field"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleted_video_is_not_found(pool: PgPool) {
    let created = create(&pool, "/api/v1/videos", video_body()).await;
    let uri = format!("/api/v1/videos/{}", created["id"].as_str().unwrap());

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(build_test_app(pool), &uri, json!({ "duration": 10 })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
