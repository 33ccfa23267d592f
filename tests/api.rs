use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt;

use mergington_api::database::schema;
use mergington_api::services::seed_service;
use mergington_api::web;

// A single-connection pool keeps the in-memory database shared across
// requests; with more connections every checkout would see an empty schema.
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    seed_service::initialize(&pool, &seed_service::default_seed())
        .await
        .unwrap();
    web::app(pool)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(bytes.as_ref()).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn activities_list_has_unique_names_and_no_roster() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);

    let activities = body.as_array().unwrap();
    assert_eq!(activities.len(), 9);

    let mut names: Vec<&str> = activities
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), activities.len());

    let chess = activities
        .iter()
        .find(|a| a["name"] == "Chess Club")
        .unwrap();
    assert!(chess["id"].is_i64());
    assert_eq!(chess["category"], "Academic");
    assert_eq!(chess["time"], "Fridays, 3:30 PM - 5:00 PM");
    assert!(chess.get("participants").is_none());
}

#[tokio::test]
async fn signup_and_unregister_full_scenario() {
    let app = test_app().await;

    // First signup succeeds
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=a@b.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Signed up a@b.com for Chess Club" }));

    // Duplicate signup is a client error and changes nothing
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=a@b.com",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Student is already signed up" }));

    // Unregister succeeds
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=a@b.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Unregistered a@b.com from Chess Club" })
    );

    // A second unregister finds nothing to remove
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=a@b.com",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "detail": "Student is not signed up for this activity" })
    );
}

#[tokio::test]
async fn unknown_activity_is_404() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Knitting%20Circle/signup?email=a@b.com",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Activity not found" }));

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Knitting%20Circle/unregister?email=a@b.com",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Activity not found" }));
}

#[tokio::test]
async fn missing_email_is_rejected_by_the_extractor() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::POST, "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
