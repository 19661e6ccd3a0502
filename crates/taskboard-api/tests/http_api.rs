use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use taskboard_api::routes::create_router;
use taskboard_api::state::ApiState;
use taskboard_core::{Task, TaskRegistry};

fn app() -> Router {
    create_router(ApiState {
        registry: TaskRegistry::with_seed_tasks(),
    })
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse<T: DeserializeOwned>(body: &str) -> T {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn home_lists_available_routes() {
    let app = app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Welcome to the Taskboard API"));
    assert!(body.contains("/greet/{name}"));
    assert!(body.contains("/api/tasks"));
}

#[tokio::test]
async fn hello_returns_fixed_greeting() {
    let app = app();

    let (status, body) = get(&app, "/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello! The Taskboard API is up and running.");
}

#[tokio::test]
async fn date_is_prefixed_and_parseable() {
    let app = app();

    let (status, body) = get(&app, "/date").await;
    assert_eq!(status, StatusCode::OK);

    let rest = body.strip_prefix("Current Date: ").unwrap();
    chrono::NaiveDateTime::parse_from_str(rest, "%Y-%m-%d %H:%M").unwrap();
}

#[tokio::test]
async fn greet_echoes_name_verbatim() {
    let app = app();

    let (status, body) = get(&app, "/greet/Ferris").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello: Ferris Welcome to my API");
}

#[tokio::test]
async fn health_reports_service() {
    let app = app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = parse(&body);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "taskboard-api");
}

#[tokio::test]
async fn startup_list_returns_three_seeds_in_order() {
    let app = app();

    let (status, body) = get(&app, "/api/tasks").await;
    assert_eq!(status, StatusCode::OK);

    let tasks: Vec<Task> = parse(&body);
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(tasks[0].title.as_deref(), Some("Learn axum"));
    assert!(tasks[2].completed);
}

#[tokio::test]
async fn create_defaults_completed_and_extends_ids() {
    let app = app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/tasks",
        serde_json::json!({"title": "X", "description": "Y"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let task: Task = parse(&body);
    assert_eq!(task.id, 4);
    assert_eq!(task.title.as_deref(), Some("X"));
    assert_eq!(task.description.as_deref(), Some("Y"));
    assert!(!task.completed);

    let (_, body) = get(&app, "/api/tasks").await;
    let tasks: Vec<Task> = parse(&body);
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks.last().unwrap().id, 4);
}

#[tokio::test]
async fn create_accepts_empty_payload() {
    let app = app();

    let (status, body) = send_json(&app, "POST", "/api/tasks", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let task: Task = parse(&body);
    assert!(task.title.is_none());
    assert!(task.description.is_none());
    assert!(!task.completed);
}

#[tokio::test]
async fn update_touches_only_present_fields() {
    let app = app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/tasks/1",
        serde_json::json!({"completed": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let task: Task = parse(&body);
    assert_eq!(task.title.as_deref(), Some("Learn axum"));
    assert_eq!(
        task.description.as_deref(),
        Some("Build a first REST API with axum and tokio")
    );
    assert!(task.completed);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/tasks/99",
        serde_json::json!({"title": "nope"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: serde_json::Value = parse(&body);
    assert_eq!(error["error"], "Task not found: 99");
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = app();

    let (status, body) = get(&app, "/api/tasks/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: serde_json::Value = parse(&body);
    assert_eq!(error["error"], "Task not found: 99");
}

#[tokio::test]
async fn delete_unknown_id_confirms_without_changes() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/tasks/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        String::from_utf8(bytes.to_vec()).unwrap(),
        "Task with ID 99 deleted."
    );

    let (_, body) = get(&app, "/api/tasks").await;
    let tasks: Vec<Task> = parse(&body);
    assert_eq!(tasks.len(), 3);
}

#[tokio::test]
async fn delete_existing_id_removes_exactly_one() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/tasks/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, body) = get(&app, "/api/tasks").await;
    let tasks: Vec<Task> = parse(&body);
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.id != 2));
}

#[tokio::test]
async fn malformed_completed_fails_the_request() {
    let app = app();

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/tasks",
        serde_json::json!({"completed": "yes"}),
    )
    .await;
    assert!(status.is_client_error());

    let (_, body) = get(&app, "/api/tasks").await;
    let tasks: Vec<Task> = parse(&body);
    assert_eq!(tasks.len(), 3);
}

#[tokio::test]
async fn stats_counts_completed_and_open() {
    let app = app();

    let (status, body) = get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);

    let stats: serde_json::Value = parse(&body);
    assert_eq!(stats["total_tasks"], 3);
    assert_eq!(stats["completed_tasks"], 1);
    assert_eq!(stats["open_tasks"], 2);
}
