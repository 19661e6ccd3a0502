use axum::extract::Path;
use chrono::Local;

/// Welcome text listing the available routes.
pub async fn home() -> &'static str {
    "Welcome to the Taskboard API - Available endpoints: /hello, /date, /greet/{name}, /api/tasks"
}

pub async fn hello() -> &'static str {
    "Hello! The Taskboard API is up and running."
}

/// Current date and time in the server's local time zone.
pub async fn current_date() -> String {
    format!("Current Date: {}", Local::now().format("%Y-%m-%d %H:%M"))
}

/// Greet the name taken verbatim from the path, special characters included.
pub async fn greet(Path(name): Path<String>) -> String {
    format!("Hello: {} Welcome to my API", name)
}
