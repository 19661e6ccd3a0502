use anyhow::Result;
use reqwest::Client;
use serde_json::json;

use crate::cli::Commands;
use taskboard_core::Task;

pub async fn execute(command: Commands, api_url: &str) -> Result<()> {
    let client = Client::new();

    match command {
        Commands::List => {
            let tasks: Vec<Task> =
                fetch_json(client.get(format!("{}/api/tasks", api_url))).await?;

            if tasks.is_empty() {
                println!("No tasks.");
            }
            for task in &tasks {
                print_task(task);
            }
        }

        Commands::Get { id } => {
            let task: Task =
                fetch_json(client.get(format!("{}/api/tasks/{}", api_url, id))).await?;
            print_task(&task);
        }

        Commands::Create {
            title,
            description,
            completed,
        } => {
            println!("Creating task...");

            let task: Task = fetch_json(
                client.post(format!("{}/api/tasks", api_url)).json(&json!({
                    "title": title,
                    "description": description,
                    "completed": completed,
                })),
            )
            .await?;

            println!("✓ Task created: {}", task.id);
            print_task(&task);
        }

        Commands::Update {
            id,
            title,
            description,
            completed,
        } => {
            // Send only the fields that were given, so the rest stay untouched
            let mut patch = serde_json::Map::new();
            if let Some(title) = title {
                patch.insert("title".to_string(), json!(title));
            }
            if let Some(description) = description {
                patch.insert("description".to_string(), json!(description));
            }
            if let Some(completed) = completed {
                patch.insert("completed".to_string(), json!(completed));
            }

            let task: Task = fetch_json(
                client
                    .put(format!("{}/api/tasks/{}", api_url, id))
                    .json(&patch),
            )
            .await?;

            println!("✓ Task updated: {}", task.id);
            print_task(&task);
        }

        Commands::Delete { id } => {
            let response = client
                .delete(format!("{}/api/tasks/{}", api_url, id))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                anyhow::bail!("API error {}: {}", status, response.text().await?);
            }

            println!("{}", response.text().await?);
        }

        Commands::Stats => {
            let stats: serde_json::Value =
                fetch_json(client.get(format!("{}/api/stats", api_url))).await?;

            println!("Registry statistics:");
            println!("  Total: {}", stats["total_tasks"]);
            println!("  Completed: {}", stats["completed_tasks"]);
            println!("  Open: {}", stats["open_tasks"]);
        }
    }

    Ok(())
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T> {
    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("API error {}: {}", status, body);
    }

    Ok(response.json().await?)
}

fn print_task(task: &Task) {
    println!("Task: {}", task.id);
    println!("  Title: {}", task.title.as_deref().unwrap_or("-"));
    println!("  Description: {}", task.description.as_deref().unwrap_or("-"));
    println!("  Completed: {}", task.completed);
}
