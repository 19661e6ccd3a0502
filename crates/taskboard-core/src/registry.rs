use crate::{Error, Result, Task, TaskPatch};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory task store: an ordered list plus a monotonic id counter.
///
/// One lock guards both, so every operation is a single atomic section and
/// ids are never reused, even after deletions. All state lives in process
/// memory and resets on restart.
#[derive(Clone)]
pub struct TaskRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

struct RegistryInner {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                tasks: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// A registry pre-populated with the three sample tasks served at startup.
    pub fn with_seed_tasks() -> Self {
        let tasks = vec![
            Task::new(
                1,
                Some("Learn axum".to_string()),
                Some("Build a first REST API with axum and tokio".to_string()),
                false,
            ),
            Task::new(
                2,
                Some("Build portfolio".to_string()),
                Some("Publish the project to a public GitHub repository".to_string()),
                false,
            ),
            Task::new(
                3,
                Some("Practice Rust".to_string()),
                Some("Review ownership, borrowing and collections".to_string()),
                true,
            ),
        ];

        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                next_id: tasks.len() as u64 + 1,
                tasks,
            })),
        }
    }

    /// List all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        let inner = self.inner.read().await;
        inner.tasks.clone()
    }

    /// Get a task by id.
    pub async fn get(&self, id: u64) -> Option<Task> {
        let inner = self.inner.read().await;
        inner.tasks.iter().find(|task| task.id == id).cloned()
    }

    /// Create a task, assigning the next id and appending it to the list.
    pub async fn create(
        &self,
        title: Option<String>,
        description: Option<String>,
        completed: bool,
    ) -> Task {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id += 1;

        let task = Task::new(id, title, description, completed);
        inner.tasks.push(task.clone());

        tracing::info!("Created task {} ({:?})", task.id, task.title);

        task
    }

    /// Apply a partial update to an existing task.
    pub async fn update(&self, id: u64, patch: TaskPatch) -> Result<Task> {
        let mut inner = self.inner.write().await;

        let task = inner
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;

        task.apply(patch);
        let updated = task.clone();

        tracing::info!("Updated task {} ({:?})", updated.id, updated.title);

        Ok(updated)
    }

    /// Remove every task with the given id (at most one, ids are unique).
    ///
    /// Returns whether anything was removed; removing a missing id is a
    /// silent no-op and the counter is never rewound.
    pub async fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;

        let before = inner.tasks.len();
        inner.tasks.retain(|task| task.id != id);
        let removed = inner.tasks.len() < before;

        if removed {
            tracing::info!("Removed task {}", id);
        } else {
            tracing::debug!("Remove of unknown task {} ignored", id);
        }

        removed
    }

    /// Aggregate counts over the current list.
    pub async fn statistics(&self) -> RegistryStatistics {
        let inner = self.inner.read().await;

        let total_tasks = inner.tasks.len();
        let completed_tasks = inner.tasks.iter().filter(|task| task.completed).count();

        RegistryStatistics {
            total_tasks,
            completed_tasks,
            open_tasks: total_tasks - completed_tasks,
        }
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RegistryStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub open_tasks: usize,
}
