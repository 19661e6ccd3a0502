use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
}

/// Partial update input. A `Some` field overwrites the matching task field,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    pub fn new(id: u64, title: Option<String>, description: Option<String>, completed: bool) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    /// Apply the present fields of a patch, leaving the rest unchanged.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}
