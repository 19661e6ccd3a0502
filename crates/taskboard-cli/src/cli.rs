use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard - command-line client for the task API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of a running taskboard-api server
    #[arg(long, env = "TASKBOARD_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks
    List,

    /// Show a single task
    Get {
        /// Task ID
        id: u64,
    },

    /// Create a task
    Create {
        /// Task title
        #[arg(long)]
        title: Option<String>,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Mark the task completed on creation
        #[arg(long)]
        completed: bool,
    },

    /// Update fields of an existing task
    Update {
        /// Task ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New completion state (true or false)
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },

    /// Show registry statistics
    Stats,
}
