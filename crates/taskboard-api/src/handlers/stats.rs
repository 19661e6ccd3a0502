use axum::{extract::State, Json};

use crate::state::ApiState;
use taskboard_core::RegistryStatistics;

pub async fn get_statistics(State(state): State<ApiState>) -> Json<RegistryStatistics> {
    Json(state.registry.statistics().await)
}
