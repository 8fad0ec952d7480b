//! HTTP handlers for the crop catalog

use axum::{extract::State, Json};
use shared::CropRule;

use crate::AppState;

/// List the loaded crop rules
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropRule>> {
    Json(state.service.catalog().crops().to_vec())
}
