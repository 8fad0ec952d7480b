//! HTTP handlers for crop recommendations

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{GrowingConditions, Recommendation, RecommendationReport};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for a region recommendation
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub region: Option<String>,
    /// Kept as text so a malformed value gets the JSON error body
    pub limit: Option<String>,
}

fn parse_limit(raw: Option<&str>) -> AppResult<Option<usize>> {
    raw.map(|text| {
        text.trim()
            .parse::<usize>()
            .map_err(|_| AppError::invalid("limit", format!("'{}' is not a non-negative integer", text)))
    })
    .transpose()
}

/// Recommend crops for a named region
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationReport>> {
    let region = query
        .region
        .ok_or_else(|| AppError::invalid("region", "Region name is required"))?;
    let limit = parse_limit(query.limit.as_deref())?;
    let report = state.service.recommend(&region, limit).await?;
    Ok(Json(report))
}

/// Body for scoring caller-supplied conditions
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(flatten)]
    pub conditions: GrowingConditions,
    pub limit: Option<usize>,
}

/// Rank the catalog for submitted weather and soil values
pub async fn score_conditions(
    State(state): State<AppState>,
    input: Result<Json<ScoreRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let Json(input) = input.map_err(|rejection| AppError::invalid("body", rejection.body_text()))?;
    let recommendations = state.service.score(input.conditions, input.limit)?;
    Ok(Json(recommendations))
}
