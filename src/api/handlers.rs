use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use std::time::Instant;

use crate::catalog::RecipeCatalogService;
use crate::data_models::Recipe;

use super::AppState;
use super::error::ApiError;
use super::models::SearchResponse;

/// Decodes the raw query string the same way the browser's address bar is
/// decoded, so a malformed query still answers with defaults.
pub async fn search_handler<C: RecipeCatalogService>(
    State(state): State<AppState<C>>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = Instant::now();

    let request = state.codec.decode(query.as_deref().unwrap_or_default());
    let results = state.catalog.load_previews(&request).await?;

    let total_results = results.len();
    let no_results = results.is_empty() && !request.search_text.is_empty();

    Ok(Json(SearchResponse {
        query: state.codec.encode(&request),
        search_text: request.search_text,
        result_limit: request.result_limit.get(),
        filters: request.filters,
        results,
        total_results,
        no_results,
        processing_time_ms: start.elapsed().as_millis(),
    }))
}

pub async fn recipe_handler<C: RecipeCatalogService>(
    State(state): State<AppState<C>>,
    Path(id): Path<u64>,
) -> Result<Json<Recipe>, ApiError> {
    state
        .catalog
        .recipe(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}
