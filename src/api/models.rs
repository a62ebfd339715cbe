use serde::Serialize;

use crate::data_models::{RecipePreview, SearchFilters};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Canonical query string for this search, ready for the address bar.
    pub query: String,
    pub search_text: String,
    pub result_limit: u32,
    pub filters: SearchFilters,
    pub results: Vec<RecipePreview>,
    pub total_results: usize,
    pub no_results: bool,
    pub processing_time_ms: u128,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
