//! Translation between the address bar's query string and a [`SearchRequest`].
//!
//! Both directions are total: a hand-edited or stale URL always decodes to
//! some request, falling back to defaults field by field.

use std::num::NonZeroU32;

use url::form_urlencoded;

use crate::data_models::{Facet, SearchFilters, SearchRequest};

/// Query-string keys, in the order `encode` emits them.
pub mod keys {
    pub const TOTAL_RECIPES: &str = "totalRecipes";
    pub const FILTERS: &str = "filters";
    pub const SEARCH_INPUT: &str = "searchInput";
}

const FILTER_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQueryCodec {
    initial_limit: NonZeroU32,
}

impl SearchQueryCodec {
    pub fn new(initial_limit: NonZeroU32) -> Self {
        Self { initial_limit }
    }

    pub fn decode(&self, query: &str) -> SearchRequest {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut search_input = None;
        let mut total_recipes = None;
        let mut filters = None;

        // First occurrence of a key wins; unknown keys are skipped.
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                keys::SEARCH_INPUT => &mut search_input,
                keys::TOTAL_RECIPES => &mut total_recipes,
                keys::FILTERS => &mut filters,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        SearchRequest {
            search_text: search_input.unwrap_or_default(),
            result_limit: total_recipes
                .and_then(|raw| raw.parse::<NonZeroU32>().ok())
                .unwrap_or(self.initial_limit),
            filters: filters.as_deref().map(parse_filters).unwrap_or_default(),
        }
    }

    pub fn encode(&self, request: &SearchRequest) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(keys::TOTAL_RECIPES, &request.result_limit.to_string());

        if !request.filters.is_empty() {
            serializer.append_pair(keys::FILTERS, &join_filters(&request.filters));
        }

        if !request.search_text.is_empty() {
            serializer.append_pair(keys::SEARCH_INPUT, &request.search_text);
        }

        serializer.finish()
    }
}

fn parse_filters(raw: &str) -> SearchFilters {
    raw.split(FILTER_SEPARATOR)
        .filter_map(Facet::from_token)
        .collect()
}

fn join_filters(filters: &SearchFilters) -> String {
    filters
        .enabled()
        .map(Facet::token)
        .collect::<Vec<&str>>()
        .join(FILTER_SEPARATOR)
}
