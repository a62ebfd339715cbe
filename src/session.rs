//! The main search page's flow, without any rendering.
//!
//! The location query string is authoritative. The search bar text and the
//! selected facets are mirrors the user edits before submitting; every
//! location change overwrites them.

use std::num::NonZeroU32;

use crate::config::PageSizing;
use crate::data_models::{Facet, RecipePreview, SearchFilters, SearchRequest};
use crate::query_codec::SearchQueryCodec;

/// The result of a user action: the query to put in the address bar and the
/// request to hand to the catalog loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub query: String,
    pub request: SearchRequest,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    codec: SearchQueryCodec,
    delta: NonZeroU32,
    location_query: String,
    search_bar_value: String,
    filter_values: SearchFilters,
}

impl SearchSession {
    pub fn new(page_sizing: PageSizing) -> Self {
        Self {
            codec: SearchQueryCodec::new(page_sizing.initial),
            delta: page_sizing.delta,
            location_query: String::new(),
            search_bar_value: String::new(),
            filter_values: SearchFilters::default(),
        }
    }

    pub fn codec(&self) -> &SearchQueryCodec {
        &self.codec
    }

    pub fn location_query(&self) -> &str {
        &self.location_query
    }

    pub fn search_bar_value(&self) -> &str {
        &self.search_bar_value
    }

    pub fn filter_values(&self) -> SearchFilters {
        self.filter_values
    }

    /// The request the current location describes.
    pub fn current_request(&self) -> SearchRequest {
        self.codec.decode(&self.location_query)
    }

    /// The browser landed on (or navigated to) `query`. The location is kept
    /// as given; mirrors are refreshed from it.
    pub fn on_location_change(&mut self, query: &str) -> Navigation {
        self.location_query = query.to_string();
        let request = self.current_request();
        self.refresh_mirrors(&request);
        Navigation {
            query: self.location_query.clone(),
            request,
        }
    }

    pub fn set_search_bar_value(&mut self, value: impl Into<String>) {
        self.search_bar_value = value.into();
    }

    pub fn set_filter(&mut self, facet: Facet, on: bool) {
        self.filter_values.set(facet, on);
    }

    pub fn toggle_filter(&mut self, facet: Facet) {
        self.filter_values.toggle(facet);
    }

    /// Search with whatever is in the search bar and facet selection, keeping
    /// the current result limit.
    pub fn submit(&mut self) -> Navigation {
        let current = self.current_request();
        let request = SearchRequest::new(
            self.search_bar_value.clone(),
            current.result_limit,
            self.filter_values,
        );
        self.navigate(request)
    }

    /// Same search as the current location, with a larger result limit.
    /// Unsubmitted edits to the mirrors are discarded.
    pub fn show_more(&mut self) -> Navigation {
        let request = self.current_request().show_more(self.delta);
        self.navigate(request)
    }

    pub fn reset(&mut self) -> Navigation {
        let request = self.codec.decode("");
        self.navigate(request)
    }

    /// "No results found" is shown only for an actual text search that came
    /// back empty.
    pub fn shows_no_results(&self, previews: &[RecipePreview]) -> bool {
        previews.is_empty() && !self.search_bar_value.is_empty()
    }

    fn navigate(&mut self, request: SearchRequest) -> Navigation {
        let query = self.codec.encode(&request);
        log::debug!("navigating to ?{query}");
        self.location_query = query.clone();
        self.refresh_mirrors(&request);
        Navigation { query, request }
    }

    fn refresh_mirrors(&mut self, request: &SearchRequest) {
        self.search_bar_value = request.search_text.clone();
        self.filter_values = request.filters;
    }
}
