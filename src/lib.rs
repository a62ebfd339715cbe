//! # culinary
//!
//! Recipe discovery driven by the URL: the query string is decoded into a
//! [`data_models::SearchRequest`], answered by a [`catalog::RecipeCatalogService`],
//! and every user action encodes a fresh request back into the query string.

pub mod analyzer;
pub mod api;
pub mod catalog;
pub mod config;
pub mod data_models;
pub mod loader;
pub mod query_codec;
pub mod session;
