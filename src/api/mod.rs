use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::RecipeCatalogService;
use crate::query_codec::SearchQueryCodec;

pub mod error;
pub mod handlers;
pub mod models;

pub struct AppState<C> {
    pub catalog: Arc<C>,
    pub codec: SearchQueryCodec,
}

// `C` itself need not be Clone
impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            codec: self.codec,
        }
    }
}

pub fn create_router<C>(catalog: Arc<C>, codec: SearchQueryCodec) -> Router
where
    C: RecipeCatalogService + 'static,
{
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/recipes", get(handlers::search_handler::<C>))
        .route("/api/recipes/:id", get(handlers::recipe_handler::<C>))
        .with_state(AppState { catalog, codec })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
