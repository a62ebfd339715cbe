use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::catalog::{CatalogError, RecipeCatalogService};
use crate::data_models::{RecipePreview, SearchRequest};

/// What the result list currently reflects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewsState {
    pub request: Option<SearchRequest>,
    pub previews: Vec<RecipePreview>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The result was stored and is now the visible list.
    Applied(Vec<RecipePreview>),
    /// A newer load was dispatched while this one ran; its result was dropped.
    Superseded,
}

/// Dispatches requests to a catalog and keeps only the answer to the most
/// recently dispatched one, whatever order the answers arrive in.
pub struct PreviewLoader<C> {
    catalog: Arc<C>,
    generation: AtomicU64,
    state: RwLock<PreviewsState>,
}

impl<C: RecipeCatalogService> PreviewLoader<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            generation: AtomicU64::new(0),
            state: RwLock::new(PreviewsState::default()),
        }
    }

    pub async fn load(&self, request: SearchRequest) -> Result<LoadOutcome, CatalogError> {
        // ticket and recorded request change together, under the lock
        let ticket = {
            let mut state = self.state.write().await;
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.request = Some(request.clone());
            state.is_loading = true;
            ticket
        };

        let result = self.catalog.load_previews(&request).await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            log::debug!("dropping previews for superseded load #{ticket}");
            return Ok(LoadOutcome::Superseded);
        }

        state.is_loading = false;
        match result {
            Ok(previews) => {
                state.previews = previews.clone();
                Ok(LoadOutcome::Applied(previews))
            }
            Err(e) => {
                log::error!("error loading recipe previews: {:#}", e);
                state.previews.clear();
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> PreviewsState {
        self.state.read().await.clone()
    }
}
