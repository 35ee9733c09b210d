use std::sync::Arc;

use crate::{
    models::{QueryState, SortOption},
    services::providers::MovieSource,
    view::state::{CatalogState, SharedCatalogState, GENRES_ERROR, MOVIES_ERROR},
};

/// Drives the catalog: owns the query state and refetches on every change
///
/// Each fetch runs on its own tokio task. Overlapping fetches are allowed; only
/// the most recently issued one per stream is applied.
#[derive(Clone)]
pub struct CatalogController {
    source: Arc<dyn MovieSource>,
    state: SharedCatalogState,
}

impl CatalogController {
    pub fn new(source: Arc<dyn MovieSource>, page_size: u32) -> Self {
        Self {
            source,
            state: CatalogState::shared(page_size),
        }
    }

    /// Copy of the current view state
    pub async fn snapshot(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Initial load: genres and the first movie page, independently
    pub async fn start(&self) {
        tokio::join!(self.refresh_genres(), self.refresh_movies());
    }

    pub async fn refresh_movies(&self) {
        let (seq, request) = {
            let mut state = self.state.write().await;
            (state.begin_movies(), state.query.to_request())
        };

        tracing::debug!(
            seq,
            page = request.page,
            genres = ?request.genres,
            search = ?request.name,
            provider = self.source.name(),
            "Fetching movies"
        );

        let source = Arc::clone(&self.source);
        let outcome = tokio::spawn(async move { source.fetch_movies(&request).await })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Movie fetch task failed");
                MOVIES_ERROR.to_string()
            });

        let mut state = self.state.write().await;
        if !state.finish_movies(seq, outcome) {
            tracing::debug!(seq, "Discarded stale movie response");
        }
    }

    pub async fn refresh_genres(&self) {
        let seq = self.state.write().await.begin_genres();

        let source = Arc::clone(&self.source);
        let outcome = tokio::spawn(async move { source.fetch_genres().await })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Genre fetch task failed");
                GENRES_ERROR.to_string()
            });

        let mut state = self.state.write().await;
        if !state.finish_genres(seq, outcome) {
            tracing::debug!(seq, "Discarded stale genre response");
        }
    }

    /// Selects or deselects a genre, back to page 1
    pub async fn toggle_genre(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        tracing::info!(genre = %name, "Genre toggled");
        self.update_query(|query, _| query.toggle_genre(name)).await
    }

    /// Replaces the search text, back to page 1
    pub async fn search(&self, text: &str) -> bool {
        self.update_query(|query, _| query.set_search(text)).await
    }

    pub async fn change_sort(&self, option: SortOption) -> bool {
        tracing::info!(sort = ?option, "Sort changed");
        self.update_query(|query, _| query.set_sort(option)).await
    }

    /// Jumps to a page within `[1, total_pages]`; other filters stay
    pub async fn set_page(&self, page: u32) -> bool {
        self.update_query(|query, total_pages| query.set_page(page, total_pages))
            .await
    }

    pub async fn next_page(&self) -> bool {
        self.update_query(|query, total_pages| {
            query.set_page(query.page.saturating_add(1), total_pages)
        })
        .await
    }

    pub async fn previous_page(&self) -> bool {
        self.update_query(|query, total_pages| {
            query.set_page(query.page.saturating_sub(1), total_pages)
        })
        .await
    }

    /// Applies `change` and refetches movies if the query actually changed
    async fn update_query<F>(&self, change: F) -> bool
    where
        F: FnOnce(&mut QueryState, u32),
    {
        let changed = {
            let mut state = self.state.write().await;
            let before = state.query.clone();
            let total_pages = state.total_pages;
            change(&mut state.query, total_pages);
            state.query != before
        };

        if changed {
            self.refresh_movies().await;
        }
        changed
    }
}
