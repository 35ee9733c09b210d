use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Genre, MovieSummary, QueryState, ResultPage};

pub const MOVIES_ERROR: &str = "Failed to load movies";
pub const GENRES_ERROR: &str = "Failed to load genres";

/// Lifecycle of one data stream (movies or genres)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Shared view state
pub type SharedCatalogState = Arc<RwLock<CatalogState>>;

/// Everything the presentation layer reads
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub query: QueryState,
    pub movies: Vec<MovieSummary>,
    pub total_pages: u32,
    pub total_movies: u32,
    pub movies_status: FetchStatus,
    pub error: Option<String>,
    pub genres: Vec<Genre>,
    pub genres_status: FetchStatus,
    pub genres_error: Option<String>,
    movies_seq: u64,
    genres_seq: u64,
}

impl CatalogState {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: QueryState::new(page_size),
            movies: Vec::new(),
            total_pages: 0,
            total_movies: 0,
            movies_status: FetchStatus::Idle,
            error: None,
            genres: Vec::new(),
            genres_status: FetchStatus::Idle,
            genres_error: None,
            movies_seq: 0,
            genres_seq: 0,
        }
    }

    pub fn shared(page_size: u32) -> SharedCatalogState {
        Arc::new(RwLock::new(Self::new(page_size)))
    }

    pub fn is_movies_loading(&self) -> bool {
        self.movies_status == FetchStatus::Loading
    }

    pub fn is_genres_loading(&self) -> bool {
        self.genres_status == FetchStatus::Loading
    }

    /// Marks a movie fetch as started and returns its sequence number
    pub fn begin_movies(&mut self) -> u64 {
        self.movies_seq += 1;
        self.movies_status = FetchStatus::Loading;
        self.error = None;
        self.movies_seq
    }

    /// Applies a movie fetch outcome unless a newer fetch has been issued
    ///
    /// Returns whether the outcome was applied.
    pub fn finish_movies(&mut self, seq: u64, outcome: Result<ResultPage<MovieSummary>, String>) -> bool {
        if seq != self.movies_seq {
            return false;
        }
        match outcome {
            Ok(page) => {
                self.movies = page.items;
                self.total_pages = page.pages;
                self.total_movies = page.total;
                self.movies_status = FetchStatus::Loaded;
            }
            Err(message) => {
                self.movies.clear();
                self.movies_status = FetchStatus::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    pub fn begin_genres(&mut self) -> u64 {
        self.genres_seq += 1;
        self.genres_status = FetchStatus::Loading;
        self.genres_error = None;
        self.genres_seq
    }

    pub fn finish_genres(&mut self, seq: u64, outcome: Result<ResultPage<Genre>, String>) -> bool {
        if seq != self.genres_seq {
            return false;
        }
        match outcome {
            Ok(page) => {
                self.genres = page.items;
                self.genres_status = FetchStatus::Loaded;
            }
            Err(message) => {
                self.genres.clear();
                self.genres_status = FetchStatus::Failed;
                self.genres_error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> MovieSummary {
        serde_json::from_value(serde_json::json!({ "id": id, "name": format!("Movie {}", id) }))
            .unwrap()
    }

    fn page_of(ids: &[u64], pages: u32) -> ResultPage<MovieSummary> {
        ResultPage {
            items: ids.iter().copied().map(movie).collect(),
            total: ids.len() as u32,
            limit: 10,
            page: 1,
            pages,
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = CatalogState::new(10);
        assert_eq!(state.movies_status, FetchStatus::Idle);
        assert_eq!(state.genres_status, FetchStatus::Idle);
        assert_eq!(state.query.page, 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_movie_fetch_lifecycle() {
        let mut state = CatalogState::new(10);
        let seq = state.begin_movies();
        assert!(state.is_movies_loading());

        assert!(state.finish_movies(seq, Ok(page_of(&[1, 2], 7))));
        assert_eq!(state.movies_status, FetchStatus::Loaded);
        assert_eq!(state.movies.len(), 2);
        assert_eq!(state.total_pages, 7);
        assert_eq!(state.total_movies, 2);
    }

    #[test]
    fn test_failure_clears_movies_and_sets_error() {
        let mut state = CatalogState::new(10);
        let seq = state.begin_movies();
        state.finish_movies(seq, Ok(page_of(&[1], 1)));

        let seq = state.begin_movies();
        assert!(state.finish_movies(seq, Err(MOVIES_ERROR.to_string())));
        assert!(state.movies.is_empty());
        assert_eq!(state.movies_status, FetchStatus::Failed);
        assert_eq!(state.error.as_deref(), Some(MOVIES_ERROR));

        // A new fetch clears the previous error
        state.begin_movies();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_movie_response_discarded() {
        let mut state = CatalogState::new(10);
        let first = state.begin_movies();
        let second = state.begin_movies();

        assert!(state.finish_movies(second, Ok(page_of(&[2], 3))));
        assert!(!state.finish_movies(first, Ok(page_of(&[1], 9))));

        assert_eq!(state.movies[0].id, 2);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn test_genre_fetch_lifecycle() {
        let mut state = CatalogState::new(10);
        let seq = state.begin_genres();
        assert!(state.is_genres_loading());

        assert!(state.finish_genres(seq, Ok(ResultPage::single(vec![Genre::new(0, "драма")]))));
        assert_eq!(state.genres_status, FetchStatus::Loaded);
        assert_eq!(state.genres.len(), 1);

        let seq = state.begin_genres();
        state.finish_genres(seq, Err(GENRES_ERROR.to_string()));
        assert!(state.genres.is_empty());
        assert_eq!(state.genres_error.as_deref(), Some(GENRES_ERROR));
    }
}
