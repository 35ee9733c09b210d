/// Movie data source abstraction
///
/// The view controller only talks to a `MovieSource`, so the Kinopoisk client
/// can be swapped for a fake in tests or for another metadata provider.
use async_trait::async_trait;

use crate::models::{Genre, MovieQuery, MovieSummary, ResultPage};

pub mod kinopoisk;

pub use kinopoisk::KinopoiskClient;

/// Trait for movie metadata providers
///
/// Both operations are fail-soft: transport errors, bad statuses and malformed
/// payloads are logged by the implementation and reported as
/// [`ResultPage::empty`]. Callers never see an error for routine API hiccups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch one page of movies matching the query
    async fn fetch_movies(&self, query: &MovieQuery) -> ResultPage<MovieSummary>;

    /// Fetch every known genre as a single page
    async fn fetch_genres(&self) -> ResultPage<Genre>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
