pub mod genre;
pub mod movie;
pub mod page;
pub mod query;

pub use genre::Genre;
pub use movie::{MovieSummary, NamedItem, Poster, Rating};
pub use page::ResultPage;
pub use query::{MovieQuery, QueryState, SortDirection, SortField, SortOption};
