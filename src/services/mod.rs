pub mod genres;
pub mod providers;
pub mod query;

pub use genres::{normalize_genres, GenreShape};
pub use providers::{KinopoiskClient, MovieSource};
pub use query::build_movie_query;
