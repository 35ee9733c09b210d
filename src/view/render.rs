//! Plain-text rendering of the catalog view state.

use std::fmt::Write;

use crate::{
    models::{MovieSummary, SortOption},
    view::state::CatalogState,
};

const DESCRIPTION_LIMIT: usize = 160;

pub fn render_movie(movie: &MovieSummary) -> String {
    let mut card = String::new();

    let _ = write!(card, "{}", movie.title());
    if let Some(year) = movie.year {
        let _ = write!(card, " ({})", year);
    }
    match movie.kp_rating() {
        Some(kp) => {
            let _ = write!(card, "  ★ {:.1}", kp);
        }
        None => card.push_str("  ★ n/a"),
    }

    if let Some(alt) = movie
        .alternative_name
        .as_deref()
        .filter(|alt| *alt != movie.title())
    {
        let _ = write!(card, "\n  {}", alt);
    }

    let genres = movie.genre_names();
    if genres.is_empty() {
        card.push_str("\n  genre not specified");
    } else {
        let _ = write!(card, "\n  {}", genres.join(", "));
    }

    let countries = movie.country_names();
    if !countries.is_empty() {
        let _ = write!(card, " | {}", countries.join(", "));
    }

    if let Some(description) = movie.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let _ = write!(card, "\n  {}", truncate(description.trim(), DESCRIPTION_LIMIT));
    }

    if let Some(url) = movie.poster_url() {
        let _ = write!(card, "\n  poster: {}", url);
    }

    card
}

/// Genre list with the current selection marked
pub fn render_genres(state: &CatalogState) -> String {
    if state.is_genres_loading() {
        return "Loading genres...".to_string();
    }
    if let Some(error) = &state.genres_error {
        return format!("Error: {}", error);
    }
    if state.genres.is_empty() {
        return "No genres found. Check the API connection.".to_string();
    }

    state
        .genres
        .iter()
        .map(|genre| {
            let mark = if state.query.is_selected(&genre.name) { "x" } else { " " };
            format!("[{}] {}", mark, genre.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_pagination(current_page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", current_page, total_pages.max(1))
}

/// Renders the movie area the way a results pane would show it
pub fn render_catalog(state: &CatalogState) -> String {
    if let Some(error) = &state.error {
        return format!("Error: {}", error);
    }
    if state.is_movies_loading() {
        return "Loading movies...".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", render_filters(state));

    if state.movies.is_empty() {
        out.push_str("No movies found. Try different search options.");
        return out;
    }

    for movie in &state.movies {
        let _ = writeln!(out, "{}\n", render_movie(movie));
    }
    if state.total_pages > 0 {
        out.push_str(&render_pagination(state.query.page, state.total_pages));
    }
    out
}

fn render_filters(state: &CatalogState) -> String {
    let sort = match SortOption::from_field(state.query.sort_field) {
        SortOption::Rating => "rating",
        SortOption::Year => "year",
        SortOption::Name => "name",
    };
    let mut line = format!("Sorted by {}", sort);
    if !state.query.search.is_empty() {
        let _ = write!(line, " | search: \"{}\"", state.query.search);
    }
    if !state.query.genres.is_empty() {
        let _ = write!(line, " | genres: {}", state.query.genres.join(", "));
    }
    let _ = write!(line, " | {} found", state.total_movies);
    line
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}
