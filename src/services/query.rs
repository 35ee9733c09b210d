/// Query string construction for the movie search endpoint
///
/// Scalars are plain `key=value` pairs. Genres are repeated: one `genres.name`
/// parameter per value, each prefixed with an encoded `+` ("must include").
use crate::models::MovieQuery;

/// Encoded inclusion marker (`+`) for multi-value filters
pub const INCLUDE_MARKER: &str = "%2B";

pub const GENRE_PARAM: &str = "genres.name";

/// Builds the query string (without the leading `?`) for a movie request
pub fn build_movie_query(query: &MovieQuery) -> String {
    let mut scalars: Vec<(&str, String)> = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ];

    if let Some((field, direction)) = query.sort {
        scalars.push(("sortField", field.as_param().to_string()));
        scalars.push(("sortType", direction.as_param().to_string()));
    }

    if let Some(name) = query.name.as_deref().filter(|n| !n.trim().is_empty()) {
        scalars.push(("name", name.to_string()));
    }

    let mut parts: Vec<String> = scalars
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();

    parts.extend(
        query
            .genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .map(|genre| {
                format!(
                    "{}={}{}",
                    GENRE_PARAM,
                    INCLUDE_MARKER,
                    urlencoding::encode(genre)
                )
            }),
    );

    parts.join("&")
}
