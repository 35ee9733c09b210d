use serde::{Deserialize, Serialize};

/// Movie as returned by the `/v1.4/movie` endpoint
///
/// Only the fields the catalog shows are kept. Upstream sends `null` for many of
/// them, so everything except the id is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alternative_name: Option<String>,
    #[serde(default)]
    pub poster: Option<Poster>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<NamedItem>,
    #[serde(default)]
    pub countries: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poster {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    #[serde(default)]
    pub kp: Option<f64>,
    #[serde(default)]
    pub imdb: Option<f64>,
}

/// `{ "name": ... }` wrapper used upstream for genres and countries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedItem {
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<NamedItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<NamedItem>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MovieSummary {
    /// Display title: the localized name, falling back to the alternative one
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.alternative_name.as_deref())
            .unwrap_or("")
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn country_names(&self) -> Vec<&str> {
        self.countries
            .iter()
            .flatten()
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Full-size poster if present, otherwise the preview
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.as_ref()?;
        poster
            .url
            .as_deref()
            .or(poster.preview_url.as_deref())
    }

    /// Kinopoisk rating; zero means "not rated" upstream
    pub fn kp_rating(&self) -> Option<f64> {
        self.rating.and_then(|r| r.kp).filter(|kp| *kp > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "id": 326,
            "name": "Побег из Шоушенка",
            "alternativeName": "The Shawshank Redemption",
            "poster": {
                "url": "https://image.openmoviedb.com/poster.jpg",
                "previewUrl": "https://image.openmoviedb.com/preview.jpg"
            },
            "rating": { "kp": 9.111, "imdb": 9.3, "filmCritics": 7.8 },
            "year": 1994,
            "genres": [{ "name": "драма" }],
            "countries": [{ "name": "США" }],
            "description": "Бухгалтер Энди Дюфрейн обвинён в убийстве"
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 326);
        assert_eq!(movie.title(), "Побег из Шоушенка");
        assert_eq!(
            movie.alternative_name.as_deref(),
            Some("The Shawshank Redemption")
        );
        assert_eq!(movie.year, Some(1994));
        assert_eq!(movie.genre_names(), vec!["драма"]);
        assert_eq!(movie.country_names(), vec!["США"]);
        assert_eq!(movie.kp_rating(), Some(9.111));
        assert_eq!(
            movie.poster_url(),
            Some("https://image.openmoviedb.com/poster.jpg")
        );
    }

    #[test]
    fn test_movie_with_nulls() {
        let json = r#"{
            "id": 1,
            "name": null,
            "alternativeName": "Untitled",
            "poster": { "url": null, "previewUrl": "https://example.com/p.jpg" },
            "rating": { "kp": 0, "imdb": null },
            "year": null,
            "genres": null
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title(), "Untitled");
        assert_eq!(movie.poster_url(), Some("https://example.com/p.jpg"));
        assert_eq!(movie.kp_rating(), None);
        assert!(movie.genres.is_empty());
        assert!(movie.country_names().is_empty());
        assert_eq!(movie.description, None);
    }

    #[test]
    fn test_movie_minimal() {
        let movie: MovieSummary = serde_json::from_str(r#"{ "id": 7 }"#).unwrap();
        assert_eq!(movie.title(), "");
        assert_eq!(movie.poster_url(), None);
        assert!(movie.genre_names().is_empty());
    }
}
