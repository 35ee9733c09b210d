/// Kinopoisk (kinopoisk.dev) API provider
///
/// API Flow:
/// 1. Movies: /v1.4/movie?page=..&limit=..&sortField=..&sortType=..&genres.name=%2B..
/// 2. Genres: /v1/movie/possible-values-by-field?field=genres.name
///
/// Every request is a single attempt with the API key in the `X-API-KEY` header.
use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client as HttpClient,
};
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Genre, MovieQuery, MovieSummary, ResultPage},
    services::{
        genres::GenreShape,
        providers::MovieSource,
        query::{build_movie_query, GENRE_PARAM},
    },
};

const API_KEY_HEADER: &str = "X-API-KEY";
const MOVIES_PATH: &str = "v1.4/movie";
const POSSIBLE_VALUES_PATH: &str = "v1/movie/possible-values-by-field";

#[derive(Clone)]
pub struct KinopoiskClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl KinopoiskClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.kinopoisk_api_key.clone(),
            config.kinopoisk_api_url.clone(),
        )
    }

    /// Full request URL for a movie query
    pub fn movies_url(&self, query: &MovieQuery) -> String {
        format!(
            "{}/{}?{}",
            self.api_url,
            MOVIES_PATH,
            build_movie_query(query)
        )
    }

    /// Sends the request with the API headers and decodes the body as JSON
    async fn get_json(&self, request: reqwest::RequestBuilder) -> AppResult<Value> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Kinopoisk API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw Kinopoisk API response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to decode Kinopoisk response"
            );
            AppError::from(e)
        })
    }

    async fn try_fetch_movies(&self, query: &MovieQuery) -> AppResult<ResultPage<MovieSummary>> {
        let url = self.movies_url(query);
        tracing::debug!(url = %url, "Requesting movies");

        let payload = self.get_json(self.http_client.get(&url)).await?;

        if !payload.get("docs").is_some_and(Value::is_array) {
            return Err(AppError::MalformedPayload(
                "Movie response has no docs list".to_string(),
            ));
        }

        let raw: ResultPage<Value> = serde_json::from_value(payload)?;
        let received = raw.items.len();
        let page: ResultPage<MovieSummary> = raw.decode_items();
        if page.items.len() < received {
            tracing::warn!(
                dropped = received - page.items.len(),
                "Some movie entries could not be decoded"
            );
        }

        tracing::info!(
            page = page.page,
            pages = page.pages,
            total = page.total,
            results = page.items.len(),
            provider = "kinopoisk",
            "Movies fetched"
        );

        Ok(page)
    }

    async fn try_fetch_genres(&self) -> AppResult<ResultPage<Genre>> {
        let url = format!("{}/{}", self.api_url, POSSIBLE_VALUES_PATH);
        let request = self.http_client.get(&url).query(&[("field", GENRE_PARAM)]);

        let payload = self.get_json(request).await?;

        let shape = GenreShape::parse(&payload);
        let shape_name = shape.name();
        let genres = shape.into_genres().ok_or_else(|| {
            AppError::MalformedPayload("Unrecognized genre response shape".to_string())
        })?;

        tracing::info!(
            shape = shape_name,
            results = genres.len(),
            provider = "kinopoisk",
            "Genres fetched"
        );

        Ok(ResultPage::single(genres))
    }
}

#[async_trait]
impl MovieSource for KinopoiskClient {
    async fn fetch_movies(&self, query: &MovieQuery) -> ResultPage<MovieSummary> {
        match self.try_fetch_movies(query).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(error = %e, page = query.page, "Failed to fetch movies");
                ResultPage::empty()
            }
        }
    }

    async fn fetch_genres(&self) -> ResultPage<Genre> {
        match self.try_fetch_genres().await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch genres");
                ResultPage::empty()
            }
        }
    }

    fn name(&self) -> &'static str {
        "kinopoisk"
    }
}
