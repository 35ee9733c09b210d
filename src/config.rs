use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Kinopoisk API key, sent as the `X-API-KEY` header
    pub kinopoisk_api_key: String,

    /// Kinopoisk API base URL
    #[serde(default = "default_kinopoisk_api_url")]
    pub kinopoisk_api_url: String,

    /// Number of movies requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_kinopoisk_api_url() -> String {
    "https://api.kinopoisk.dev".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_iter<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        if config.kinopoisk_api_key.trim().is_empty() {
            return Err(AppError::Config(
                "KINOPOISK_API_KEY cannot be empty".to_string(),
            ));
        }
        if config.page_size == 0 {
            return Err(AppError::Config("PAGE_SIZE must be positive".to_string()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_iter(vars(&[("KINOPOISK_API_KEY", "secret")])).unwrap();
        assert_eq!(config.kinopoisk_api_key, "secret");
        assert_eq!(config.kinopoisk_api_url, "https://api.kinopoisk.dev");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_iter(vars(&[
            ("KINOPOISK_API_KEY", "secret"),
            ("KINOPOISK_API_URL", "http://localhost:9000"),
            ("PAGE_SIZE", "25"),
        ]))
        .unwrap();
        assert_eq!(config.kinopoisk_api_url, "http://localhost:9000");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::from_iter(vars(&[("PAGE_SIZE", "25")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let result = Config::from_iter(vars(&[("KINOPOISK_API_KEY", "  ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Config::from_iter(vars(&[
            ("KINOPOISK_API_KEY", "secret"),
            ("PAGE_SIZE", "0"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
