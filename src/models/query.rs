use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

/// Field the upstream API sorts by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortField {
    #[serde(rename = "rating.kp")]
    Rating,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "name")]
    Name,
}

impl SortField {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::Rating => "rating.kp",
            SortField::Year => "year",
            SortField::Name => "name",
        }
    }
}

/// Sort direction, sent upstream as `sortType=1` or `sortType=-1`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "1",
            SortDirection::Descending => "-1",
        }
    }
}

/// User-facing sort choices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    Rating,
    Year,
    Name,
}

impl SortOption {
    /// Field and default direction for this choice
    pub fn to_sort(self) -> (SortField, SortDirection) {
        match self {
            SortOption::Rating => (SortField::Rating, SortDirection::Descending),
            SortOption::Year => (SortField::Year, SortDirection::Descending),
            SortOption::Name => (SortField::Name, SortDirection::Ascending),
        }
    }

    pub fn from_field(field: SortField) -> Self {
        match field {
            SortField::Rating => SortOption::Rating,
            SortField::Year => SortOption::Year,
            SortField::Name => SortOption::Name,
        }
    }
}

impl FromStr for SortOption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(SortOption::Rating),
            "year" => Ok(SortOption::Year),
            "name" => Ok(SortOption::Name),
            other => Err(AppError::InvalidInput(format!(
                "Unknown sort option '{}', expected rating, year or name",
                other
            ))),
        }
    }
}

/// Everything the user can adjust that determines the next movie request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub page_size: u32,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub search: String,
    /// Selected genre names in selection order, no duplicates
    pub genres: Vec<String>,
}

impl QueryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            sort_field: SortField::Rating,
            sort_direction: SortDirection::Descending,
            search: String::new(),
            genres: Vec::new(),
        }
    }

    /// Adds the genre if absent, removes it otherwise; resets the page
    pub fn toggle_genre(&mut self, name: &str) {
        if let Some(pos) = self.genres.iter().position(|g| g == name) {
            self.genres.remove(pos);
        } else {
            self.genres.push(name.to_string());
        }
        self.page = 1;
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
        self.page = 1;
    }

    pub fn set_sort(&mut self, option: SortOption) {
        let (field, direction) = option.to_sort();
        self.sort_field = field;
        self.sort_direction = direction;
        self.page = 1;
    }

    /// Sets the page, clamped to `[1, total_pages]`
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn is_selected(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn to_request(&self) -> MovieQuery {
        MovieQuery {
            page: self.page,
            limit: self.page_size,
            sort: Some((self.sort_field, self.sort_direction)),
            name: Some(self.search.clone()).filter(|s| !s.is_empty()),
            genres: self.genres.clone(),
        }
    }
}

/// A single movie request as handed to the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<(SortField, SortDirection)>,
    pub name: Option<String>,
    pub genres: Vec<String>,
}

impl MovieQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            sort: None,
            name: None,
            genres: Vec::new(),
        }
    }
}
