//! Normalization of the "possible values by field" response for genres.
//!
//! Upstream has answered with several different shapes over time. Each known
//! shape gets its own parser; they are tried in order and the first match
//! wins. Anything else is reported as [`GenreShape::Unrecognized`].

use serde_json::{Map, Value};

use crate::models::Genre;

/// The response shape a genre payload was recognized as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreShape {
    /// `[{"name": "драма", "slug": "drama"}, ...]`
    Objects(Vec<Genre>),
    /// `["драма", "комедия", ...]`
    Strings(Vec<Genre>),
    /// `{"docs": [...]}`
    Wrapped(Vec<Genre>),
    /// `{"anything": [...], ...}` where the first value is a list
    FirstListValue(Vec<Genre>),
    Unrecognized,
}

impl GenreShape {
    pub fn parse(raw: &Value) -> Self {
        if let Some(genres) = parse_objects(raw) {
            GenreShape::Objects(genres)
        } else if let Some(genres) = parse_strings(raw) {
            GenreShape::Strings(genres)
        } else if let Some(genres) = parse_wrapped(raw) {
            GenreShape::Wrapped(genres)
        } else if let Some(genres) = parse_first_list_value(raw) {
            GenreShape::FirstListValue(genres)
        } else {
            GenreShape::Unrecognized
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GenreShape::Objects(_) => "objects",
            GenreShape::Strings(_) => "strings",
            GenreShape::Wrapped(_) => "wrapped",
            GenreShape::FirstListValue(_) => "first_list_value",
            GenreShape::Unrecognized => "unrecognized",
        }
    }

    pub fn into_genres(self) -> Option<Vec<Genre>> {
        match self {
            GenreShape::Objects(genres)
            | GenreShape::Strings(genres)
            | GenreShape::Wrapped(genres)
            | GenreShape::FirstListValue(genres) => Some(genres),
            GenreShape::Unrecognized => None,
        }
    }
}

/// Normalizes a raw payload into genres, `None` if the shape is unknown
pub fn normalize_genres(raw: &Value) -> Option<Vec<Genre>> {
    GenreShape::parse(raw).into_genres()
}

fn parse_objects(raw: &Value) -> Option<Vec<Genre>> {
    let entries = raw.as_array()?;
    let first = entries.first()?;
    if !first.is_object() {
        return None;
    }
    Some(collect(entries, |index, entry| {
        entry.as_object().and_then(|obj| genre_from_object(index, obj))
    }))
}

fn parse_strings(raw: &Value) -> Option<Vec<Genre>> {
    let entries = raw.as_array()?;
    Some(collect(entries, |index, entry| {
        entry.as_str().and_then(|name| genre_from_name(index, name))
    }))
}

fn parse_wrapped(raw: &Value) -> Option<Vec<Genre>> {
    let entries = raw.get("docs")?.as_array()?;
    Some(collect(entries, genre_from_entry))
}

fn parse_first_list_value(raw: &Value) -> Option<Vec<Genre>> {
    let entries = raw.as_object()?.values().next()?.as_array()?;
    Some(collect(entries, genre_from_entry))
}

fn collect<F>(entries: &[Value], f: F) -> Vec<Genre>
where
    F: Fn(u64, &Value) -> Option<Genre>,
{
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| f(index as u64, entry))
        .collect()
}

fn genre_from_entry(index: u64, entry: &Value) -> Option<Genre> {
    match entry {
        Value::Object(obj) => genre_from_object(index, obj),
        Value::String(name) => genre_from_name(index, name),
        _ => None,
    }
}

/// A genre is valid only with a string name that is not blank
fn genre_from_object(index: u64, obj: &Map<String, Value>) -> Option<Genre> {
    let name = obj.get("name")?.as_str()?;
    let mut genre = genre_from_name(index, name)?;
    if let Some(id) = obj.get("id").and_then(Value::as_u64) {
        genre.id = id;
    }
    genre.slug = obj.get("slug").and_then(Value::as_str).map(str::to_string);
    Some(genre)
}

fn genre_from_name(index: u64, name: &str) -> Option<Genre> {
    if name.trim().is_empty() {
        return None;
    }
    Some(Genre::new(index, name.trim()))
}
