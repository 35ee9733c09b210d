use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One page of results as reported by the upstream API
///
/// Counters are trusted as-is; missing, null or non-integer ones read as zero.
/// The item list is required, so a payload without `docs` fails to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultPage<T> {
    #[serde(rename = "docs")]
    pub items: Vec<T>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub limit: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub page: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pages: u32,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

impl<T> ResultPage<T> {
    /// The zero-valued page handed out whenever a fetch fails
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            limit: 0,
            page: 0,
            pages: 0,
        }
    }

    /// Treat a complete list as a single page
    pub fn single(items: Vec<T>) -> Self {
        let len = items.len() as u32;
        Self {
            items,
            total: len,
            limit: len,
            page: 1,
            pages: 1,
        }
    }
}

impl ResultPage<Value> {
    /// Decodes every raw item on its own; items that do not fit `T` are
    /// logged and dropped, the rest of the page is kept.
    pub fn decode_items<T: DeserializeOwned>(self) -> ResultPage<T> {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value(raw) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed item");
                    None
                }
            })
            .collect();

        ResultPage {
            items,
            total: self.total,
            limit: self.limit,
            page: self.page,
            pages: self.pages,
        }
    }
}

impl<T> Default for ResultPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
