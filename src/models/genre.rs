use serde::{Deserialize, Serialize};

/// A genre value offered by the filter
///
/// `id` is only unique within one fetched batch: when upstream omits it, the
/// entry's position in the response is used instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Genre {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
        }
    }
}
