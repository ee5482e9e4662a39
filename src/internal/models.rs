use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single article record as returned by the articles API.
///
/// Every field is optional: the API mixes stories and comments in the same
/// listing, so either `title` or `story_title` (or neither) may be present.
/// A field of the wrong type reads as absent instead of failing the page.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Article {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub story_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub num_comments: Option<u64>,
}

/// Read an optional field, mapping null or a mistyped value to `None`.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Read the `data` array record by record, dropping entries that are not
/// article objects (e.g. `null` or a bare number).
fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<Article>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = values.len();
    let records: Vec<Article> = values
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    if records.len() < total {
        tracing::debug!(dropped = total - records.len(), "skipped malformed records");
    }
    Ok(records)
}

impl Article {
    /// Resolve the human-readable title, preferring `title` over `story_title`.
    /// Empty strings are treated as absent.
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.story_title.as_deref().filter(|t| !t.is_empty()))
    }

    /// Comment count with a missing or null value read as zero.
    pub fn comment_count(&self) -> u64 {
        self.num_comments.unwrap_or(0)
    }

    pub fn is_valid(&self) -> bool {
        self.display_title().is_some()
    }
}

/// One page of the paginated articles listing.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct PageResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    pub total_pages: u32,
    #[serde(default, deserialize_with = "deserialize_records")]
    pub data: Vec<Article>,
}

/// A ranked `(title, comments)` pair ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub title: String,
    pub num_comments: u64,
}

impl RankedEntry {
    /// Project an article into a ranked entry. Returns `None` when the
    /// article has no usable title.
    pub fn from_article(article: &Article) -> Option<Self> {
        Some(Self {
            title: article.display_title()?.to_string(),
            num_comments: article.comment_count(),
        })
    }
}
