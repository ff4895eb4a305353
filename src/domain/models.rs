use serde::{Deserialize, Serialize};

/// One row of a search-results table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultEntry {
    pub url: String,
    pub name: String,
}

impl SearchResultEntry {
    pub fn new(url: &str, name: &str) -> Self {
        Self {
            url: url.to_string(),
            name: name.to_string(),
        }
    }
}

/// Tournament metadata extracted from a single tournament page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub key: String,
    pub url: String,
    pub name: String,
    pub group: String,
    pub is_final: bool,
    pub current_round: Option<String>,
    pub max_round: Option<String>,
    /// Always `None`; kept so serialized records keep their full shape.
    pub reserved: Option<String>,
}

impl Tournament {
    pub fn rounds_played(&self) -> Option<(u32, u32)> {
        let current = self.current_round.as_deref()?.trim().parse().ok()?;
        let max = self.max_round.as_deref()?.trim().parse().ok()?;
        Some((current, max))
    }
}
