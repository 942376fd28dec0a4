//! Wire-shaped record model for catalog entries

use serde::Deserialize;

/// One catalog entry as returned by the API
///
/// Field names follow the GraphQL schema; entries are immutable once
/// deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub id: i64,
    #[serde(default)]
    pub title: MediaTitle,
    pub episodes: Option<u32>,
    /// Enum-like string: TV, TV_SHORT, MOVIE, SPECIAL, OVA, ONA, MUSIC
    pub format: Option<String>,
    pub season: Option<String>,
    #[serde(rename = "seasonYear")]
    pub season_year: Option<u32>,
}

/// Title variants for a media entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

impl MediaTitle {
    /// The title the output blocks are keyed by
    pub fn primary(&self) -> &str {
        self.romaji.as_deref().unwrap_or("")
    }
}
