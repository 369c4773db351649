//! Web API payloads, trimmed to the fields the client renders or sends back.

use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// A track as returned by search or a playlist listing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Album,
    #[serde(default)]
    pub duration_ms: u32,
}

impl Item {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Page<Item>>,
}

/// Track reference carried through the queue pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueItem {
    pub id: String,
    pub uri: String,
    /// Display label, empty when unknown.
    pub title: String,
}

impl QueueItem {
    pub fn new(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            title: String::new(),
        }
    }
}

impl From<&Item> for QueueItem {
    fn from(item: &Item) -> Self {
        let artists = item.artist_names();
        let title = if artists.is_empty() {
            item.name.clone()
        } else {
            format!("{} - {}", item.name, artists)
        };
        Self {
            id: item.id.clone(),
            uri: item.uri.clone(),
            title,
        }
    }
}
