//! Catalog data model
//!
//! The normalized shapes handed over by the scraping stage. Every field is
//! optional in the source data; the accessors below apply the fallbacks so
//! the playlist code never has to look at raw values.

use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when an entry has no usable name.
pub const NAME_PLACEHOLDER: &str = "Bilinmeyen";

/// Display title used when a record has no usable title.
pub const TITLE_PLACEHOLDER: &str = "Bölüm";

/// One catalog item: a series, a program or an event group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "img")]
    pub logo_url: Option<String>,

    /// Output routing label, never written into a playlist.
    #[serde(default, alias = "type", deserialize_with = "null_as_default")]
    pub category: String,

    /// Playback order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub episodes: Vec<StreamRecord>,
}

/// One playable unit: an episode or a match highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    #[serde(default, alias = "name")]
    pub title: Option<String>,

    #[serde(default, alias = "stream_url")]
    pub stream_url: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub tvg_id: Option<String>,

    #[serde(default)]
    pub tvg_name: Option<String>,
}

// helper. `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// helper.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ContentEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_logo(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn with_episode(mut self, record: StreamRecord) -> Self {
        self.episodes.push(record);
        self
    }

    /// Trimmed name, or the placeholder when absent or blank.
    ///
    /// A blank name counts as absent, so its `group-title` is the
    /// placeholder and its file is `bilinmeyen.m3u`.
    pub fn display_name(&self) -> &str {
        non_blank(&self.name).unwrap_or(NAME_PLACEHOLDER)
    }

    /// Trimmed logo; empty string means "no logo".
    pub fn logo(&self) -> &str {
        non_blank(&self.logo_url).unwrap_or("")
    }

    /// Records that carry a stream URL, in playback order.
    pub fn qualifying_records(&self) -> impl Iterator<Item = &StreamRecord> {
        self.episodes.iter().filter(|r| r.is_playable())
    }

    pub fn has_playable(&self) -> bool {
        self.qualifying_records().next().is_some()
    }
}

impl StreamRecord {
    pub fn new(title: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            stream_url: Some(stream_url.into()),
            ..Default::default()
        }
    }

    pub fn with_logo(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn with_tvg_id(mut self, tvg_id: impl Into<String>) -> Self {
        self.tvg_id = Some(tvg_id.into());
        self
    }

    pub fn with_tvg_name(mut self, tvg_name: impl Into<String>) -> Self {
        self.tvg_name = Some(tvg_name.into());
        self
    }

    pub fn is_playable(&self) -> bool {
        non_blank(&self.stream_url).is_some()
    }

    /// Trimmed stream URL; empty when the record is not playable.
    pub fn url(&self) -> &str {
        non_blank(&self.stream_url).unwrap_or("")
    }

    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or(TITLE_PLACEHOLDER)
    }

    /// Record logo, falling back to the owning entry's logo.
    pub fn resolved_logo<'a>(&'a self, owner: &'a ContentEntry) -> &'a str {
        non_blank(&self.logo_url).unwrap_or_else(|| owner.logo())
    }

    pub fn tvg_id(&self) -> Option<&str> {
        non_blank(&self.tvg_id)
    }

    pub fn tvg_name(&self) -> Option<&str> {
        non_blank(&self.tvg_name)
    }
}
