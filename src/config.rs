// Use 3rd party
use anyhow::Context;
use serde::{Deserialize, Serialize};

// Use built-in library
use std::path::Path;

pub const ITUNES_BASE_URL: &str = "https://itunes.apple.com";
pub const DEEZER_BASE_URL: &str = "https://api.deezer.com";
pub const DEFAULT_TERM: &str = "pop";
pub const DEFAULT_LIMIT: u16 = 10;

/// Where the track pool of a session comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolSource {
    /// iTunes song search for a keyword.
    Search { term: String },
    /// Every track of one Deezer album.
    Album { id: String },
}

/// Settings for the catalog client and the game driver.
///
/// Every key is optional in a TOML file; missing keys fall back to
/// [`CatalogConfig::default`].
///
/// ```toml
/// term = "eminem"
/// limit = 25
/// country = "US"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub term: String,
    pub limit: u16,
    pub country: Option<String>,
    pub album_id: Option<String>,
    pub itunes_base_url: String,
    pub deezer_base_url: String,
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            term: DEFAULT_TERM.to_owned(),
            limit: DEFAULT_LIMIT,
            country: None,
            album_id: None,
            itunes_base_url: ITUNES_BASE_URL.to_owned(),
            deezer_base_url: DEEZER_BASE_URL.to_owned(),
            seed: None,
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self::default().term(term)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }

    pub fn term(mut self, term: &str) -> Self {
        self.term = term.to_owned();
        self
    }

    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = limit;
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_owned());
        self
    }

    pub fn album(mut self, album_id: &str) -> Self {
        self.album_id = Some(album_id.to_owned());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn itunes_base_url(mut self, url: &str) -> Self {
        self.itunes_base_url = url.trim_end_matches('/').to_owned();
        self
    }

    pub fn deezer_base_url(mut self, url: &str) -> Self {
        self.deezer_base_url = url.trim_end_matches('/').to_owned();
        self
    }

    /// An album id wins over the search term.
    pub fn pool_source(&self) -> PoolSource {
        match &self.album_id {
            Some(id) => PoolSource::Album { id: id.clone() },
            None => PoolSource::Search {
                term: self.term.clone(),
            },
        }
    }
}
