//! Endpoint functions producing game-ready tracks

use crate::client::*;
use crate::config::PoolSource;
use crate::model::track::*;

pub struct Tracks<'a>(pub &'a Catalog);

impl Tracks<'_> {
    pub async fn search(&self, term: &str, limit: Option<u16>) -> ClientResult<Vec<Track>> {
        let tracks = self.0.searches().find(term, limit).await?.into_tracks();
        Ok(tracks)
    }

    /// A fresh pool for the configured source. An empty vector is a valid
    /// answer and is left to the caller to reject.
    pub async fn pool(&self) -> ClientResult<Vec<Track>> {
        match self.0.config().pool_source() {
            PoolSource::Search { term } => self.search(&term, None).await,
            PoolSource::Album { id } => self.0.albums().tracks(&id).await,
        }
    }
}
