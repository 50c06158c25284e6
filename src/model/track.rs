// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::game::year::{extract_year, ReleaseYear};

/// One song of the pool, projected from whichever catalog returned it.
///
/// Field names serialize in camelCase (`releaseDate`), matching the payload
/// the web gateway of the game produced.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub preview: String,
    pub release_date: String,
}

impl Track {
    /// Year of `release_date`, or the current year when it does not parse.
    pub fn release_year(&self) -> ReleaseYear {
        extract_year(&self.release_date)
    }
}
