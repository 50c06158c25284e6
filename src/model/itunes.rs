// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::track::Track;

//iTunes search result example:
//{
    //"wrapperType": "track",
    //"kind": "song",
    //"artistName": "Daft Punk",
    //"collectionName": "Random Access Memories",
    //"trackName": "Get Lucky (feat. Pharrell Williams & Nile Rodgers)",
    //"previewUrl": "https://audio-ssl.itunes.apple.com/.../mzaf_1.plus.aac.p.m4a",
    //"artworkUrl100": "https://is1-ssl.mzstatic.com/.../100x100bb.jpg",
    //"releaseDate": "2013-04-19T12:00:00Z"
//}

#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesSearch {
    pub result_count: Option<u32>,
    #[serde(default)]
    pub results: Vec<ItunesSong>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesSong {
    pub wrapper_type: Option<String>,
    pub kind: Option<String>,
    pub track_id: Option<u64>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    pub track_name: Option<String>,
    pub preview_url: Option<String>,
    pub artwork_url100: Option<String>,
    pub release_date: Option<String>,
    pub primary_genre_name: Option<String>,
    pub country: Option<String>,
}

impl ItunesSong {
    /// Results without a track name are collections or artists and cannot be
    /// played, so they yield `None`.
    pub fn into_track(self) -> Option<Track> {
        let title = self.track_name?;
        Some(Track {
            title,
            artist: self.artist_name.unwrap_or_default(),
            album: self.collection_name.unwrap_or_default(),
            cover: self.artwork_url100.unwrap_or_default(),
            preview: self.preview_url.unwrap_or_default(),
            release_date: self.release_date.unwrap_or_default(),
        })
    }
}

impl ItunesSearch {
    pub fn into_tracks(self) -> Vec<Track> {
        self.results
            .into_iter()
            .filter_map(ItunesSong::into_track)
            .collect()
    }
}
