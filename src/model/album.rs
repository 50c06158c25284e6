// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::track::Track;
use crate::model::DeezerItems;

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct DeezerArtist {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct DeezerTrack {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub duration: Option<u32>,
    pub preview: Option<String>,
    pub artist: Option<DeezerArtist>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct DeezerAlbum {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub cover: Option<String>,
    pub cover_medium: Option<String>,
    pub release_date: Option<String>,
    pub nb_tracks: Option<u32>,
    pub artist: Option<DeezerArtist>,
    #[serde(default)]
    pub tracks: DeezerItems<DeezerTrack>,
}

impl DeezerAlbum {
    /// Album tracks share the album's title, cover and release date. A track
    /// without its own artist takes the album artist.
    pub fn into_tracks(self) -> Vec<Track> {
        let album = self.title.unwrap_or_default();
        let cover = self.cover_medium.or(self.cover).unwrap_or_default();
        let release_date = self.release_date.unwrap_or_default();
        let album_artist = self.artist.and_then(|artist| artist.name);

        self.tracks
            .data
            .into_iter()
            .filter_map(|track| {
                let title = track.title?;
                let artist = track
                    .artist
                    .and_then(|artist| artist.name)
                    .or_else(|| album_artist.clone())
                    .unwrap_or_default();
                Some(Track {
                    title,
                    artist,
                    album: album.clone(),
                    cover: cover.clone(),
                    preview: track.preview.unwrap_or_default(),
                    release_date: release_date.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_into_tracks() {
        let album: DeezerAlbum = serde_json::from_str(
            r#"{
                "id": 302127,
                "title": "Discovery",
                "cover_medium": "https://example.com/250x250.jpg",
                "release_date": "2001-03-07",
                "artist": {"id": 27, "name": "Daft Punk"},
                "tracks": {"data": [
                    {"id": 3135553, "title": "One More Time", "preview": "https://example.com/1.mp3"},
                    {"id": 3135554, "title": "Aerodynamic", "artist": {"name": "Daft Punk feat. Nobody"}},
                    {"id": 3135555}
                ]}
            }"#,
        )
        .unwrap();

        let tracks = album.into_tracks();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title, "One More Time");
        assert_eq!(tracks[0].artist, "Daft Punk");
        assert_eq!(tracks[0].album, "Discovery");
        assert_eq!(tracks[0].cover, "https://example.com/250x250.jpg");
        assert_eq!(tracks[0].release_date, "2001-03-07");
        assert_eq!(tracks[1].artist, "Daft Punk feat. Nobody");
        assert_eq!(tracks[1].preview, "");
    }

    #[test]
    fn album_without_tracks() {
        let album: DeezerAlbum = serde_json::from_str(r#"{"id": 1, "title": "Empty"}"#).unwrap();
        assert!(album.into_tracks().is_empty());
    }
}
