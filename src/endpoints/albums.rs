//! Endpoint functions relating to Deezer albums

use crate::client::{Catalog, ClientResult, Upstream};
use crate::model::album::DeezerAlbum;
use crate::model::track::Track;

pub struct Albums<'a>(pub &'a Catalog);

impl Albums<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<DeezerAlbum> {
        let url = format!("/album/{}", id);
        let result = self.0.get(Upstream::Deezer, &url, &[]).await?;
        Catalog::convert_deezer_result::<DeezerAlbum>(&result)
    }

    pub async fn tracks(&self, id: &str) -> ClientResult<Vec<Track>> {
        let tracks = self.get(id).await?.into_tracks();
        Ok(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::catalog;
    use crate::client::{ApiError, ClientError};
    use mockito::Server;

    #[tokio::test]
    async fn get() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/album/302127")
            .with_status(200)
            .with_body_from_file("tests/files/deezer_album.json")
            .create_async()
            .await;

        let result: DeezerAlbum = catalog(&server).albums().get("302127").await.unwrap();
        assert_eq!(result.id, Some(302127));
        assert_eq!(result.title.as_deref(), Some("Discovery"));
        assert_eq!(result.release_date.as_deref(), Some("2001-03-07"));
        assert_eq!(result.tracks.data.len(), 3);
    }

    #[tokio::test]
    async fn tracks() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/album/302127")
            .with_status(200)
            .with_body_from_file("tests/files/deezer_album.json")
            .create_async()
            .await;

        let result: Vec<Track> = catalog(&server).albums().tracks("302127").await.unwrap();
        assert_eq!(result[0].title, "One More Time");
        assert_eq!(result[0].artist, "Daft Punk");
        assert_eq!(result[0].release_date, "2001-03-07");
    }

    #[tokio::test]
    async fn get_error_payload() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/album/0")
            .with_status(200)
            .with_body_from_file("tests/files/deezer_error.json")
            .create_async()
            .await;

        let result = catalog(&server).albums().get("0").await;
        assert!(matches!(
            result,
            Err(ClientError::Api(ApiError::Deezer { .. }))
        ));
    }
}
