//! Endpoint functions related to the iTunes song search

use crate::client::*;
use crate::model::itunes::ItunesSearch;

pub struct Search<'a>(pub &'a Catalog);

impl Search<'_> {
    /// Songs matching `term`. `limit` falls back to the configured limit and
    /// the configured country, when set, narrows the store front.
    pub async fn find(&self, term: &str, limit: Option<u16>) -> ClientResult<ItunesSearch> {
        let url = "/search";
        let config = self.0.config();
        let limit = limit.unwrap_or(config.limit);

        let mut params: Vec<(&str, String)> = vec![
            ("term", term.to_owned()),
            ("entity", "song".to_owned()),
            ("limit", limit.to_string()),
        ];
        if let Some(country) = &config.country {
            params.push(("country", country.to_owned()));
        }

        let result = self.0.get(Upstream::Itunes, url, &params).await?;
        Catalog::convert_result::<ItunesSearch>(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{catalog, config, mock_request_success_from_file};
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn find() {
        let mut server = Server::new_async().await;
        let mock = mock_request_success_from_file(
            &mut server,
            "GET",
            "/search",
            vec![
                Matcher::UrlEncoded("term".into(), "pop".into()),
                Matcher::UrlEncoded("entity".into(), "song".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
            ],
            "tests/files/itunes_search.json",
        )
        .await;

        let result: ItunesSearch = catalog(&server).searches().find("pop", None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.result_count, Some(4));
        assert_eq!(result.results.len(), 4);
    }

    #[tokio::test]
    async fn find_with_country_and_limit() {
        let mut server = Server::new_async().await;
        let mock = mock_request_success_from_file(
            &mut server,
            "GET",
            "/search",
            vec![
                Matcher::UrlEncoded("term".into(), "eminem".into()),
                Matcher::UrlEncoded("limit".into(), "3".into()),
                Matcher::UrlEncoded("country".into(), "US".into()),
            ],
            "tests/files/itunes_search.json",
        )
        .await;

        let catalog = Catalog::new(config(&server).country("US"));
        catalog.searches().find("eminem", Some(3)).await.unwrap();

        mock.assert_async().await;
    }
}
