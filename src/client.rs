// Use 3rd party
use log::{debug, error};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

// Use built-in library
use std::fmt;

// Use internal modules
use crate::config::CatalogConfig;

// Possible errors returned from the catalog client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("catalog error: {0}")]
    Api(#[from] ApiError),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status code: {0}")]
    StatusCode(StatusCode),
}

impl ClientError {
    async fn from_response(response: Response) -> Self {
        let status = response.status();
        response
            .json::<ApiError>()
            .await
            .map_or_else(|_| status.into(), Into::into)
    }
}

impl From<StatusCode> for ClientError {
    fn from(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }
}

// Error payloads the upstreams send back.
//
// Deezer answers with `{"error": {"type": .., "message": .., "code": ..}}`
// (often with a 200 status), the iTunes search with `{"errorMessage": ..}`
// and gateways in front of either with `{"error": ".."}`.
#[derive(Debug, Error, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    #[error("{error}")]
    Deezer { error: DeezerErrorBody },
    #[error("{error}")]
    Gateway { error: String },
    #[error("{message}")]
    Itunes {
        #[serde(rename = "errorMessage")]
        message: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeezerErrorBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub code: u32,
}

impl fmt::Display for DeezerErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.code, self.message)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upstream {
    Itunes,
    Deezer,
}

// Catalog API
pub struct Catalog {
    client: Client,
    config: CatalogConfig,
}

impl Catalog {
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn base_url(&self, upstream: Upstream) -> &str {
        match upstream {
            Upstream::Itunes => &self.config.itunes_base_url,
            Upstream::Deezer => &self.config.deezer_base_url,
        }
    }

    async fn api_call(
        &self,
        method: Method,
        upstream: Upstream,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Response> {
        let url = [self.base_url(upstream), path].concat();
        debug!("{} {} {:?}", method, url, query);

        let response = self
            .client
            .request(method, &url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(ClientError::from)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            error!("{} answered {}", url, response.status());
            Err(ClientError::from_response(response).await)
        }
    }

    pub async fn get(
        &self,
        upstream: Upstream,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<String> {
        self.api_call(Method::GET, upstream, path, query)
            .await?
            .text()
            .await
            .map_err(Into::into)
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }

    // Deezer reports failures inside successful responses, so look for an
    // error payload before decoding the body as `T`.
    pub(crate) fn convert_deezer_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        if let Ok(api_error @ ApiError::Deezer { .. }) = serde_json::from_str::<ApiError>(input) {
            error!("deezer error payload: {}", api_error);
            return Err(api_error.into());
        }
        Self::convert_result::<T>(input)
    }
}
