use std::time::Duration;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::{SearchError, SearchHit};

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, Clone)]
pub struct OmdbSettings {
    pub base_url: String,
    /// Sent as-is; an unset key still issues the request with an empty
    /// `apikey` parameter, and the upstream rejection surfaces as a
    /// normal failure.
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for OmdbSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    settings: OmdbSettings,
    http: reqwest::Client,
}

impl OmdbClient {
    pub fn new(settings: OmdbSettings) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))?;
        Ok(Self { settings, http })
    }

    fn request_url(&self, query: &str) -> Result<url::Url, SearchError> {
        let mut url = url::Url::parse(&self.settings.base_url)
            .map_err(|err| SearchError::Network(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("s", query)
            .append_pair("apikey", &self.settings.api_key);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SearchClient for OmdbClient {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.request_url(query)?;
        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            sent = self.http.get(url).send() => {
                sent.map_err(|err| SearchError::Network(err.to_string()))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = tokio::select! {
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            parsed = response.json::<SearchResponse>() => {
                parsed.map_err(|err| SearchError::Network(err.to_string()))?
            }
        };

        if body.response.eq_ignore_ascii_case("false") {
            let message = body
                .error
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            // Upstream reports an empty result set as an error; it is not one.
            if message.to_lowercase().contains("not found") {
                return Ok(Vec::new());
            }
            return Err(SearchError::Upstream(message));
        }

        Ok(body
            .search
            .unwrap_or_default()
            .into_iter()
            .map(SearchHit::from)
            .collect())
    }
}

/// OMDb search response wire shape.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbMovie>>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbMovie {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster")]
    poster: String,
    #[serde(rename = "Type")]
    kind: Option<String>,
}

impl From<OmdbMovie> for SearchHit {
    fn from(movie: OmdbMovie) -> Self {
        Self {
            id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            poster_url: movie.poster,
            kind: movie.kind,
        }
    }
}
