use crate::airline_search::RequestToken;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://iata-code-decoder-api.onrender.com/airlines";

/// Airline record as returned by the IATA code decoder API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub iata_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_lockup_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_symbol_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions_of_carriage_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AirlineSearchResponse {
    Success { data: Vec<Airline> },
    Failure { data: ApiError },
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// The request was superseded by a newer search.
    #[error("request cancelled")]
    Cancelled,
    /// Non-2xx status. Holds the status text.
    #[error("{0}")]
    Http(String),
    /// Error reported inside an otherwise successful response body.
    #[error("{0}")]
    Api(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid search url: {0}")]
    Url(#[from] url::ParseError),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

/// Something that can look up airlines for a query.
pub trait AirlineSource: Send + Sync {
    fn search(&self, query: &str, token: &RequestToken) -> Result<Vec<Airline>, SearchError>;
}

/// Build `base?query=<text>` with the query url-encoded.
pub fn search_url(base: &str, query: &str) -> Result<Url, SearchError> {
    Ok(Url::parse_with_params(base, &[("query", query)])?)
}

/// Text used when a request fails with a non-success status.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Map an HTTP status and body to the airlines it carries or the error it reports.
pub fn parse_response(status: StatusCode, body: &str) -> Result<Vec<Airline>, SearchError> {
    if !status.is_success() {
        return Err(SearchError::Http(status_text(status)));
    }
    match serde_json::from_str::<AirlineSearchResponse>(body)? {
        AirlineSearchResponse::Success { data } => Ok(data),
        AirlineSearchResponse::Failure { data } => Err(SearchError::Api(data.error)),
    }
}

pub struct HttpAirlineSource {
    client: Client,
    base_url: String,
}

impl HttpAirlineSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent("launcher-extensions airline search");
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AirlineSource for HttpAirlineSource {
    fn search(&self, query: &str, token: &RequestToken) -> Result<Vec<Airline>, SearchError> {
        if !token.is_current() {
            return Err(SearchError::Cancelled);
        }
        let url = search_url(&self.base_url, query)?;
        tracing::debug!(%url, generation = token.generation(), "airline search request");
        let resp = self.client.get(url).send()?;
        // Blocking requests cannot be aborted mid-flight; drop the body of a
        // superseded request instead of decoding it.
        if !token.is_current() {
            return Err(SearchError::Cancelled);
        }
        let status = resp.status();
        let body = resp.text()?;
        parse_response(status, &body)
    }
}
