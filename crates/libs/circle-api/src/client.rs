//! Request dispatch shared by every endpoint.

use reqwest::{
    blocking::{Client, Response},
    header,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    endpoint::{Endpoint, Verb},
    prelude::*,
};

/// Public CircleCI REST endpoint.
///
/// CircleCI server installations expose the same API under their own
/// host, e.g. `https://circleci.yourcompany.com/api/v1.1`.
pub const DEFAULT_URL: &str = "https://circleci.com/api/v1.1";

/// Blocking CircleCI API client.
///
/// Holds a single credential for its whole lifetime. Every call maps to
/// exactly one HTTP request; nothing is cached and nothing is retried.
pub struct Api {
    url: String,
    token: String,
    pub(crate) client: Client,
}

impl Api {
    /// Creates a client for the public CircleCI API.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use circle_api::Api;
    ///
    /// let api = Api::new("my-token").unwrap();
    /// let me = api.get_user_info().unwrap();
    /// println!("{}", me["login"]);
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_url(token, DEFAULT_URL)
    }

    /// Creates a client for a custom installation.
    pub fn with_url(token: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("circle-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let url: String = url.into();
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// Base URL every endpoint path is appended to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Constructs the full URL for an endpoint path.
    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    /// Sends `endpoint` and decodes the JSON response.
    pub fn execute<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = self.path(&endpoint.path);
        debug!("{} {}", endpoint.verb, url);

        let mut request = self
            .client
            .request(endpoint.verb.into(), &url)
            .basic_auth(&self.token, None::<&str>)
            .query(&endpoint.query);
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        let response = request.send()?;
        let response = check_status(response, &url)?;
        let text = response.text()?;
        // Some endpoints answer 2xx with an empty body.
        if text.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Requests `endpoint` with a verb given as text.
    ///
    /// The verb is validated before anything is sent.
    pub fn raw(&self, verb: &str, endpoint: &str) -> Result<Value> {
        let verb: Verb = verb.parse()?;
        self.execute(&Endpoint::new(verb, endpoint))
    }
}

/// Turns a non-success response into [`Error::Status`].
///
/// `url` is reported instead of the response URL so query-string
/// credentials never end up in error messages.
pub(crate) fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    error!("{} returned {}: {}", url, status, body);
    Err(Error::Status {
        status: status.as_u16(),
        url: url.to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let api = Api::with_url("token", "https://circleci.example.com/api/v1.1/").unwrap();
        assert_eq!(api.url(), "https://circleci.example.com/api/v1.1");
        assert_eq!(api.path("me"), "https://circleci.example.com/api/v1.1/me");
    }

    #[test]
    fn default_url_points_at_public_api() {
        let api = Api::new("token").unwrap();
        assert_eq!(api.url(), DEFAULT_URL);
    }

    #[test]
    fn bad_verb_is_rejected_before_sending() {
        // Unroutable address: a request would fail with a transport error.
        let api = Api::with_url("token", "http://127.0.0.1:1").unwrap();
        let err = api.raw("BAD", "dummy").unwrap_err();
        match err {
            Error::BadVerb { verb, allowed } => {
                assert_eq!(verb, "BAD");
                assert!(allowed.contains("DELETE"));
            }
            other => panic!("Expected BadVerb, got {:?}", other),
        }
    }
}
