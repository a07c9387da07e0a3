//! HTTP client for the search backend.
//!
//! The backend is an opaque collaborator: one read-only endpoint,
//! `GET {base_url}/search?q=<query>`, returning trials plus the query
//! interpretation. Everything that is not a 2xx response with a
//! well-formed body is an error; the caller decides what to do with it
//! (the TUI keeps the last-known-good results and only logs).

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::Config;
use crate::types::SearchResponse;

/// Failure taxonomy for a search request.
///
/// All three variants are handled identically at the controller boundary;
/// they are distinguished for diagnostics and tests.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or no response was received.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),
    /// The backend answered with a non-success status code.
    #[error("server failure: status {status}")]
    Server { status: StatusCode },
    /// The response body is missing expected fields or has the wrong shape.
    #[error("malformed response: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Search backend client.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one search request for the given query.
    ///
    /// The query is passed as the URL-encoded `q` parameter. No retry; no
    /// client-side timeout (an unresolved request stays pending until the
    /// transport settles it).
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(%url, %query, "issuing search request");
        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(SearchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Server { status });
        }

        let body = response.bytes().await.map_err(SearchError::Network)?;
        serde_json::from_slice(&body).map_err(SearchError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn trial_body() -> serde_json::Value {
        json!({
            "trials": [{
                "nct_id": "NCT01234567",
                "brief_title": "A Study of Things",
                "overall_status": "RECRUITING",
                "phase": "PHASE3",
                "conditions": ["Asthma"],
                "sponsors": [{"name": "NIH", "lead_or_collaborator": "lead"}]
            }],
            "interpretation": {"condition": "asthma", "phase": null},
            "total": 1
        })
    }

    #[tokio::test]
    async fn test_search_decodes_success_body() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "phase 3 asthma"))
            .respond_with(ResponseTemplate::new(200).set_body_json(trial_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SearchClient::new(server.uri());
        let response = client.search("phase 3 asthma").await.unwrap();

        assert_eq!(response.trials.len(), 1);
        assert_eq!(response.trials[0].nct_id, "NCT01234567");
        assert_eq!(
            response.interpretation.get("condition"),
            Some(&Some("asthma".to_string()))
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_server_failure() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SearchClient::new(server.uri());
        let error = client.search("anything").await.unwrap_err();
        assert!(matches!(
            error,
            SearchError::Server {
                status: StatusCode::INTERNAL_SERVER_ERROR
            }
        ));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        // 200 with a body missing the required top-level fields
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hits": []})))
            .mount(&server)
            .await;

        let client = SearchClient::new(server.uri());
        let error = client.search("anything").await.unwrap_err();
        assert!(matches!(error, SearchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_failure() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        // Bind then drop to get a port with nothing listening on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = SearchClient::new(format!("http://127.0.0.1:{port}"));
        let error = client.search("anything").await.unwrap_err();
        assert!(matches!(error, SearchError::Network(_)));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = SearchClient::new("http://localhost:5003/");
        assert_eq!(client.base_url(), "http://localhost:5003");
    }
}
