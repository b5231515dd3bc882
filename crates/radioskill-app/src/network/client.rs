//! JSON API client
//!
//! Blocking client bound to one API server. Endpoints are paths relative to
//! that server, and any non-success status is turned into an error before
//! the body is decoded.

use crate::error::Result;
use radioskill::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub struct ApiClient {
    inner: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the server at `base_url` (a trailing `/` is dropped)
    pub fn new(base_url: &str) -> Result<Self> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` on this server
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        Self::fetch(self.inner.get(&url))
    }

    /// POST `params` form-encoded to `path` and decode the JSON body
    pub fn post_form_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!("POST {} {:?}", url, params);
        Self::fetch(self.inner.post(&url).form(params))
    }

    fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let resp = request.send()?.error_for_status()?;
        Ok(resp.json::<T>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use radioskill::error::RadioError;

    #[test]
    fn test_trailing_slash_dropped() {
        let client = ApiClient::new("https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let client = ApiClient::new("https://api.example.com/").unwrap();
        assert_eq!(
            client.endpoint("/json/stations/search"),
            "https://api.example.com/json/stations/search"
        );
        assert_eq!(
            client.endpoint("json/stations/byuuid/abc"),
            "https://api.example.com/json/stations/byuuid/abc"
        );
    }

    #[test]
    fn test_get_json_unreachable_is_network_error() {
        let client = ApiClient::new("http://invalid.invalid.invalid").unwrap();
        let result: Result<serde_json::Value> = client.get_json("/json/stats");
        assert!(matches!(result, Err(AppError::Engine(RadioError::Network(_)))));
    }

    #[test]
    fn test_post_form_json_unreachable_is_error() {
        let client = ApiClient::new("http://invalid.invalid.invalid").unwrap();
        let result: Result<serde_json::Value> =
            client.post_form_json("/json/stations/search", &[("name", "jazz")]);
        assert!(result.is_err());
    }
}
