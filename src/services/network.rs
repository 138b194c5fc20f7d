// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-over-HTTP client for the remote API.
//!
//! Handles:
//! - URL resolution against the configured base URL
//! - Bearer token attachment when a session exists
//! - Status checking and JSON decoding
//!
//! The domain services persist locally and do not call this client.

use crate::error::NetworkError;
use crate::services::AuthService;
use reqwest::{RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Serialize};

type NetResult<T> = std::result::Result<T, NetworkError>;

/// Remote API client.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    auth: Option<AuthService>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth: None,
        }
    }

    /// Attach the session's token to every request made while signed in.
    pub fn with_auth(mut self, auth: AuthService) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path of a single resource, e.g. `workouts/<id>` with the id URL-encoded.
    pub fn resource_path(collection: &str, id: &str) -> String {
        format!("{}/{}", collection, urlencoding::encode(id))
    }

    /// Resolve a path (or an absolute `http(s)` URL) to a full URL.
    pub fn url_for(&self, path: &str) -> NetResult<Url> {
        let raw = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        };
        Url::parse(&raw).map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// GET and decode a JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> NetResult<T> {
        let url = self.url_for(path)?;
        let response = self.send(self.http.get(url)).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> NetResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        let response = self.send(self.http.post(url).json(body)).await?;
        Self::decode(response).await
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> NetResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        let response = self.send(self.http.put(url).json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE a resource, ignoring any response body.
    pub async fn delete(&self, path: &str) -> NetResult<()> {
        let url = self.url_for(path)?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Send a request and check the response status.
    async fn send(&self, request: RequestBuilder) -> NetResult<Response> {
        let request = match &self.auth {
            Some(auth) => match auth.token().await {
                Ok(token) => request.bearer_auth(token),
                Err(_) => request,
            },
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %response.url(), "Request rejected");
            return Err(NetworkError::InvalidResponse(status.as_u16()));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> NetResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| NetworkError::DecodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base_and_path() {
        let client = HttpClient::new("https://api.fitjourney.com/");
        let url = client.url_for("/workouts").unwrap();
        assert_eq!(url.as_str(), "https://api.fitjourney.com/workouts");
    }

    #[test]
    fn test_url_for_accepts_absolute_url() {
        let client = HttpClient::new("https://api.fitjourney.com");
        let url = client.url_for("http://localhost:9000/goals").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/goals");
    }

    #[test]
    fn test_url_for_rejects_malformed_base() {
        let client = HttpClient::new("not a url");
        assert!(matches!(
            client.url_for("workouts"),
            Err(NetworkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resource_path_encodes_id() {
        assert_eq!(HttpClient::resource_path("goals", "a b/c"), "goals/a%20b%2Fc");
    }
}
