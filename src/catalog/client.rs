//! HTTP client for product service requests.
//!
//! This module provides a low-level HTTP client wrapper for the product
//! service, handling authentication, status mapping, and response parsing.

use super::CatalogError;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Makes requests to the product service and tries to conform response data
/// to the requested type.
///
pub struct Client {
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and optional access token.
    ///
    pub fn new(base_url: &str, access_token: Option<&str>) -> Self {
        Client {
            access_token: access_token.map(str::to_owned),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Return data for the resource at the endpoint, or `None` if the service
    /// reports that it does not exist.
    ///
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, CatalogError> {
        let response = self.request(Method::GET, endpoint).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("Resource '{}' not found", endpoint);
            return Ok(None);
        }
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    /// Send a JSON body with the given method and return the decoded response
    /// body, or `None` when the service answered without content.
    ///
    pub async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<T>, CatalogError> {
        let response = self.request(method, endpoint).json(body).send().await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    /// Delete the resource at the endpoint.
    ///
    pub async fn delete(&self, endpoint: &str) -> Result<(), CatalogError> {
        let response = self.request(Method::DELETE, endpoint).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Prepare a request for the endpoint, attaching the bearer token if set.
    ///
    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("{} {}", method, url);
        let request = self.http_client.request(method, &url);
        match &self.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Turn any non-success status into an API error carrying the body text.
    ///
    async fn check(response: Response) -> Result<Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        log::error!("Request failed with status {}: {}", status, message);
        Err(CatalogError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode the body, treating `204 No Content` and empty bodies as `None`.
    ///
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>, CatalogError> {
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice::<T>(&bytes) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                log::error!(
                    "Failed to deserialize response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&bytes)
                );
                Err(e.into())
            }
        }
    }
}
