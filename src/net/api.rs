//! JSON fetch wrapper for the backend REST endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: every call fails with [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are logged once here and then
//! returned, so callers decide whether to toast, retry, or ignore.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    #[cfg(feature = "hydrate")]
    fn to_gloo(self) -> gloo_net::http::Method {
        match self {
            Self::Get => gloo_net::http::Method::GET,
            Self::Post => gloo_net::http::Method::POST,
            Self::Put => gloo_net::http::Method::PUT,
            Self::Patch => gloo_net::http::Method::PATCH,
            Self::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller overrides layered over the JSON defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as the JSON request payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ApiError> {
        Ok(self.body(serde_json::to_string(body)?))
    }
}

/// Request after defaults and overrides are merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ResolvedRequest {
    /// Value of `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Merge caller options over the defaults (`GET`, JSON content type).
///
/// A caller header replaces a default header of the same name.
pub fn resolve_request(options: RequestOptions) -> ResolvedRequest {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_MIME.to_owned())];
    for (name, value) in options.headers {
        match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(existing) => *existing = (name, value),
            None => headers.push((name, value)),
        }
    }
    ResolvedRequest {
        method: options.method.unwrap_or_default(),
        headers,
        body: options.body,
    }
}

/// Issue a request to `endpoint` and decode the JSON response.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx responses, [`ApiError::Network`]
/// when the request cannot be sent, and [`ApiError::Decode`] when the body is
/// not the expected JSON. Every failure is logged before it is returned.
pub async fn api_call<T: DeserializeOwned>(endpoint: &str, options: RequestOptions) -> Result<T, ApiError> {
    let request = resolve_request(options);
    let method = request.method;
    let result = send(endpoint, request).await;
    if let Err(e) = &result {
        leptos::logging::error!("API call failed: {method} {endpoint}: {e}");
    }
    result
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(endpoint: &str, request: ResolvedRequest) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::RequestBuilder::new(endpoint).method(request.method.to_gloo());
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = prepared
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn send<T: DeserializeOwned>(endpoint: &str, request: ResolvedRequest) -> Result<T, ApiError> {
    let _ = (endpoint, request);
    Err(ApiError::Unavailable)
}

/// `GET endpoint` with the JSON defaults.
///
/// # Errors
///
/// See [`api_call`].
pub async fn api_get<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    api_call(endpoint, RequestOptions::new()).await
}

/// `POST endpoint` with `body` serialized as JSON.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if `body` cannot be serialized; otherwise see
/// [`api_call`].
pub async fn api_post_json<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let options = match RequestOptions::new().method(Method::Post).json(body) {
        Ok(options) => options,
        Err(e) => {
            leptos::logging::error!("API call failed: POST {endpoint}: {e}");
            return Err(e);
        }
    };
    api_call(endpoint, options).await
}
