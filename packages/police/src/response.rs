//! Response metadata and upstream errors.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::{
    StatusCode,
    header::{HeaderMap, WARNING},
};
use serde::Deserialize;
use url::Url;

use crate::rate::Rate;

/// Status, headers and final URL of a completed exchange.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// URL the response came from, after redirects.
    pub url: Url,
}

impl ResponseMeta {
    pub(crate) fn from_response(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
        }
    }

    /// The `Warning` header, if the upstream sent one.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        warning_header(&self.headers)
    }
}

/// Returns the `Warning` header value from `headers`, if present and
/// printable.
#[must_use]
pub fn warning_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(WARNING).and_then(|value| value.to_str().ok())
}

/// Decoded payload plus the metadata of the response it came from.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// Decoded body. The type's default when the body was empty.
    pub data: T,
    /// Response metadata.
    pub meta: ResponseMeta,
}

impl<T> Response<T> {
    /// Drops the metadata.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A non-2xx response.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status.
    pub status: StatusCode,
    /// The `error` field of the body, when the body was a JSON object
    /// carrying one.
    pub message: Option<String>,
    /// Error-rate headers of the response.
    pub rate: Rate,
    /// Response metadata.
    pub meta: ResponseMeta,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    pub(crate) fn new(meta: ResponseMeta, body: &[u8], now: DateTime<Utc>) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error);
        let rate = Rate::from_headers(&meta.headers, now);

        Self {
            status: meta.status,
            message,
            rate,
            meta,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "HTTP {}", self.status.as_u16()),
        }
    }
}

impl std::error::Error for ApiError {}
