#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client for the UK police open data API (<https://data.police.uk/docs/>).
//!
//! A [`Client`] is cheap to clone and safe to share across tasks. All
//! clones share one HTTP connection pool, one client-side rate gate
//! (15 requests per second, bursts of 30 by default) and the most recent
//! upstream error-rate report.
//!
//! Calls go through per-area accessors that return typed records from
//! [`ukpolice_models`]:
//!
//! ```ignore
//! let client = ukpolice::Client::new()?;
//! let crimes = client
//!     .crimes()
//!     .get_street_level_crimes(&[
//!         QueryOption::lat_lng("52.629729", "-1.131592"),
//!         QueryOption::date("2017-01"),
//!     ])
//!     .await?;
//! println!("{} crimes", crimes.data.len());
//! ```
//!
//! Non-2xx responses surface as [`Error::Api`] and update
//! [`Client::rate`]. Nothing is retried.

pub mod availability;
pub mod client;
pub mod crimes;
pub mod forces;
pub mod limiter;
pub mod neighbourhoods;
pub mod options;
pub mod rate;
pub mod request;
pub mod resources;
pub mod response;
pub mod stop_and_search;

#[cfg(test)]
mod test_utils;

pub use client::{Client, ClientBuilder, Clock, Destination, JsonSlot};
pub use limiter::RateGate;
pub use options::{OptionError, OptionKind, Query, QueryOption, build_query};
pub use rate::Rate;
pub use request::RequestSpec;
pub use resources::Resource;
pub use response::{ApiError, Response, ResponseMeta};

pub use reqwest::Method;
pub use ukpolice_models as models;

/// Errors returned by the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured base URL could not be used.
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        source: url::ParseError,
    },

    /// A relative path could not be resolved against the base URL.
    #[error("Invalid request path '{path}': {source}")]
    Path {
        /// The rejected path.
        path: String,
        /// Why it was rejected.
        source: url::ParseError,
    },

    /// The configured `User-Agent` is not a valid header value.
    #[error("Invalid User-Agent: {0}")]
    UserAgent(#[from] reqwest::header::InvalidHeaderValue),

    /// Query options were rejected before sending.
    #[error(transparent)]
    Options(#[from] OptionError),

    /// A resource was given the wrong number of path arguments.
    #[error("{resource} takes {expected} path argument(s), got {actual}")]
    PathArguments {
        /// The endpoint.
        resource: Resource,
        /// Arguments the template takes.
        expected: usize,
        /// Arguments supplied.
        actual: usize,
    },

    /// A path argument was empty.
    #[error("{resource} path argument {index} is empty")]
    EmptyPathArgument {
        /// The endpoint.
        resource: Resource,
        /// Position of the empty argument.
        index: usize,
    },

    /// A path argument was `.` or `..`, which would walk out of the
    /// endpoint's path.
    #[error("{resource} path argument {index} is a dot segment")]
    DotPathArgument {
        /// The endpoint.
        resource: Resource,
        /// Position of the offending argument.
        index: usize,
    },

    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The caller's cancellation token fired.
    #[error("Request cancelled")]
    Cancelled,

    /// The upstream answered with a non-2xx status.
    #[error("API error: {0}")]
    Api(Box<ApiError>),

    /// A 2xx body was not valid JSON for the target type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing a raw body failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

impl Error {
    /// The upstream error, if this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the call was abandoned through a cancellation token.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
