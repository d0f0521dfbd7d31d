//! Request descriptions and construction.

use reqwest::{
    Method,
    header::{ACCEPT, HeaderValue, USER_AGENT},
};
use url::Url;

use crate::{
    Error,
    options::{OptionError, Query, QueryOption, join_query},
};

/// A relative path plus its encoded query string.
///
/// Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    path: String,
    query: String,
}

impl RequestSpec {
    /// Applies `options` and captures the result.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::ConflictingLocation`] if two different
    /// location selectors are present.
    pub fn new(path: impl Into<String>, options: &[QueryOption]) -> Result<Self, OptionError> {
        let query = Query::from_options(options)?;
        Ok(Self::from_query(path, &query))
    }

    /// Captures an already accumulated query.
    #[must_use]
    pub fn from_query(path: impl Into<String>, query: &Query) -> Self {
        Self {
            path: path.into(),
            query: query.encode(),
        }
    }

    /// Relative path, without the query.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Encoded query string, empty when there are no parameters.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Path and query joined, ready to resolve against a base URL.
    #[must_use]
    pub fn relative_url(&self) -> String {
        join_query(&self.path, &self.query)
    }
}

/// Parses `raw` as a base URL, making sure its path ends in `/` so that
/// relative joins keep the prefix.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|source| Error::BaseUrl {
        url: raw.to_owned(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(Error::BaseUrl {
            url: raw.to_owned(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

pub(crate) fn build_request(
    base: &Url,
    method: Method,
    relative: &str,
    user_agent: Option<&HeaderValue>,
) -> Result<reqwest::Request, Error> {
    let url = base.join(relative).map_err(|source| Error::Path {
        path: relative.to_owned(),
        source,
    })?;

    let mut request = reqwest::Request::new(method, url);
    let headers = request.headers_mut();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(user_agent) = user_agent {
        headers.insert(USER_AGENT, user_agent.clone());
    }

    Ok(request)
}
