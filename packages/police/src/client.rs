//! The shared client and its request pipeline.
//!
//! Every call follows the same path: wait for admission from the
//! [`RateGate`], send once, classify the status, then either hand the body
//! to the caller's [`Destination`] or turn it into an [`ApiError`].

use std::{
    future::Future,
    io::Write,
    num::NonZeroU32,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use chrono::{DateTime, Utc};
use governor::Quota;
use reqwest::{Method, header::HeaderValue};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    Error,
    limiter::{DEFAULT_BURST, DEFAULT_REQUESTS_PER_SECOND, RateGate},
    options::QueryOption,
    rate::Rate,
    request::{RequestSpec, build_request, parse_base_url},
    resources::Resource,
    response::{ApiError, Response, ResponseMeta},
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://data.police.uk/api/";

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "go-ukpolice";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "UKPOLICE_BASE_URL";

/// Environment variable overriding the `User-Agent`. An empty value
/// disables the header.
pub const ENV_USER_AGENT: &str = "UKPOLICE_USER_AGENT";

/// Source of the current time, used to turn reset offsets into instants.
pub type Clock = fn() -> DateTime<Utc>;

/// Where a successful response body goes.
pub enum Destination<'a> {
    /// Decode the body as JSON into the slot.
    Json(&'a mut (dyn JsonSlot + Send)),
    /// Copy the body verbatim.
    Raw(&'a mut (dyn Write + Send)),
    /// Drop the body.
    Discard,
}

impl<'a> Destination<'a> {
    /// Decode into `slot`.
    pub fn json<T: DeserializeOwned + Send>(slot: &'a mut T) -> Self {
        Self::Json(slot)
    }

    /// Copy into `writer`.
    pub fn raw<W: Write + Send>(writer: &'a mut W) -> Self {
        Self::Raw(writer)
    }
}

/// A value that can be overwritten from a JSON document.
pub trait JsonSlot {
    /// Replaces `self` with the value decoded from `body`.
    ///
    /// # Errors
    ///
    /// Returns the decoder error if `body` is not valid JSON for the slot's
    /// type; `self` is left unchanged.
    fn decode_from(&mut self, body: &[u8]) -> Result<(), serde_json::Error>;
}

impl<T: DeserializeOwned> JsonSlot for T {
    fn decode_from(&mut self, body: &[u8]) -> Result<(), serde_json::Error> {
        *self = serde_json::from_slice(body)?;
        Ok(())
    }
}

/// Configures a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    http: Option<reqwest::Client>,
    quota: Quota,
    clock: Clock,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            http: None,
            quota: Quota::per_second(DEFAULT_REQUESTS_PER_SECOND).allow_burst(DEFAULT_BURST),
            clock: Utc::now,
        }
    }
}

impl ClientBuilder {
    /// Builder with the production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from `UKPOLICE_BASE_URL` and `UKPOLICE_USER_AGENT`,
    /// falling back to the defaults for unset variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            builder.base_url = base_url;
        }
        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
            builder.user_agent = user_agent;
        }
        builder
    }

    /// API root. Normalised to end in `/` when built.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `User-Agent` header value. Empty disables the header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Underlying HTTP client. Timeouts, proxies and TLS settings are taken
    /// from it as is.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Client-side admission rate.
    #[must_use]
    pub fn quota(mut self, per_second: NonZeroU32, burst: NonZeroU32) -> Self {
        self.quota = Quota::per_second(per_second).allow_burst(burst);
        self
    }

    /// Client-side admission rate as a raw governor quota.
    #[must_use]
    pub fn rate_quota(mut self, quota: Quota) -> Self {
        self.quota = quota;
        self
    }

    /// Time source for rate reset computation.
    #[must_use]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    ///
    /// * [`Error::BaseUrl`] if the base URL does not parse or cannot carry
    ///   relative paths
    /// * [`Error::UserAgent`] if the user agent is not a valid header value
    pub fn build(self) -> Result<Client, Error> {
        let base_url = parse_base_url(&self.base_url)?;
        let user_agent = if self.user_agent.is_empty() {
            None
        } else {
            Some(HeaderValue::from_str(&self.user_agent)?)
        };

        Ok(Client {
            inner: Arc::new(Inner {
                http: self.http.unwrap_or_default(),
                base_url,
                user_agent,
                gate: RateGate::with_quota(self.quota),
                rate: Mutex::new(Rate::default()),
                clock: self.clock,
            }),
            cancel: None,
        })
    }
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: Url,
    user_agent: Option<HeaderValue>,
    gate: RateGate,
    rate: Mutex<Rate>,
    clock: Clock,
}

/// Rate-limited API client.
///
/// Clones share all state. A clone obtained from
/// [`with_cancellation`](Self::with_cancellation) additionally aborts its
/// calls when the token fires.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<Inner>,
    cancel: Option<CancellationToken>,
}

impl Client {
    /// Client with the production defaults.
    ///
    /// # Errors
    ///
    /// Never fails with the built-in defaults; see [`ClientBuilder::build`].
    pub fn new() -> Result<Self, Error> {
        ClientBuilder::default().build()
    }

    /// Starts configuring a client.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The normalised API root.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The `User-Agent` sent with each request, if any.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.inner
            .user_agent
            .as_ref()
            .and_then(|value| value.to_str().ok())
    }

    /// The error-rate state from the most recent upstream error, or the
    /// zero value if there has been none.
    #[must_use]
    pub fn rate(&self) -> Rate {
        *self.lock_rate()
    }

    /// A clone whose calls are abandoned with [`Error::Cancelled`] once
    /// `token` fires, whether waiting for admission, sending, or reading
    /// the body.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    /// Builds a request for `relative`, resolved against the base URL, with
    /// `Accept: application/json` and the configured `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`] if `relative` cannot be resolved.
    pub fn new_request(&self, method: Method, relative: &str) -> Result<reqwest::Request, Error> {
        build_request(
            &self.inner.base_url,
            method,
            relative,
            self.inner.user_agent.as_ref(),
        )
    }

    /// Sends `request` once and routes the response.
    ///
    /// An empty or whitespace-only success body leaves `destination`
    /// untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::Cancelled`] if the client's token fires first
    /// * [`Error::Http`] on transport failure
    /// * [`Error::Api`] for non-2xx statuses; [`Self::rate`] is updated
    /// * [`Error::Decode`] if a JSON destination cannot be filled
    /// * [`Error::Io`] if a raw destination fails to write
    pub async fn execute(
        &self,
        request: reqwest::Request,
        destination: Destination<'_>,
    ) -> Result<ResponseMeta, Error> {
        self.inner.gate.admit(self.cancel.as_ref()).await?;

        log::debug!("{} {}", request.method(), request.url());

        let mut response = self
            .cancellable(self.inner.http.execute(request))
            .await??;
        let meta = ResponseMeta::from_response(&response);

        if let Some(warning) = meta.warning() {
            log::warn!("Warning header from {}: {warning}", meta.url);
        }

        if !meta.status.is_success() {
            let body = self.cancellable(response.bytes()).await??;
            let now = (self.inner.clock)();
            let err = ApiError::new(meta, &body, now);
            log::warn!(
                "{} returned {}: {err} ({})",
                err.meta.url,
                err.status,
                err.rate.describe(now)
            );
            *self.lock_rate() = err.rate;
            return Err(err.into());
        }

        match destination {
            Destination::Json(slot) => {
                let body = self.cancellable(response.bytes()).await??;
                if body.iter().all(u8::is_ascii_whitespace) {
                    log::debug!("Empty body from {}", meta.url);
                } else {
                    slot.decode_from(&body)?;
                }
            }
            Destination::Raw(writer) => {
                while let Some(chunk) = self.cancellable(response.chunk()).await?? {
                    writer.write_all(&chunk)?;
                }
                writer.flush()?;
            }
            Destination::Discard => {}
        }

        Ok(meta)
    }

    /// GETs `spec` and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`]; additionally [`Error::Path`] if the path does
    /// not resolve.
    pub async fn get<T>(&self, spec: &RequestSpec) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned + Default + Send,
    {
        let request = self.new_request(Method::GET, &spec.relative_url())?;
        let mut data = T::default();
        let meta = self.execute(request, Destination::json(&mut data)).await?;
        Ok(Response { data, meta })
    }

    /// Calls `resource` with path `args` and query `options`.
    ///
    /// # Errors
    ///
    /// See [`Resource::request`] and [`Self::execute`].
    pub async fn fetch<T>(
        &self,
        resource: Resource,
        args: &[&str],
        options: &[QueryOption],
    ) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned + Default + Send,
    {
        let spec = resource.request(args, options)?;
        self.get(&spec).await
    }

    async fn cancellable<F: Future>(&self, fut: F) -> Result<F::Output, Error> {
        match &self.cancel {
            None => Ok(fut.await),
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                out = fut => Ok(out),
            },
        }
    }

    fn lock_rate(&self) -> MutexGuard<'_, Rate> {
        self.inner
            .rate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
