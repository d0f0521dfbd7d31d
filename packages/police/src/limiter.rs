//! Client-side admission control.
//!
//! Every outbound request waits on a single token bucket shared by all
//! clones of a [`Client`](crate::Client). The defaults follow the limits
//! data.police.uk publishes: 15 requests per second sustained with bursts
//! of up to 30.

use std::num::NonZeroU32;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use tokio_util::sync::CancellationToken;

use crate::Error;

/// Sustained requests per second.
pub const DEFAULT_REQUESTS_PER_SECOND: NonZeroU32 = NonZeroU32::new(15).unwrap();

/// Maximum burst size.
pub const DEFAULT_BURST: NonZeroU32 = NonZeroU32::new(30).unwrap();

/// A token bucket gate shared by concurrent callers.
#[derive(Debug)]
pub struct RateGate {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    quota: Quota,
}

impl RateGate {
    /// A gate refilling `per_second` tokens every second and holding at
    /// most `burst`.
    #[must_use]
    pub fn new(per_second: NonZeroU32, burst: NonZeroU32) -> Self {
        Self::with_quota(Quota::per_second(per_second).allow_burst(burst))
    }

    /// A gate with an arbitrary governor quota.
    #[must_use]
    pub fn with_quota(quota: Quota) -> Self {
        Self {
            limiter: RateLimiter::direct(quota),
            quota,
        }
    }

    /// The configured quota.
    #[must_use]
    pub const fn quota(&self) -> Quota {
        self.quota
    }

    /// Waits for a token.
    ///
    /// A wait that is abandoned (cancelled or dropped) consumes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if `cancel` fires first, including when
    /// it was already cancelled on entry.
    pub async fn admit(&self, cancel: Option<&CancellationToken>) -> Result<(), Error> {
        match cancel {
            None => {
                self.limiter.until_ready().await;
                Ok(())
            }
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(Error::Cancelled),
                    () = self.limiter.until_ready() => Ok(()),
                }
            }
        }
    }

    /// Takes a token if one is available right now.
    #[must_use]
    pub fn try_admit(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_PER_SECOND, DEFAULT_BURST)
    }
}
