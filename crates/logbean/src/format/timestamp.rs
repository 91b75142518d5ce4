//! Timestamp providers
//!
//! A [`Timestamp`] is called once per emitted record, at emission time.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::Value;

type Provider = dyn Fn() -> Value + Send + Sync;

/// Zero-argument producer of the `ts` field
#[derive(Clone)]
pub struct Timestamp(Arc<Provider>);

impl Timestamp {
    /// RFC 3339 wall-clock time in UTC, with sub-second precision
    #[must_use]
    pub fn utc() -> Self {
        Self::from_fn(rfc3339_now)
    }

    /// Milliseconds since the Unix epoch, as a number
    #[must_use]
    pub fn unix_millis() -> Self {
        Self::from_fn(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        })
    }

    /// The same value for every record
    #[must_use]
    pub fn fixed(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::from_fn(move || value.clone())
    }

    /// Custom provider
    #[must_use]
    pub fn from_fn<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self(Arc::new(move || f().into()))
    }

    /// Produce the current value
    #[inline]
    #[must_use]
    pub fn now(&self) -> Value {
        (self.0)()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Timestamp").finish_non_exhaustive()
    }
}

fn rfc3339_now() -> Value {
    let now = OffsetDateTime::now_utc();
    match now.format(&Rfc3339) {
        Ok(formatted) => Value::String(formatted),
        // Only reachable for years outside 0..=9999.
        Err(_) => Value::from(now.unix_timestamp()),
    }
}
