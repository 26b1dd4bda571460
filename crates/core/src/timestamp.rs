//! Microsecond-precision timestamp type
//!
//! Every entity carries two of these: `created_at`, fixed at construction,
//! and `updated_at`, bumped on every save.
//!
//! ## Precision
//!
//! Timestamps are stored as microseconds since Unix epoch (1970-01-01 00:00:00 UTC)
//! and rendered as ISO-8601 text with exactly six fractional digits:
//!
//! ```
//! use roost_core::Timestamp;
//!
//! let ts = Timestamp::from_micros(1_500_000_000_123_456);
//! assert_eq!(ts.to_iso(), "2017-07-14T02:40:00.123456");
//! assert_eq!(Timestamp::parse_iso("2017-07-14T02:40:00.123456"), Some(ts));
//! ```

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// `strftime` pattern of the persisted text form.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Microsecond-precision UTC instant
///
/// ## Invariants
///
/// - Timestamps are always non-negative (u64)
/// - Timestamps are always in microseconds
/// - `parse_iso(ts.to_iso()) == Some(ts)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create a timestamp for the current moment
    ///
    /// Returns epoch if the system clock is before Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(duration.as_micros() as u64)
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Get microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.ffffff` (UTC, no offset suffix).
    pub fn to_iso(&self) -> String {
        let secs = (self.0 / 1_000_000) as i64;
        let nanos = ((self.0 % 1_000_000) * 1_000) as u32;
        match DateTime::from_timestamp(secs, nanos) {
            Some(dt) => dt.format(ISO_FORMAT).to_string(),
            // Out of chrono's range; u64 micros cannot get there before year 262143
            None => String::new(),
        }
    }

    /// Parse text produced by [`Timestamp::to_iso`].
    ///
    /// Returns `None` for anything that does not match [`ISO_FORMAT`] or
    /// that lies before the epoch.
    pub fn parse_iso(text: &str) -> Option<Self> {
        let naive = NaiveDateTime::parse_from_str(text.trim(), ISO_FORMAT).ok()?;
        let micros = naive.and_utc().timestamp_micros();
        u64::try_from(micros).ok().map(Timestamp)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}

// ============================================================================
// Tests
// ============================================================================
