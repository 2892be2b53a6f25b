//! The concurrent URL-liveness checker.
//!
//! [`probe`] decides how one URL is checked and what the outcome is.
//! [`dispatcher`] runs those probes for a whole batch under a concurrency
//! bound.
pub mod dispatcher;
pub mod probe;

use std::fmt;

use chrono::{DateTime, Local};

/// The synthetic code used for client-side timeouts, the same number a
/// server uses for `Request Timeout`.
pub const TIMEOUT_STATUS_CODE: u16 = 408;

/// What a single liveness probe observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusOutcome {
    /// The server answered with this HTTP status code.
    Code(u16),
    /// The probe gave up waiting before the server answered.
    TimedOut,
    /// No status could be obtained at all: DNS failure, refused
    /// connection, malformed URL, broken TLS handshake and the like.
    Unknown,
}

impl StatusOutcome {
    /// The numeric code shown in the output table, if there is one.
    ///
    /// `TimedOut` is rendered as [`TIMEOUT_STATUS_CODE`], so a client-side
    /// timeout and a genuine server `408 Request Timeout` are
    /// indistinguishable in the table.
    #[must_use]
    pub fn as_code(self) -> Option<u16> {
        match self {
            StatusOutcome::Code(code) => Some(code),
            StatusOutcome::TimedOut => Some(TIMEOUT_STATUS_CODE),
            StatusOutcome::Unknown => None,
        }
    }
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_code() {
            Some(code) => write!(f, "{code}"),
            None => write!(f, "unknown"),
        }
    }
}

/// The record kept for one checked URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub outcome: StatusOutcome,
    /// Local wall-clock time at which the outcome was collected.
    pub observed_at: DateTime<Local>,
}

impl CheckResult {
    #[must_use]
    pub fn observed_now(outcome: StatusOutcome) -> Self {
        Self {
            outcome,
            observed_at: Local::now(),
        }
    }
}
