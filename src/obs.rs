//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `netflix.call` with the `call` (kind) and
//!   `stage` (call site) fields, plus warnings for retries and gate hiccups.
//! - Enable `metrics` to increment the `netflix_call_total` counter for every
//!   attempt/success/failure/retry, labeled by `call` + `outcome`, and to record the
//!   per-second retry back-off in `netflix_retry_delay_seconds`.
//!
//! The crate never installs a subscriber or recorder; applications initialize their own
//! before the first call.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Kinds of outbound calls observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Signed API request whose body is normalized.
	Api,
	/// Signed API request streamed to a file.
	Download,
	/// OAuth request-token fetch.
	RequestToken,
	/// OAuth access-token exchange.
	AccessToken,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Api => "api",
			CallKind::Download => "download",
			CallKind::RequestToken => "request_token",
			CallKind::AccessToken => "access_token",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
	/// Failure absorbed by the single per-second retry.
	Retry,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
			CallOutcome::Retry => "retry",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
