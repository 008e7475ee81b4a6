// std
use std::time::Duration as StdDuration;
// self
use crate::obs::{CallKind, CallOutcome};

/// Counter bumped once per call stage, labeled by `call` and `outcome`.
pub const CALL_TOTAL: &str = "netflix_call_total";
/// Histogram of the pause taken before the per-second retry, in seconds.
pub const RETRY_DELAY_SECONDS: &str = "netflix_retry_delay_seconds";

/// Counts one stage of a call (no-op unless the `metrics` feature is on).
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(CALL_TOTAL, "call" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Counts a per-second retry and records how long the client backed off before it.
pub fn record_retry(kind: CallKind, delay: StdDuration) {
	record_call_outcome(kind, CallOutcome::Retry);

	#[cfg(feature = "metrics")]
	metrics::histogram!(RETRY_DELAY_SECONDS, "call" => kind.as_str()).record(delay.as_secs_f64());
	#[cfg(not(feature = "metrics"))]
	let _ = delay;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_a_recorder_is_harmless() {
		for kind in [CallKind::Api, CallKind::Download, CallKind::RequestToken] {
			record_call_outcome(kind, CallOutcome::Attempt);
			record_retry(kind, StdDuration::from_millis(1_000));
		}
	}
}
