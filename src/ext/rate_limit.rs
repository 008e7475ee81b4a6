//! Minimum-interval gate that spaces dispatched calls.
//!
//! Every call acquires an exclusive gate. When the call ends, including when its future is
//! dropped, the gate stays held and is released by a background timer no sooner than the
//! configured interval after the call *started*. Callers arriving meanwhile wait, so dispatch
//! is serialized and successive call starts are at least one interval apart. A call that
//! never finishes keeps the gate closed for everyone.

// std
use std::{
	thread,
	time::{Duration as StdDuration, Instant},
};
// crates.io
use async_lock::MutexGuardArc;
// self
use crate::{_prelude::*, obs};

/// Shared gate enforcing a minimum spacing between call starts.
#[derive(Debug)]
pub struct CallInterval {
	interval: StdDuration,
	gate: Arc<AsyncMutex<()>>,
}
impl CallInterval {
	/// Spacing used when none is configured (four calls per second).
	pub const DEFAULT_INTERVAL: Duration = Duration::milliseconds(250);

	/// Creates a gate with the provided interval; negative intervals clamp to zero.
	pub fn new(interval: Duration) -> Self {
		Self {
			interval: StdDuration::try_from(interval).unwrap_or(StdDuration::ZERO),
			gate: Arc::new(AsyncMutex::new(())),
		}
	}

	/// Configured spacing between call starts.
	pub fn interval(&self) -> StdDuration {
		self.interval
	}

	/// Runs `operation` once the gate opens, then schedules the gate's release.
	///
	/// The release is scheduled even when the returned future is dropped mid-call.
	pub async fn run<F>(&self, operation: F) -> F::Output
	where
		F: Future,
	{
		let _held = HeldGate {
			guard: Some(self.gate.lock_arc().await),
			deadline: Instant::now() + self.interval,
		};

		operation.await
	}
}
impl Default for CallInterval {
	fn default() -> Self {
		Self::new(Self::DEFAULT_INTERVAL)
	}
}

struct HeldGate {
	guard: Option<MutexGuardArc<()>>,
	deadline: Instant,
}
impl Drop for HeldGate {
	fn drop(&mut self) {
		if let Some(guard) = self.guard.take() {
			release_at(guard, self.deadline);
		}
	}
}

fn release_at(guard: MutexGuardArc<()>, deadline: Instant) {
	let remaining = deadline.saturating_duration_since(Instant::now());

	if remaining.is_zero() {
		return;
	}

	// On spawn failure the closure, and with it the guard, is dropped right away.
	if let Err(e) = thread::Builder::new().name("netflix-call-gate".into()).spawn(move || {
		thread::sleep(remaining);

		drop(guard);
	}) {
		obs::log_gate_release_failure(&e);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
	async fn concurrent_calls_are_spaced_by_interval() {
		const CALLS: u32 = 4;

		let limiter = Arc::new(CallInterval::new(Duration::milliseconds(250)));
		let mut handles = Vec::new();

		for _ in 0..CALLS {
			let limiter = limiter.clone();

			handles.push(tokio::spawn(async move { limiter.run(async { Instant::now() }).await }));
		}

		let mut starts = Vec::new();

		for handle in handles {
			starts.push(handle.await.expect("Rate-limited task should not panic."));
		}

		starts.sort();

		let span = starts[starts.len() - 1] - starts[0];

		assert!(
			span >= StdDuration::from_millis(250) * (CALLS - 1),
			"Call starts spanned only {span:?}."
		);
	}

	#[tokio::test]
	async fn slow_calls_do_not_add_extra_delay() {
		let limiter = CallInterval::new(Duration::milliseconds(20));
		let first = limiter
			.run(async {
				tokio::time::sleep(StdDuration::from_millis(60)).await;

				Instant::now()
			})
			.await;
		let second = limiter.run(async { Instant::now() }).await;

		assert!(second >= first);
		assert!(second - first < StdDuration::from_secs(1));
	}

	#[tokio::test]
	async fn failures_still_hold_the_gate() {
		let limiter = CallInterval::new(Duration::milliseconds(100));
		let started = Instant::now();
		let failed: Result<(), &str> = limiter.run(async { Err("boom") }).await;

		assert!(failed.is_err());

		limiter.run(async {}).await;

		assert!(started.elapsed() >= StdDuration::from_millis(100));
	}

	#[tokio::test]
	async fn cancelled_calls_still_hold_the_gate() {
		let limiter = CallInterval::new(Duration::milliseconds(300));
		let started = Instant::now();
		let cancelled = tokio::time::timeout(
			StdDuration::from_millis(20),
			limiter.run(tokio::time::sleep(StdDuration::from_secs(5))),
		)
		.await;

		assert!(cancelled.is_err(), "The slow call should have been cancelled.");

		let next = limiter.run(async { Instant::now() }).await;

		assert!(
			next - started >= StdDuration::from_millis(300),
			"Next call started after only {:?}.",
			next - started
		);
	}

	#[test]
	fn negative_interval_clamps_to_zero() {
		assert_eq!(CallInterval::new(Duration::seconds(-1)).interval(), StdDuration::ZERO);
		assert_eq!(CallInterval::default().interval(), StdDuration::from_millis(250));
	}
}
