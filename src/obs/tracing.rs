// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, classify::ApiError, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("netflix.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs the status of a completed call.
pub fn log_response(kind: CallKind, url: &Url, status: u16) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(call = kind.as_str(), url = %redacted_url(url), status, "call completed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, url, status);
	}
}

/// Logs the single per-second retry before the dispatcher sleeps.
pub fn log_retry(kind: CallKind, delay: StdDuration, error: &ApiError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(call = kind.as_str(), ?delay, %error, "retrying after per-second quota");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, delay, error);
	}
}

/// Logs a failure to schedule the delayed gate release.
pub fn log_gate_release_failure(error: &std::io::Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(%error, "call gate released early; timer thread could not be spawned");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}

/// Strips the query string (it carries the signature and token) before logging a URL.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn redacted_url(url: &Url) -> String {
	let mut clean = url.clone();

	clean.set_query(None);

	clean.to_string()
}
