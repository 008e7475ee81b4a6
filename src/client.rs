//! The Netflix API client.
//!
//! [`Netflix`] owns the consumer credentials, the endpoint set, the transport, the request
//! signer, and the call-spacing gate. Clones share the transport, signer, and gate, so a
//! cloned client never doubles the request rate. All per-call state (user tokens, extra
//! parameters) travels in [`ApiRequest`] values.

pub mod request;

mod account;
mod authorize;
mod catalog;
mod dispatch;

pub use account::*;
pub use authorize::*;
pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::Consumer,
	endpoint::{ApiEndpoints, ClientSettings},
	error::ConfigError,
	ext::{CallInterval, RequestSigner},
	http::HttpTransport,
	oauth::HmacSha1Signer,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestNetflix = Netflix<ReqwestTransport>;

/// Signed, rate-limited client for the catalog + account API.
pub struct Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Signer applied to every outbound request.
	pub signer: Arc<dyn RequestSigner>,
	/// Application credentials.
	pub consumer: Consumer,
	/// Endpoint set.
	pub endpoints: ApiEndpoints,
	/// Spacing, retry, and application-name settings.
	pub settings: ClientSettings,
	limiter: Arc<CallInterval>,
}
impl<T> Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(consumer: Consumer, transport: impl Into<Arc<T>>) -> Self {
		let settings = ClientSettings::default();

		Self {
			transport: transport.into(),
			signer: Arc::new(HmacSha1Signer),
			consumer,
			endpoints: ApiEndpoints::netflix(),
			limiter: Arc::new(CallInterval::new(settings.call_interval)),
			settings,
		}
	}

	/// Replaces the endpoint set after validating it.
	pub fn with_endpoints(mut self, endpoints: ApiEndpoints) -> Result<Self> {
		endpoints.validate().map_err(ConfigError::from)?;

		self.endpoints = endpoints;

		Ok(self)
	}

	/// Replaces the settings; the call gate is rebuilt with the new interval.
	pub fn with_settings(mut self, settings: ClientSettings) -> Self {
		self.limiter = Arc::new(CallInterval::new(settings.call_interval));
		self.settings = settings;

		self
	}

	/// Sets the application name sent to the authorization endpoints.
	pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
		self.settings.application_name = Some(name.into());

		self
	}

	/// Replaces the request signer.
	pub fn with_signer<S>(mut self, signer: S) -> Self
	where
		S: 'static + RequestSigner,
	{
		self.signer = Arc::new(signer);

		self
	}

	/// Gate shared by every clone of this client.
	pub fn limiter(&self) -> &CallInterval {
		&self.limiter
	}
}
#[cfg(feature = "reqwest")]
impl Netflix<ReqwestTransport> {
	/// Creates a client backed by a default reqwest transport and the public endpoints.
	pub fn new(consumer: Consumer) -> Self {
		Self::with_transport(consumer, ReqwestTransport::default())
	}
}
impl<T> Clone for Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			signer: self.signer.clone(),
			consumer: self.consumer.clone(),
			endpoints: self.endpoints.clone(),
			settings: self.settings.clone(),
			limiter: self.limiter.clone(),
		}
	}
}
impl<T> Debug for Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Netflix")
			.field("consumer_key", &self.consumer.key)
			.field("endpoints", &self.endpoints)
			.field("settings", &self.settings)
			.finish()
	}
}
