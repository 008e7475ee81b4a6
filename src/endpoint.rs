//! API endpoint set and client tuning knobs.
//!
//! [`ApiEndpoints`] holds the validated base URL that relative request targets are joined
//! to, plus the three OAuth endpoints of the delegated-authorization handshake.
//! [`ClientSettings`] carries call spacing, the per-second retry delay, and the optional
//! application name the authorization endpoints expect.

/// Builder API for assembling endpoint sets.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

const NETFLIX_API_BASE: &str = "http://api.netflix.com";
const NETFLIX_REQUEST_TOKEN: &str = "http://api.netflix.com/oauth/request_token";
const NETFLIX_ACCESS_TOKEN: &str = "http://api.netflix.com/oauth/access_token";
const NETFLIX_AUTHORIZATION: &str = "https://api-user.netflix.com/oauth/login";

/// Immutable endpoint set consumed by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
	/// Scheme + host (and optional path prefix) that relative targets are appended to.
	pub api_base: Url,
	/// Endpoint issuing unauthorized request tokens.
	pub request_token: Url,
	/// Endpoint exchanging an authorized request token for an access token.
	pub access_token: Url,
	/// Page users visit to authorize the application.
	pub authorization: Url,
}
impl ApiEndpoints {
	/// Creates a new builder seeded with the public Netflix endpoints.
	pub fn builder() -> ApiEndpointsBuilder {
		ApiEndpointsBuilder::new()
	}

	/// Public Netflix endpoints.
	pub fn netflix() -> Self {
		Self {
			api_base: default_url(NETFLIX_API_BASE),
			request_token: default_url(NETFLIX_REQUEST_TOKEN),
			access_token: default_url(NETFLIX_ACCESS_TOKEN),
			authorization: default_url(NETFLIX_AUTHORIZATION),
		}
	}

	/// Resolves a request target: absolute URLs pass through, anything else is treated as a
	/// path relative to [`api_base`](Self::api_base).
	pub fn resolve(&self, target: &str) -> Result<Url> {
		let raw = if is_absolute(target) {
			target.to_owned()
		} else {
			let base = self.api_base.as_str().trim_end_matches('/');

			if target.starts_with('/') {
				format!("{base}{target}")
			} else {
				format!("{base}/{target}")
			}
		};

		Url::parse(&raw).map_err(|source| {
			crate::error::ConfigError::InvalidTarget { target: target.to_owned(), source }.into()
		})
	}
}
impl Default for ApiEndpoints {
	fn default() -> Self {
		Self::netflix()
	}
}

/// Client tuning knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
	/// Minimum spacing between the starts of successive calls.
	pub call_interval: Duration,
	/// Pause before the single retry that follows a per-second quota failure.
	pub retry_delay: Duration,
	/// Application name sent to the authorization endpoints.
	pub application_name: Option<String>,
}
impl ClientSettings {
	const DEFAULT_RETRY_DELAY: Duration = Duration::seconds(1);

	/// Overrides the call spacing (negative values clamp to zero).
	pub fn with_call_interval(mut self, interval: Duration) -> Self {
		self.call_interval = clamp(interval);

		self
	}

	/// Overrides the retry delay (negative values clamp to zero).
	pub fn with_retry_delay(mut self, delay: Duration) -> Self {
		self.retry_delay = clamp(delay);

		self
	}

	/// Sets the application name.
	pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
		self.application_name = Some(name.into());

		self
	}
}
impl Default for ClientSettings {
	fn default() -> Self {
		Self {
			call_interval: crate::ext::CallInterval::DEFAULT_INTERVAL,
			retry_delay: Self::DEFAULT_RETRY_DELAY,
			application_name: None,
		}
	}
}

fn is_absolute(target: &str) -> bool {
	target.starts_with("http://") || target.starts_with("https://")
}

fn clamp(duration: Duration) -> Duration {
	if duration.is_negative() { Duration::ZERO } else { duration }
}

fn default_url(raw: &'static str) -> Url {
	// The constants above are fixed, well-formed URLs.
	Url::parse(raw).unwrap_or_else(|e| unreachable!("built-in endpoint `{raw}` is invalid: {e}"))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn relative_targets_join_the_api_base() {
		let endpoints = ApiEndpoints::netflix();
		let url = endpoints.resolve("/catalog/titles?term=matrix").expect("Target should resolve.");

		assert_eq!(url.as_str(), "http://api.netflix.com/catalog/titles?term=matrix");

		let url = endpoints.resolve("users/T1").expect("Target should resolve.");

		assert_eq!(url.as_str(), "http://api.netflix.com/users/T1");
	}

	#[test]
	fn absolute_targets_pass_through() {
		let endpoints = ApiEndpoints::netflix();
		let url = endpoints
			.resolve("https://other.example.com/catalog/titles/movies/1")
			.expect("Absolute target should resolve.");

		assert_eq!(url.as_str(), "https://other.example.com/catalog/titles/movies/1");
	}

	#[test]
	fn settings_clamp_negative_durations() {
		let settings = ClientSettings::default()
			.with_call_interval(Duration::seconds(-3))
			.with_retry_delay(Duration::milliseconds(-1));

		assert_eq!(settings.call_interval, Duration::ZERO);
		assert_eq!(settings.retry_delay, Duration::ZERO);
		assert_eq!(ClientSettings::default().retry_delay, Duration::seconds(1));
	}
}
