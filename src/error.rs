//! Client-level error types shared by the dispatcher, the normalizer, and the auth flow.

// self
use crate::{_prelude::*, classify::ApiError, endpoint::EndpointError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The API answered with a non-success status; see [`ApiError`] for the taxonomy.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// A payload decoded but does not match the shape a domain object requires.
	#[error(transparent)]
	Payload(#[from] PayloadError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, file I/O).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// A success response carried a body that is not valid JSON.
	#[error("API returned malformed JSON.")]
	Decode {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl Error {
	/// Returns the classified API error, when this failure came from the API itself.
	pub fn as_api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}
}

/// Malformed domain payloads; these signal an API contract violation and are never retried.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum PayloadError {
	/// A required field is absent.
	#[error("The {entity} payload is missing the `{field}` field.")]
	MissingField {
		/// Entity being constructed.
		entity: &'static str,
		/// Missing field name.
		field: &'static str,
	},
	/// A field (or the whole payload) has the wrong JSON shape.
	#[error("The {entity} payload has an unexpected shape at `{field}`; expected {expected}.")]
	UnexpectedShape {
		/// Entity being constructed.
		entity: &'static str,
		/// Offending field name (or `<root>`).
		field: &'static str,
		/// Human-readable description of the expected shape.
		expected: &'static str,
	},
	/// A pagination field could not be coerced into an integer.
	#[error("The {entity} payload field `{field}` is not an integer.")]
	NotAnInteger {
		/// Entity being constructed.
		entity: &'static str,
		/// Offending field name.
		field: &'static str,
	},
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint configuration is invalid.
	#[error(transparent)]
	Endpoints(#[from] EndpointError),
	/// A request target cannot be turned into an absolute URL.
	#[error("Request target `{target}` is not a valid URL.")]
	InvalidTarget {
		/// Target as supplied by the caller.
		target: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A domain object used as a request target does not expose an identifier.
	#[error("The {entity} has no identifier to request.")]
	MissingTarget {
		/// Entity that was used as a target.
		entity: &'static str,
	},
	/// A title has no link with the requested name.
	#[error("The title has no `{name}` link.")]
	MissingLink {
		/// Requested link title.
		name: String,
	},
	/// The signing key was rejected by the MAC implementation.
	#[error("Signing key is invalid.")]
	SigningKey,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport (including download writes).
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
