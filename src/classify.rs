//! API failure taxonomy and the classifier that derives it from non-success responses.
//!
//! The API reports failures twice: once through the HTTP status and once through a nested
//! `{"status": {"status_code", "message"}}` envelope in the body. The nested pair wins when
//! the body decodes; otherwise the transport status and raw body text are used.
//! [`classify`] is pure, so the same `(status, body)` always yields the same [`ApiError`].

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

const ACCESS_TOKEN_VALIDATION_FAILED: &str = "Access Token Validation Failed";
const INVALID_SIGNATURE: &str = "Invalid Signature";
const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid Or Expired Token";
const OVER_QPS_LIMIT: &str = "Service is over queries per second limit";
const OVER_QPD_LIMIT: &str = "Over queries per day limit";
const MISSING_ACCESS_TOKEN: &str = "Missing Required Access Token";
const TITLE_ALREADY_IN_QUEUE: &str = "Title is already in queue";

/// Classified failure returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ApiError {
	/// The requested resource does not exist (404).
	#[error("Resource not found: {message}.")]
	NotFound {
		/// API-supplied message.
		message: String,
	},
	/// Credentials were rejected (401).
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// A user-scoped endpoint was called without an access token (400).
	#[error("Missing required access token: {message}.")]
	MissingAccessToken {
		/// API-supplied message.
		message: String,
	},
	/// The title is already present in the target queue (412).
	#[error("Title is already in the queue: {message}.")]
	TitleAlreadyInQueue {
		/// API-supplied message.
		message: String,
	},
	/// A request quota was exhausted (403).
	#[error(transparent)]
	TooManyRequests(#[from] QuotaError),
	/// The API failed internally (5xx).
	#[error("API failed internally with status {code}: {message}.")]
	InternalServer {
		/// Status code reported by the API.
		code: u16,
		/// API-supplied message.
		message: String,
	},
	/// Any other non-success status.
	#[error("API returned status {code}: {message}.")]
	Other {
		/// Status code reported by the API.
		code: u16,
		/// API-supplied message.
		message: String,
	},
}
impl ApiError {
	/// Status code the classification was derived from.
	pub fn code(&self) -> u16 {
		match self {
			Self::NotFound { .. } => 404,
			Self::Auth(_) => 401,
			Self::MissingAccessToken { .. } => 400,
			Self::TitleAlreadyInQueue { .. } => 412,
			Self::TooManyRequests(_) => 403,
			Self::InternalServer { code, .. } | Self::Other { code, .. } => *code,
		}
	}

	/// API-supplied message text.
	pub fn message(&self) -> &str {
		match self {
			Self::NotFound { message }
			| Self::MissingAccessToken { message }
			| Self::TitleAlreadyInQueue { message }
			| Self::InternalServer { message, .. }
			| Self::Other { message, .. } => message,
			Self::Auth(e) => e.message(),
			Self::TooManyRequests(e) => e.message(),
		}
	}

	/// Returns `true` for the per-second quota, the only failure the dispatcher retries.
	pub fn is_per_second_limit(&self) -> bool {
		matches!(self, Self::TooManyRequests(QuotaError::PerSecond { .. }))
	}
}

/// Authentication failures (401).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum AuthError {
	/// The access token could not be validated.
	#[error("Access token validation failed: {message}.")]
	AccessTokenValidationFailed {
		/// API-supplied message.
		message: String,
	},
	/// The OAuth signature did not verify.
	#[error("Request signature is invalid: {message}.")]
	InvalidSignature {
		/// API-supplied message.
		message: String,
	},
	/// The token is unknown or expired.
	#[error("Token is invalid or expired: {message}.")]
	InvalidOrExpiredToken {
		/// API-supplied message.
		message: String,
	},
}
impl AuthError {
	/// API-supplied message text.
	pub fn message(&self) -> &str {
		match self {
			Self::AccessTokenValidationFailed { message }
			| Self::InvalidSignature { message }
			| Self::InvalidOrExpiredToken { message } => message,
		}
	}
}

/// Quota exhaustion (403).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum QuotaError {
	/// Too many calls within one second; safe to retry shortly.
	#[error("Per-second request quota exceeded: {message}.")]
	PerSecond {
		/// API-supplied message.
		message: String,
	},
	/// Daily quota exhausted.
	#[error("Per-day request quota exceeded: {message}.")]
	PerDay {
		/// API-supplied message.
		message: String,
	},
}
impl QuotaError {
	/// API-supplied message text.
	pub fn message(&self) -> &str {
		match self {
			Self::PerSecond { message } | Self::PerDay { message } => message,
		}
	}
}

/// Classifies a non-success response from its transport status and raw body.
pub fn classify(status: u16, body: &[u8]) -> ApiError {
	let (code, message) = status_envelope(body)
		.unwrap_or_else(|| (status, String::from_utf8_lossy(body).into_owned()));

	classify_status(code, message)
}

fn classify_status(code: u16, message: String) -> ApiError {
	match code {
		401 if message == ACCESS_TOKEN_VALIDATION_FAILED =>
			AuthError::AccessTokenValidationFailed { message }.into(),
		401 if message == INVALID_SIGNATURE => AuthError::InvalidSignature { message }.into(),
		401 if message == INVALID_OR_EXPIRED_TOKEN =>
			AuthError::InvalidOrExpiredToken { message }.into(),
		403 if message.contains(OVER_QPS_LIMIT) => QuotaError::PerSecond { message }.into(),
		403 if message.contains(OVER_QPD_LIMIT) => QuotaError::PerDay { message }.into(),
		404 => ApiError::NotFound { message },
		400 if message == MISSING_ACCESS_TOKEN => ApiError::MissingAccessToken { message },
		412 if message == TITLE_ALREADY_IN_QUEUE => ApiError::TitleAlreadyInQueue { message },
		500.. => ApiError::InternalServer { code, message },
		_ => ApiError::Other { code, message },
	}
}

/// Extracts `(status_code, message)` from the nested status envelope, if present.
fn status_envelope(body: &[u8]) -> Option<(u16, String)> {
	let value = serde_json::from_slice::<Value>(body).ok()?;
	let status = value.get("status")?;
	let code = match status.get("status_code")? {
		Value::Number(n) => u16::try_from(n.as_u64()?).ok()?,
		Value::String(s) => s.trim().parse().ok()?,
		_ => return None,
	};
	let message = match status.get("message")? {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	};

	Some((code, message))
}
