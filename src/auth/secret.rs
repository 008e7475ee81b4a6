//! Redacted holder for consumer and token secrets.

// self
use crate::{_prelude::*, oauth};

/// Shared secret that never prints its value.
///
/// Secrets only leave this type through [`expose`](Self::expose) or as an encoded half of
/// the HMAC signing key.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);
impl Secret {
	/// Wraps a secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw secret. Callers must avoid logging it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no secret is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Percent-encoded form used as one half of the `consumer&token` signing key.
	pub(crate) fn signing_part(&self) -> String {
		oauth::encode(&self.0)
	}
}
impl From<String> for Secret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for Secret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(if self.is_empty() { "Secret(<empty>)" } else { "Secret(<redacted>)" })
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
