//! OAuth 1.0a consumer and token credentials.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{Secret, UserId},
	error::PayloadError,
};

/// Application credentials issued by the API (the OAuth "consumer").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
	/// Public consumer key.
	pub key: String,
	/// Shared consumer secret; callers must avoid logging it.
	pub secret: Secret,
}
impl Consumer {
	/// Creates consumer credentials from a key/secret pair.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: Secret::new(secret) }
	}
}

/// Request or access token returned by the OAuth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
	/// Public token value (`oauth_token`).
	pub key: String,
	/// Token secret (`oauth_token_secret`); callers must avoid logging it.
	pub secret: Secret,
}
impl OAuthToken {
	/// Creates a token from a key/secret pair.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: Secret::new(secret) }
	}

	/// Parses a form-encoded token response (`oauth_token=..&oauth_token_secret=..`).
	pub fn from_form(body: &[u8]) -> Result<Self, PayloadError> {
		let fields = TokenForm::parse(body);

		Ok(Self::new(fields.require("oauth_token")?, fields.require("oauth_token_secret")?))
	}
}

/// User-scoped credentials produced by a completed authorization handshake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
	/// Identifier of the user who authorized the application.
	pub user_id: UserId,
	/// Access token to sign user-scoped calls with.
	pub token: OAuthToken,
}
impl AccessGrant {
	/// Parses the access-token response, which carries `user_id` next to the token pair.
	pub fn from_form(body: &[u8]) -> Result<Self, PayloadError> {
		let fields = TokenForm::parse(body);
		let user_id = UserId::new(fields.require("user_id")?).map_err(|_| {
			PayloadError::UnexpectedShape {
				entity: ENTITY,
				field: "user_id",
				expected: "a user identifier",
			}
		})?;
		let token =
			OAuthToken::new(fields.require("oauth_token")?, fields.require("oauth_token_secret")?);

		Ok(Self { user_id, token })
	}
}

const ENTITY: &str = "oauth token";

struct TokenForm(BTreeMap<String, String>);
impl TokenForm {
	fn parse(body: &[u8]) -> Self {
		Self(form_urlencoded::parse(body).into_owned().collect())
	}

	fn require(&self, field: &'static str) -> Result<String, PayloadError> {
		self.0
			.get(field)
			.filter(|value| !value.is_empty())
			.cloned()
			.ok_or(PayloadError::MissingField { entity: ENTITY, field })
	}
}
