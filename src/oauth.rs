//! OAuth 1.0a request descriptors and the default HMAC-SHA1 signer.
//!
//! An [`OAuthRequest`] collects the consumer/token identity, the target URL, and every
//! parameter that takes part in the signature. Query parameters already present on the URL
//! are folded into the parameter list and stripped from the base URL, so the signature
//! base string always covers them. [`OAuthRequest::sign`] produces a [`SignedRequest`]
//! that renders either as a fully-qualified signed URL or as an `Authorization` header.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::{Consumer, OAuthToken},
	error::ConfigError,
	ext::RequestSigner,
};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay literal; everything else is percent-encoded.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
const NONCE_LEN: usize = 32;
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Default [`RequestSigner`] implementing OAuth 1.0a `HMAC-SHA1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1Signer;
impl RequestSigner for HmacSha1Signer {
	fn sign(
		&self,
		consumer: &Consumer,
		token: Option<&OAuthToken>,
		url: &Url,
		params: &BTreeMap<String, String>,
	) -> Result<SignedRequest> {
		OAuthRequest::new(consumer, token, url, params.iter()).sign(consumer, token)
	}
}

/// Unsigned OAuth request descriptor.
#[derive(Clone, Debug)]
pub struct OAuthRequest {
	http_method: &'static str,
	base_url: Url,
	params: Vec<(String, String)>,
}
impl OAuthRequest {
	/// Builds a descriptor from consumer credentials, an optional token, a URL, and extra
	/// parameters. A fresh nonce and the current timestamp are attached.
	pub fn new<I, K, V>(
		consumer: &Consumer,
		token: Option<&OAuthToken>,
		url: &Url,
		params: I,
	) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut base_url = url.clone();
		let mut collected = url.query_pairs().into_owned().collect::<Vec<_>>();

		base_url.set_query(None);
		base_url.set_fragment(None);
		collected.extend(
			params.into_iter().map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned())),
		);
		collected.push(("oauth_consumer_key".into(), consumer.key.clone()));
		collected.push(("oauth_signature_method".into(), SIGNATURE_METHOD.into()));
		collected.push(("oauth_version".into(), OAUTH_VERSION.into()));

		if let Some(token) = token {
			collected.push(("oauth_token".into(), token.key.clone()));
		}

		Self { http_method: "GET", base_url, params: collected }
			.with_nonce(random_nonce())
			.with_timestamp(OffsetDateTime::now_utc().unix_timestamp())
	}

	/// Overrides the nonce (tests and replay-sensitive callers).
	pub fn with_nonce(self, nonce: impl Into<String>) -> Self {
		self.with_param("oauth_nonce", nonce.into())
	}

	/// Overrides the timestamp, in seconds since the Unix epoch.
	pub fn with_timestamp(self, timestamp: i64) -> Self {
		self.with_param("oauth_timestamp", timestamp.to_string())
	}

	/// Returns the value of a signed parameter.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Builds the signature base string (`METHOD&url&params`).
	pub fn signature_base_string(&self) -> String {
		format!(
			"{}&{}&{}",
			self.http_method,
			encode(&normalized_url(&self.base_url)),
			encode(&self.normalized_params())
		)
	}

	/// Signs the descriptor with `HMAC-SHA1` keyed by the consumer and token secrets.
	pub fn sign(self, consumer: &Consumer, token: Option<&OAuthToken>) -> Result<SignedRequest> {
		let key = format!(
			"{}&{}",
			consumer.secret.signing_part(),
			token.map(|t| t.secret.signing_part()).unwrap_or_default()
		);
		let mut mac =
			HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| ConfigError::SigningKey)?;

		mac.update(self.signature_base_string().as_bytes());

		let signature = STANDARD.encode(mac.finalize().into_bytes());
		let Self { base_url, mut params, .. } = self;

		params.push(("oauth_signature".into(), signature));

		Ok(SignedRequest { base_url, params })
	}

	fn with_param(mut self, key: &str, value: String) -> Self {
		self.params.retain(|(k, _)| k != key);
		self.params.push((key.to_owned(), value));

		self
	}

	fn normalized_params(&self) -> String {
		let mut encoded =
			self.params.iter().map(|(k, v)| (encode(k), encode(v))).collect::<Vec<_>>();

		encoded.sort();

		join_pairs(&encoded)
	}
}

/// Signed request ready to be rendered for the transport.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	base_url: Url,
	params: Vec<(String, String)>,
}
impl SignedRequest {
	/// Returns the computed `oauth_signature`.
	pub fn signature(&self) -> &str {
		self.param("oauth_signature").unwrap_or_default()
	}

	/// Returns the value of a signed parameter.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Renders every parameter (including the signature) into the query string.
	pub fn to_url(&self) -> Result<Url> {
		let encoded =
			self.params.iter().map(|(k, v)| (encode(k), encode(v))).collect::<Vec<_>>();
		let raw = format!("{}?{}", self.base_url, join_pairs(&encoded));

		Url::parse(&raw)
			.map_err(|source| ConfigError::InvalidTarget { target: raw, source }.into())
	}

	/// Renders the `oauth_*` parameters as an `Authorization` header value.
	pub fn authorization_header(&self) -> String {
		let fields = self
			.params
			.iter()
			.filter(|(k, _)| k.starts_with("oauth_"))
			.map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
			.collect::<Vec<_>>();

		format!("OAuth realm=\"\", {}", fields.join(", "))
	}

	/// Base URL (without query) the request was signed for.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}
}

/// Percent-encodes a value per RFC 3986 as OAuth 1.0a requires.
pub fn encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

fn join_pairs(pairs: &[(String, String)]) -> String {
	pairs.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&")
}

fn normalized_url(url: &Url) -> String {
	let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

	match url.port() {
		Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
		None => format!("{}://{host}{}", url.scheme(), url.path()),
	}
}

fn random_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}
