//! Request descriptors accepted by [`Netflix::dispatch`](crate::client::Netflix::dispatch).

// self
use crate::{
	_prelude::*,
	auth::OAuthToken,
	error::ConfigError,
	model::{CatalogTitle, Link},
};

/// HTTP verb requested from the API. Every call travels as a signed GET; the verb is sent
/// in the `method` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Verb {
	/// Read.
	#[default]
	Get,
	/// Create (queue additions).
	Post,
	/// Update.
	Put,
	/// Remove.
	Delete,
}
impl Verb {
	/// Upper-case verb sent in the `method` parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			Verb::Get => "GET",
			Verb::Post => "POST",
			Verb::Put => "PUT",
			Verb::Delete => "DELETE",
		}
	}
}
impl Display for Verb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Absolute URL or path relative to the API base.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target(pub String);
impl Target {
	/// Borrows the raw target.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl From<&str> for Target {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl From<String> for Target {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&Url> for Target {
	fn from(value: &Url) -> Self {
		Self(value.to_string())
	}
}
impl From<Url> for Target {
	fn from(value: Url) -> Self {
		Self(value.into())
	}
}
impl From<&Link> for Target {
	fn from(value: &Link) -> Self {
		Self(value.href.clone())
	}
}
impl TryFrom<&CatalogTitle> for Target {
	type Error = ConfigError;

	fn try_from(value: &CatalogTitle) -> Result<Self, Self::Error> {
		value
			.id()
			.or_else(|| value.netflix_id())
			.map(Self::from)
			.ok_or(ConfigError::MissingTarget { entity: "catalog title" })
	}
}

/// One API call: where, as whom, how, and with which extra parameters.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// Resource to call.
	pub target: Target,
	/// User access token; `None` signs with the consumer only.
	pub token: Option<OAuthToken>,
	/// Verb tunnelled through the `method` parameter.
	pub verb: Verb,
	/// Extra query parameters (`term`, `title_ref`, `etag`, `output`, ...).
	pub params: BTreeMap<String, String>,
	/// When set, the body is written to this file instead of being normalized.
	pub output_file: Option<PathBuf>,
}
impl ApiRequest {
	/// Creates a GET request for `target`.
	pub fn new(target: impl Into<Target>) -> Self {
		Self {
			target: target.into(),
			token: None,
			verb: Verb::default(),
			params: BTreeMap::new(),
			output_file: None,
		}
	}

	/// Creates a request for a title's own resource.
	pub fn for_title(title: &CatalogTitle) -> Result<Self> {
		Ok(Self::new(Target::try_from(title)?))
	}

	/// Signs with a user access token.
	pub fn token(mut self, token: Option<&OAuthToken>) -> Self {
		self.token = token.cloned();

		self
	}

	/// Overrides the verb.
	pub fn verb(mut self, verb: Verb) -> Self {
		self.verb = verb;

		self
	}

	/// Adds or replaces a query parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());

		self
	}

	/// Streams the response into `path` instead of normalizing it.
	pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
		self.output_file = Some(path.into());

		self
	}

	/// Parameters that get signed: the caller's, `output=json` unless overridden, and the
	/// `method` verb.
	pub fn signed_params(&self) -> BTreeMap<String, String> {
		let mut params = self.params.clone();

		params.entry("output".into()).or_insert_with(|| "json".into());
		params.insert("method".into(), self.verb.as_str().into());

		params
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn signed_params_inject_output_and_method() {
		let params = ApiRequest::new("/catalog/titles").param("term", "matrix").signed_params();

		assert_eq!(params.get("output").map(String::as_str), Some("json"));
		assert_eq!(params.get("method").map(String::as_str), Some("GET"));
		assert_eq!(params.get("term").map(String::as_str), Some("matrix"));
	}

	#[test]
	fn caller_output_wins_but_method_follows_verb() {
		let params = ApiRequest::new("/catalog/titles/full")
			.param("output", "xml")
			.param("method", "GET")
			.verb(Verb::Post)
			.signed_params();

		assert_eq!(params.get("output").map(String::as_str), Some("xml"));
		assert_eq!(params.get("method").map(String::as_str), Some("POST"));
	}

	#[test]
	fn link_targets_use_href() {
		let link = Link::new("http://api.netflix.com/catalog/titles/movies/1/cast");

		assert_eq!(Target::from(&link).as_str(), link.href);
	}
}
