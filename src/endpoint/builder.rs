// self
use crate::{_prelude::*, endpoint::ApiEndpoints};

/// Errors raised while constructing or validating endpoint sets.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum EndpointError {
	/// Endpoints must use HTTP or HTTPS.
	#[error("The {endpoint} endpoint must use HTTP or HTTPS: {url}.")]
	UnsupportedScheme {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Relative targets are appended to the API base, so it cannot carry a query or fragment.
	#[error("The API base must not carry a query or fragment: {url}.")]
	BaseWithQuery {
		/// API base URL that failed validation.
		url: String,
	},
	/// Endpoints must name a host.
	#[error("The {endpoint} endpoint has no host: {url}.")]
	MissingHost {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`ApiEndpoints`] values.
///
/// Every field starts at the public Netflix endpoint; override only what differs (a
/// staging host, a local mock server).
#[derive(Debug)]
pub struct ApiEndpointsBuilder {
	/// Base URL relative targets are joined to.
	pub api_base: Url,
	/// Request-token endpoint.
	pub request_token: Url,
	/// Access-token endpoint.
	pub access_token: Url,
	/// User authorization page.
	pub authorization: Url,
}
impl ApiEndpointsBuilder {
	/// Creates a new builder seeded with the public Netflix endpoints.
	pub fn new() -> Self {
		let ApiEndpoints { api_base, request_token, access_token, authorization } =
			ApiEndpoints::netflix();

		Self { api_base, request_token, access_token, authorization }
	}

	/// Sets the API base.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = url;

		self
	}

	/// Sets the request-token endpoint.
	pub fn request_token(mut self, url: Url) -> Self {
		self.request_token = url;

		self
	}

	/// Sets the access-token endpoint.
	pub fn access_token(mut self, url: Url) -> Self {
		self.access_token = url;

		self
	}

	/// Sets the user authorization page.
	pub fn authorization(mut self, url: Url) -> Self {
		self.authorization = url;

		self
	}

	/// Points the API base and both token endpoints at `base`, keeping the standard
	/// `/oauth/request_token` + `/oauth/access_token` paths.
	pub fn host(self, base: &Url) -> Result<Self, EndpointError> {
		let join = |path: &str| {
			base.join(path).map_err(|_| EndpointError::MissingHost {
				endpoint: "api_base",
				url: base.to_string(),
			})
		};
		let request_token = join("/oauth/request_token")?;
		let access_token = join("/oauth/access_token")?;

		Ok(self.api_base(base.clone()).request_token(request_token).access_token(access_token))
	}

	/// Consumes the builder and validates the resulting endpoint set.
	pub fn build(self) -> Result<ApiEndpoints, EndpointError> {
		let endpoints = ApiEndpoints {
			api_base: self.api_base,
			request_token: self.request_token,
			access_token: self.access_token,
			authorization: self.authorization,
		};

		endpoints.validate()?;

		Ok(endpoints)
	}
}
impl Default for ApiEndpointsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ApiEndpoints {
	/// Validates schemes, hosts, and the API base shape.
	pub fn validate(&self) -> Result<(), EndpointError> {
		validate_endpoint("api_base", &self.api_base)?;
		validate_endpoint("request_token", &self.request_token)?;
		validate_endpoint("access_token", &self.access_token)?;
		validate_endpoint("authorization", &self.authorization)?;

		if self.api_base.query().is_some() || self.api_base.fragment().is_some() {
			return Err(EndpointError::BaseWithQuery { url: self.api_base.to_string() });
		}

		Ok(())
	}
}

fn validate_endpoint(endpoint: &'static str, url: &Url) -> Result<(), EndpointError> {
	if !matches!(url.scheme(), "http" | "https") {
		return Err(EndpointError::UnsupportedScheme { endpoint, url: url.to_string() });
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(EndpointError::MissingHost { endpoint, url: url.to_string() });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(raw: &str) -> Url {
		Url::parse(raw).expect("Fixture URL should parse.")
	}

	#[test]
	fn builder_defaults_to_netflix() {
		let endpoints = ApiEndpoints::builder().build().expect("Default endpoints should validate.");

		assert_eq!(endpoints, ApiEndpoints::netflix());
		assert_eq!(endpoints.authorization.as_str(), "https://api-user.netflix.com/oauth/login");
	}

	#[test]
	fn host_rewrites_base_and_token_endpoints() {
		let endpoints = ApiEndpoints::builder()
			.host(&url("http://127.0.0.1:9000"))
			.expect("Host override should succeed.")
			.build()
			.expect("Endpoints should validate.");

		assert_eq!(endpoints.request_token.as_str(), "http://127.0.0.1:9000/oauth/request_token");
		assert_eq!(endpoints.access_token.as_str(), "http://127.0.0.1:9000/oauth/access_token");
		assert_eq!(endpoints.authorization, ApiEndpoints::netflix().authorization);
	}

	#[test]
	fn non_http_schemes_are_rejected() {
		let err = ApiEndpoints::builder()
			.access_token(url("ftp://api.example.com/oauth/access_token"))
			.build()
			.expect_err("FTP endpoints must be rejected.");

		assert!(matches!(err, EndpointError::UnsupportedScheme { endpoint: "access_token", .. }));
	}

	#[test]
	fn api_base_with_query_is_rejected() {
		let err = ApiEndpoints::builder()
			.api_base(url("http://api.example.com/?output=xml"))
			.build()
			.expect_err("A base with a query must be rejected.");

		assert!(matches!(err, EndpointError::BaseWithQuery { .. }));
	}
}
