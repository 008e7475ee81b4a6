//! Three-legged authorization: request token, user authorization URL, access token.

// self
use crate::{
	_prelude::*,
	auth::{AccessGrant, OAuthToken},
	classify,
	client::Netflix,
	http::{HttpGet, HttpTransport},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Authorization page to send the user to, plus the request token to exchange afterwards.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
	/// Signed authorization URL.
	pub authorize_url: Url,
	/// Request token that [`Netflix::authorize`] exchanges once the user approves.
	pub request_token: OAuthToken,
}

impl<T> Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	/// Fetches an unauthorized request token; the OAuth parameters travel in the
	/// `Authorization` header.
	pub async fn request_token(&self) -> Result<OAuthToken> {
		const KIND: CallKind = CallKind::RequestToken;

		let span = CallSpan::new(KIND, "request_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = &self.endpoints.request_token;
				let signed = self.signer.sign(&self.consumer, None, url, &BTreeMap::new())?;
				let request = HttpGet::new(url.clone())
					.header("Authorization", signed.authorization_header());
				let body = self.fetch_form(KIND, request).await?;

				Ok(OAuthToken::from_form(&body)?)
			})
			.await;

		record(KIND, &result);

		result
	}

	/// Fetches a request token and signs the authorization page URL with it.
	///
	/// The URL carries `application_name` when configured and `oauth_callback` when given.
	pub async fn authorization_url(&self, callback: Option<&str>) -> Result<AuthorizationRequest> {
		let request_token = self.request_token().await?;
		let mut params = self.application_params();

		if let Some(callback) = callback {
			params.insert("oauth_callback".into(), callback.into());
		}

		let authorize_url = self
			.signer
			.sign(&self.consumer, Some(&request_token), &self.endpoints.authorization, &params)?
			.to_url()?;

		Ok(AuthorizationRequest { authorize_url, request_token })
	}

	/// Exchanges an authorized request token for the user's id and access token.
	pub async fn authorize(&self, request_token: &OAuthToken) -> Result<AccessGrant> {
		const KIND: CallKind = CallKind::AccessToken;

		let span = CallSpan::new(KIND, "authorize");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self
					.signer
					.sign(
						&self.consumer,
						Some(request_token),
						&self.endpoints.access_token,
						&self.application_params(),
					)?
					.to_url()?;
				let body = self.fetch_form(KIND, HttpGet::new(url)).await?;

				Ok(AccessGrant::from_form(&body)?)
			})
			.await;

		record(KIND, &result);

		result
	}

	fn application_params(&self) -> BTreeMap<String, String> {
		let mut params = BTreeMap::new();

		if let Some(name) = &self.settings.application_name {
			params.insert("application_name".into(), name.clone());
		}

		params
	}

	/// Runs a token-endpoint GET through the call gate and returns the success body.
	async fn fetch_form(&self, kind: CallKind, request: HttpGet) -> Result<Vec<u8>> {
		let url = request.url.clone();
		let response = self.limiter.run(self.transport.get(request)).await?;

		obs::log_response(kind, &url, response.status);

		if !response.is_success() {
			return Err(classify::classify(response.status, &response.body).into());
		}

		Ok(response.body)
	}
}

fn record<V>(kind: CallKind, result: &Result<V>) {
	match result {
		Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
		Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
	}
}
