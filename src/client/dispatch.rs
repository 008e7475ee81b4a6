//! Signed, rate-limited dispatch with the single per-second retry.
//!
//! Each attempt resolves the target, signs a fresh request (new nonce + timestamp), and runs
//! through the client's [`CallInterval`](crate::ext::CallInterval) gate. A `2xx` body is
//! normalized; anything else is classified. Only
//! [`QuotaError::PerSecond`](crate::classify::QuotaError::PerSecond) is retried, once, after
//! [`ClientSettings::retry_delay`](crate::endpoint::ClientSettings::retry_delay).

// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	auth::OAuthToken,
	classify,
	client::{ApiRequest, Netflix},
	error::PayloadError,
	http::{HttpGet, HttpTransport},
	normalize::{self, Node},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

impl<T> Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	/// Dispatches one API call.
	///
	/// Returns `None` when the request names an output file (the body went to disk), and the
	/// normalized body otherwise.
	pub async fn dispatch(&self, request: ApiRequest) -> Result<Option<Node>> {
		let kind = if request.output_file.is_some() { CallKind::Download } else { CallKind::Api };
		let span = CallSpan::new(kind, "dispatch");

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.endpoints.resolve(request.target.as_str())?;
				let params = request.signed_params();
				let token = request.token.as_ref();
				let output_file = request.output_file.as_deref();

				match self.attempt(kind, &url, &params, token, output_file).await {
					Err(Error::Api(e)) if e.is_per_second_limit() => {
						let delay =
							StdDuration::try_from(self.settings.retry_delay).unwrap_or_default();

						obs::log_retry(kind, delay, &e);
						obs::record_retry(kind, delay);
						tokio::time::sleep(delay).await;

						self.attempt(kind, &url, &params, token, output_file).await
					},
					other => other,
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
		}

		result
	}

	/// Dispatches a call whose body must be JSON.
	pub(crate) async fn fetch(&self, mut request: ApiRequest) -> Result<Node> {
		request.output_file = None;

		self.dispatch(request).await?.ok_or_else(|| {
			PayloadError::UnexpectedShape {
				entity: "response",
				field: "<root>",
				expected: "a JSON body",
			}
			.into()
		})
	}

	async fn attempt(
		&self,
		kind: CallKind,
		url: &Url,
		params: &BTreeMap<String, String>,
		token: Option<&OAuthToken>,
		output_file: Option<&Path>,
	) -> Result<Option<Node>> {
		self.limiter.run(self.send(kind, url, params, token, output_file)).await
	}

	async fn send(
		&self,
		kind: CallKind,
		url: &Url,
		params: &BTreeMap<String, String>,
		token: Option<&OAuthToken>,
		output_file: Option<&Path>,
	) -> Result<Option<Node>> {
		let signed = self.signer.sign(&self.consumer, token, url, params)?.to_url()?;

		if let Some(path) = output_file {
			self.transport.download(signed, path.to_path_buf()).await?;

			return Ok(None);
		}

		let response = self.transport.get(HttpGet::new(signed)).await?;

		obs::log_response(kind, url, response.status);

		if !response.is_success() {
			return Err(classify::classify(response.status, &response.body).into());
		}

		Ok(Some(normalize::decode(&response.body, response.status)?))
	}
}
