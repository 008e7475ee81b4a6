//! Transport primitives for signed API calls.
//!
//! The client depends on HTTP only through [`HttpTransport`]: one GET that returns the raw
//! status + body, and one download that streams a URL into a file. Every request is already
//! fully signed by the time it reaches the transport, so implementations never see the
//! consumer or token secrets.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use tokio::io::AsyncWriteExt;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`HttpTransport`] methods.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// GET request handed to the transport.
#[derive(Clone, Debug)]
pub struct HttpGet {
	/// Fully-qualified URL, including any signed query parameters.
	pub url: Url,
	/// Extra headers (the OAuth `Authorization` header for token endpoints).
	pub headers: Vec<(String, String)>,
}
impl HttpGet {
	/// Builds a header-less GET for `url`.
	pub fn new(url: Url) -> Self {
		Self { url, headers: Vec::new() }
	}

	/// Appends a header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}
}

/// Status + body captured from a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Returns `true` for `2xx` statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP stacks capable of executing signed API calls.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared by
/// every clone of a client, and the futures they return must be `Send` so callers can
/// spawn client calls onto multi-threaded runtimes. Non-`2xx` responses are not errors
/// at this layer; return them as [`RawResponse`] values so the client can classify them.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Performs a GET and returns the raw status + body.
	fn get(&self, request: HttpGet) -> TransportFuture<'_, RawResponse>;

	/// Downloads `url` into `path`, replacing any existing file.
	fn download(&self, url: Url, path: PathBuf) -> TransportFuture<'_, ()>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn get(&self, request: HttpGet) -> TransportFuture<'_, RawResponse> {
		Box::pin(async move {
			let mut builder = self.0.get(request.url);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(RawResponse { status, body })
		})
	}

	fn download(&self, url: Url, path: PathBuf) -> TransportFuture<'_, ()> {
		Box::pin(async move {
			let response = self.0.get(url).send().await?.error_for_status()?;

			if let Err(e) = stream_to_file(response, &path).await {
				// Drop the partial file; the stream error is reported.
				let _ = tokio::fs::remove_file(&path).await;

				return Err(e);
			}

			Ok(())
		})
	}
}

/// Writes the body chunk by chunk so bulk exports never sit in memory.
#[cfg(feature = "reqwest")]
async fn stream_to_file(
	mut response: reqwest::Response,
	path: &Path,
) -> Result<(), TransportError> {
	let mut file = tokio::fs::File::create(path).await?;

	while let Some(chunk) = response.chunk().await? {
		file.write_all(&chunk).await?;
	}

	file.flush().await?;

	Ok(())
}
