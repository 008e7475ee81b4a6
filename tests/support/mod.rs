#![allow(dead_code)]

// std
use std::{
	collections::{HashMap, VecDeque},
	path::PathBuf,
	sync::{Arc, Mutex},
};
// crates.io
use time::Duration;
// self
use netflix::{
	auth::Consumer,
	client::{Netflix, ReqwestNetflix},
	endpoint::{ApiEndpoints, ClientSettings},
	http::{HttpGet, HttpTransport, RawResponse, ReqwestTransport, TransportFuture},
	reqwest::Client as ReqwestClient,
	url::Url,
};

pub const NOT_FOUND: &str = r#"{"status":{"status_code":404,"message":"Not Found"}}"#;
pub const PER_SECOND: &str = r#"{"status":{"status_code":403,"message":"Developer Over Rate: Service is over queries per second limit"}}"#;
pub const PER_DAY: &str =
	r#"{"status":{"status_code":403,"message":"Account Over queries per day limit"}}"#;

/// In-memory transport answering by request path, in FIFO order per path.
#[derive(Debug, Default)]
pub struct FakeTransport {
	routes: Mutex<HashMap<String, VecDeque<RawResponse>>>,
	seen: Mutex<Vec<Url>>,
	downloads: Mutex<Vec<(Url, PathBuf)>>,
}
impl FakeTransport {
	pub fn respond(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> &Self {
		self.routes
			.lock()
			.expect("Route table lock should not be poisoned.")
			.entry(path.to_owned())
			.or_default()
			.push_back(RawResponse { status, body: body.into() });

		self
	}

	pub fn seen(&self) -> Vec<Url> {
		self.seen.lock().expect("Request log lock should not be poisoned.").clone()
	}

	pub fn downloads(&self) -> Vec<(Url, PathBuf)> {
		self.downloads.lock().expect("Download log lock should not be poisoned.").clone()
	}
}
impl HttpTransport for FakeTransport {
	fn get(&self, request: HttpGet) -> TransportFuture<'_, RawResponse> {
		let response = self
			.routes
			.lock()
			.expect("Route table lock should not be poisoned.")
			.get_mut(request.url.path())
			.and_then(VecDeque::pop_front)
			.unwrap_or_else(|| RawResponse { status: 404, body: NOT_FOUND.into() });

		self.seen.lock().expect("Request log lock should not be poisoned.").push(request.url);

		Box::pin(async move { Ok(response) })
	}

	fn download(&self, url: Url, path: PathBuf) -> TransportFuture<'_, ()> {
		self.downloads.lock().expect("Download log lock should not be poisoned.").push((url, path));

		Box::pin(async { Ok(()) })
	}
}

pub fn client(transport: &Arc<FakeTransport>) -> Netflix<FakeTransport> {
	Netflix::with_transport(Consumer::new("consumer-key", "consumer-secret"), transport.clone())
		.with_settings(
			ClientSettings::default()
				.with_call_interval(Duration::ZERO)
				.with_retry_delay(Duration::milliseconds(50)),
		)
}

/// Reqwest transport that trusts the mock server's self-signed certificate.
pub fn test_reqwest_transport() -> ReqwestTransport {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestTransport::with_client(client)
}

/// Reqwest-backed client pointed at `endpoints`, with call spacing disabled.
pub fn reqwest_client(endpoints: ApiEndpoints) -> ReqwestNetflix {
	Netflix::with_transport(
		Consumer::new("consumer-key", "consumer-secret"),
		test_reqwest_transport(),
	)
	.with_endpoints(endpoints)
	.expect("Mock endpoints should be accepted.")
	.with_settings(ClientSettings::default().with_call_interval(Duration::ZERO))
}

pub fn query(url: &Url, key: &str) -> Option<String> {
	url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

pub fn title_json(id: u32, name: &str) -> serde_json::Value {
	let href = format!("http://api.netflix.com/catalog/titles/movies/{id}");

	serde_json::json!({
		"id": href,
		"title": { "regular": name, "short": name },
		"release_year": "1999",
		"average_rating": 4.1,
		"category": [
			{ "scheme": "http://api.netflix.com/categories/mpaa_ratings", "label": "R", "term": "R" },
			{ "scheme": "http://api.netflix.com/categories/genres", "label": "Action", "term": "Action" },
		],
		"link": [
			{ "href": href, "rel": "http://schemas.netflix.com/catalog/title", "title": name },
			{
				"href": format!("{href}/discs"),
				"rel": "http://schemas.netflix.com/catalog/titles.discs",
				"title": "discs",
			},
			{
				"href": format!("{href}/synopsis"),
				"rel": "http://schemas.netflix.com/catalog/titles/synopsis",
				"title": "synopsis",
			},
		],
	})
}
