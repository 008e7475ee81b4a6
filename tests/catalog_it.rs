mod support;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use netflix::{
	client::ReqwestNetflix,
	endpoint::ApiEndpoints,
	error::{ConfigError, Error},
	normalize::Node,
	url::Url,
};
use support::title_json;

fn build_client(server: &MockServer) -> ReqwestNetflix {
	let base = Url::parse(&server.base_url()).expect("Mock base URL should parse.");
	let endpoints = ApiEndpoints::builder()
		.host(&base)
		.expect("Mock host should be accepted.")
		.build()
		.expect("Mock endpoints should validate.");

	support::reqwest_client(endpoints)
}

#[tokio::test]
async fn search_yields_titles_with_absolute_disc_links() {
	let server = MockServer::start_async().await;
	let body = json!({
		"catalog_titles": {
			"number_of_results": 2,
			"start_index": 0,
			"results_per_page": 2,
			"catalog_title": [title_json(60000929, "The Matrix"), title_json(60031236, "The Matrix Reloaded")],
		},
	});
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/catalog/titles")
				.query_param("term", "matrix")
				.query_param("output", "json")
				.query_param("method", "GET")
				.query_param("oauth_consumer_key", "consumer-key")
				.query_param_exists("oauth_signature")
				.query_param_exists("oauth_nonce");
			then.status(200).header("content-type", "application/json").body(body.to_string());
		})
		.await;
	let titles = build_client(&server)
		.search_titles("matrix", None)
		.await
		.expect("Search should succeed.");

	mock.assert_async().await;

	assert_eq!(titles.len(), 2);

	for title in &titles {
		let discs = title.links.get("discs").expect("Every title should link its discs.");
		let url = Url::parse(&discs.href).expect("Disc links should be absolute URLs.");

		assert_eq!(url.scheme(), "http");
		assert!(url.path().ends_with("/discs"));
	}

	assert_eq!(titles[0].title, "The Matrix");
	assert_eq!(
		titles[0].netflix_id(),
		Some("http://api.netflix.com/catalog/titles/movies/60000929")
	);
	assert_ne!(titles[0], titles[1]);
}

#[tokio::test]
async fn follow_link_drills_into_synopsis() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let mut title = title_json(1, "Heat");

	title["link"][2]["href"] = json!(server.url("/catalog/titles/movies/1/synopsis"));

	let search = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalog/titles");
			then.status(200).body(json!({ "catalog_titles": { "catalog_title": title } }).to_string());
		})
		.await;
	let synopsis = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalog/titles/movies/1/synopsis");
			then.status(200).body(r#"{"synopsis":"A cop chases a thief."}"#);
		})
		.await;
	let netflix = build_client(&server);
	let titles = netflix.search_titles("heat", None).await?;
	let node = netflix.follow_link(&titles[0], "synopsis", None).await?;

	search.assert_async().await;
	synopsis.assert_async().await;

	assert_eq!(node, Node::String("A cop chases a thief.".into()));

	let err = netflix
		.follow_link(&titles[0], "trailers", None)
		.await
		.expect_err("Missing links must be reported.");

	assert!(matches!(err, Error::Config(ConfigError::MissingLink { .. })));

	Ok(())
}

#[tokio::test]
async fn not_found_is_classified() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalog/titles/movies/0");
			then.status(404).body(r#"{"status":{"status_code":404,"message":"Not Found"}}"#);
		})
		.await;
	let err = build_client(&server)
		.catalog_title("/catalog/titles/movies/0", None)
		.await
		.expect_err("Unknown titles must fail.");

	mock.assert_async().await;

	assert_eq!(err.as_api().map(|e| e.message()), Some("Not Found"));
}

#[tokio::test]
async fn catalog_index_is_written_to_disk() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalog/titles/index").query_param_exists("oauth_signature");
			then.status(200).body("<catalog_titles/>");
		})
		.await;
	let path = std::env::temp_dir().join(format!("netflix-index-{}.xml", std::process::id()));

	build_client(&server)
		.download_catalog_index(&path, None)
		.await
		.expect("Index download should succeed.");

	mock.assert_async().await;

	let written = std::fs::read_to_string(&path).expect("Index file should exist.");

	std::fs::remove_file(&path).expect("Index file should be removable.");

	assert_eq!(written, "<catalog_titles/>");
}
