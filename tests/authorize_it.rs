mod support;

// crates.io
use httpmock::prelude::*;
// self
use netflix::{
	auth::OAuthToken,
	classify::{ApiError, AuthError},
	client::ReqwestNetflix,
	endpoint::ApiEndpoints,
	error::{Error, PayloadError},
	url::Url,
};

fn build_client(server: &MockServer) -> ReqwestNetflix {
	let base = Url::parse(&server.base_url()).expect("Mock base URL should parse.");
	let endpoints = ApiEndpoints::builder()
		.host(&base)
		.expect("Mock host should be accepted.")
		.authorization(
			Url::parse(&server.url("/oauth/login")).expect("Mock login URL should parse."),
		)
		.build()
		.expect("Mock endpoints should validate.");

	support::reqwest_client(endpoints).with_application_name("Queue Butler")
}

#[tokio::test]
async fn authorization_url_signs_with_request_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/request_token").header_exists("authorization");
			then.status(200).body(
				"oauth_token=req-key&oauth_token_secret=req-secret&application_name=Queue+Butler",
			);
		})
		.await;
	let request = build_client(&server)
		.authorization_url(Some("https://app.example.com/callback"))
		.await
		.expect("Authorization URL should be produced.");

	mock.assert_async().await;

	assert_eq!(request.request_token, OAuthToken::new("req-key", "req-secret"));

	let url = request.authorize_url;
	let param = |key: &str| url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned());

	assert_eq!(url.path(), "/oauth/login");
	assert_eq!(param("oauth_token").as_deref(), Some("req-key"));
	assert_eq!(param("oauth_consumer_key").as_deref(), Some("consumer-key"));
	assert_eq!(param("application_name").as_deref(), Some("Queue Butler"));
	assert_eq!(param("oauth_callback").as_deref(), Some("https://app.example.com/callback"));
	assert!(param("oauth_signature").is_some());
}

#[tokio::test]
async fn authorize_exchanges_for_user_scoped_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth/access_token")
				.query_param("oauth_token", "req-key")
				.query_param("application_name", "Queue Butler")
				.query_param_exists("oauth_signature");
			then.status(200).body(
				"user_id=T1tiNE3CEfdRrTQ8r5v1FMiA--&oauth_token=acc-key&oauth_token_secret=acc-secret",
			);
		})
		.await;
	let grant = build_client(&server)
		.authorize(&OAuthToken::new("req-key", "req-secret"))
		.await
		.expect("Access token exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(grant.user_id.as_ref(), "T1tiNE3CEfdRrTQ8r5v1FMiA--");
	assert_eq!(grant.token, OAuthToken::new("acc-key", "acc-secret"));
}

#[tokio::test]
async fn rejected_tokens_are_classified() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/access_token");
			then.status(401)
				.body(r#"{"status":{"status_code":401,"message":"Invalid Or Expired Token"}}"#);
		})
		.await;

	let err = build_client(&server)
		.authorize(&OAuthToken::new("stale", "stale-secret"))
		.await
		.expect_err("Expired request tokens must fail.");

	assert!(matches!(err, Error::Api(ApiError::Auth(AuthError::InvalidOrExpiredToken { .. }))));
}

#[tokio::test]
async fn incomplete_token_responses_are_payload_errors() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/request_token");
			then.status(200).body("oauth_token=only-key");
		})
		.await;

	let err = build_client(&server).request_token().await.expect_err("A missing secret must fail.");

	assert!(matches!(
		err,
		Error::Payload(PayloadError::MissingField { field: "oauth_token_secret", .. })
	));
}
