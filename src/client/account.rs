//! User-scoped helpers: profile, queues, rental history, and at-home items.

// self
use crate::{
	_prelude::*,
	auth::{OAuthToken, UserId},
	client::{ApiRequest, Netflix, Verb},
	error::ConfigError,
	http::HttpTransport,
	model::{AtHome, NetflixIdentity, Queue, RentalHistory, User},
	normalize::Node,
};

/// Queue flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueueFormat {
	/// Discs by mail.
	#[default]
	Disc,
	/// Streaming.
	Instant,
}
impl QueueFormat {
	/// Path segment under `/users/{id}/queues/`.
	pub const fn as_str(self) -> &'static str {
		match self {
			QueueFormat::Disc => "disc",
			QueueFormat::Instant => "instant",
		}
	}
}
impl Display for QueueFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

impl<T> Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	/// Fetches the user's profile.
	pub async fn user(&self, user_id: &UserId, token: &OAuthToken) -> Result<User> {
		let request = ApiRequest::new(format!("/users/{user_id}")).token(Some(token));

		Ok(self.fetch(request).await?.into_user()?)
	}

	/// Fetches one page of the user's queue.
	pub async fn queue(
		&self,
		user_id: &UserId,
		token: &OAuthToken,
		format: QueueFormat,
	) -> Result<Queue> {
		let request = ApiRequest::new(queue_path(user_id, format)).token(Some(token));

		Ok(self.fetch(request).await?.into_queue()?)
	}

	/// Fetches one page of the user's rental history.
	pub async fn rental_history(
		&self,
		user_id: &UserId,
		token: &OAuthToken,
	) -> Result<RentalHistory> {
		let request = ApiRequest::new(format!("/users/{user_id}/rental_history")).token(Some(token));

		Ok(self.fetch(request).await?.into_rental_history()?)
	}

	/// Fetches the discs currently at the user's home.
	pub async fn at_home(&self, user_id: &UserId, token: &OAuthToken) -> Result<AtHome> {
		let request = ApiRequest::new(format!("/users/{user_id}/at_home")).token(Some(token));

		Ok(self.fetch(request).await?.into_at_home()?)
	}

	/// Adds a title to the user's queue.
	///
	/// `etag` is the value from the latest [`Queue::etag`]; a title that is already queued
	/// fails with [`ApiError::TitleAlreadyInQueue`](crate::classify::ApiError::TitleAlreadyInQueue).
	pub async fn add_to_queue<I>(
		&self,
		user_id: &UserId,
		token: &OAuthToken,
		format: QueueFormat,
		title: &I,
		etag: Option<&str>,
	) -> Result<Node>
	where
		I: ?Sized + NetflixIdentity,
	{
		let title_ref =
			title.netflix_id().ok_or(ConfigError::MissingTarget { entity: "catalog title" })?;
		let mut request = ApiRequest::new(queue_path(user_id, format))
			.token(Some(token))
			.verb(Verb::Post)
			.param("title_ref", title_ref);

		if let Some(etag) = etag {
			request = request.param("etag", etag);
		}

		self.fetch(request).await
	}
}

fn queue_path(user_id: &UserId, format: QueueFormat) -> String {
	format!("/users/{user_id}/queues/{format}")
}
