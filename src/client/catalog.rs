//! Catalog helpers: search, title lookup, link drill-down, and bulk exports.

// self
use crate::{
	_prelude::*,
	auth::OAuthToken,
	client::{ApiRequest, Netflix, Target},
	error::ConfigError,
	http::HttpTransport,
	model::CatalogTitle,
	normalize::Node,
};

impl<T> Netflix<T>
where
	T: ?Sized + HttpTransport,
{
	/// Searches the catalog by title text.
	pub async fn search_titles(
		&self,
		term: &str,
		token: Option<&OAuthToken>,
	) -> Result<Vec<CatalogTitle>> {
		let request = ApiRequest::new("/catalog/titles").param("term", term).token(token);

		Ok(self.fetch(request).await?.into_titles()?)
	}

	/// Fetches one title by id URL or path.
	pub async fn catalog_title(
		&self,
		target: impl Into<Target>,
		token: Option<&OAuthToken>,
	) -> Result<CatalogTitle> {
		Ok(self.fetch(ApiRequest::new(target).token(token)).await?.into_title()?)
	}

	/// Follows one of a title's links (`discs`, `synopsis`, `cast`, `similars`, `formats`,
	/// ...) and returns the normalized body.
	pub async fn follow_link(
		&self,
		title: &CatalogTitle,
		link_title: &str,
		token: Option<&OAuthToken>,
	) -> Result<Node> {
		let link = title
			.link(link_title)
			.ok_or_else(|| ConfigError::MissingLink { name: link_title.to_owned() })?;

		self.fetch(ApiRequest::new(link).token(token)).await
	}

	/// Writes the catalog index export to `path`.
	pub async fn download_catalog_index(
		&self,
		path: impl AsRef<Path>,
		token: Option<&OAuthToken>,
	) -> Result<()> {
		self.download("/catalog/titles/index", path.as_ref(), token).await
	}

	/// Writes the full catalog export to `path`.
	pub async fn download_catalog_full(
		&self,
		path: impl AsRef<Path>,
		token: Option<&OAuthToken>,
	) -> Result<()> {
		self.download("/catalog/titles/full", path.as_ref(), token).await
	}

	async fn download(&self, target: &str, path: &Path, token: Option<&OAuthToken>) -> Result<()> {
		self.dispatch(ApiRequest::new(target).token(token).output_file(path)).await?;

		Ok(())
	}
}
