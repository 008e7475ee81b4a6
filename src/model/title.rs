//! Catalog titles: movies, series, seasons, discs, and episodes.

// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::{Category, Fields, Link, NetflixIdentity},
	normalize::Node,
};

const ENTITY: &str = "catalog title";

/// A unit of the catalog.
///
/// Identity is the derived [`netflix_id`](Self::netflix_id): two titles parsed from different
/// payloads compare equal whenever their ids match, regardless of any other field, and a
/// title without an id equals nothing. Fields without a typed counterpart (`id`,
/// `release_year`, `runtime`, `box_art`, ...) are kept in [`extra`](Self::extra).
#[derive(Clone, Debug)]
pub struct CatalogTitle {
	/// Regular title.
	pub title: String,
	/// Short title.
	pub title_short: String,
	/// Categories (genres, ratings, formats).
	pub categories: Vec<Category>,
	/// Links keyed by their title.
	pub links: BTreeMap<String, Link>,
	/// Average member rating.
	pub average_rating: Option<f64>,
	/// Estimated arrival date for at-home items.
	pub estimated_arrival_date: Option<OffsetDateTime>,
	/// Ship date for at-home or rental-history items.
	pub shipped_date: Option<OffsetDateTime>,
	/// Passthrough fields.
	pub extra: BTreeMap<String, Node>,
}
impl CatalogTitle {
	/// Raw `id` field (the title's resource URL).
	pub fn id(&self) -> Option<&str> {
		self.field("id").and_then(Node::as_str)
	}

	/// Derived identity: the href of the link named after the title, else the raw `id`.
	pub fn netflix_id(&self) -> Option<&str> {
		self.links.get(&self.title).map(Link::as_str).or_else(|| self.id())
	}

	/// Looks up a passthrough field.
	pub fn field(&self, name: &str) -> Option<&Node> {
		self.extra.get(name)
	}

	/// Looks up a link by title (`discs`, `synopsis`, `cast`, `similars`, ...).
	pub fn link(&self, title: &str) -> Option<&Link> {
		self.links.get(title)
	}

	pub(crate) fn from_node(node: Node) -> Result<Self, PayloadError> {
		let mut fields = Fields::from_node(ENTITY, node)?;
		let (title, title_short) = title_names(fields.require("title")?)?;
		let categories = fields
			.require("category")?
			.into_list()
			.into_iter()
			.map(Category::from_node)
			.collect::<Result<_, _>>()?;
		let links = fields.take_links()?;
		let estimated_arrival_date = fields.take_timestamp("estimated_arrival_date");
		let shipped_date = fields.take_timestamp("shipped_date");
		let average_rating = fields.take("average_rating").as_ref().and_then(Node::as_f64);

		Ok(Self {
			title,
			title_short,
			categories,
			links,
			average_rating,
			estimated_arrival_date,
			shipped_date,
			extra: fields.into_extra(),
		})
	}
}
impl PartialEq for CatalogTitle {
	fn eq(&self, other: &Self) -> bool {
		matches!((self.netflix_id(), other.netflix_id()), (Some(a), Some(b)) if a == b)
	}
}
impl Display for CatalogTitle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.title)
	}
}
impl NetflixIdentity for CatalogTitle {
	fn netflix_id(&self) -> Option<&str> {
		CatalogTitle::netflix_id(self)
	}
}

/// `{regular, short}`; a missing `short` falls back to `regular`, a bare string fills both.
fn title_names(node: Node) -> Result<(String, String), PayloadError> {
	if let Node::String(title) = node {
		return Ok((title.clone(), title));
	}

	let mut fields = Fields::from_node(ENTITY, node).map_err(|_| PayloadError::UnexpectedShape {
		entity: ENTITY,
		field: "title",
		expected: "an object with `regular` and `short`",
	})?;
	let regular = fields.require_text("regular")?;
	let short = fields.take_text("short").unwrap_or_else(|| regular.clone());

	Ok((regular, short))
}
