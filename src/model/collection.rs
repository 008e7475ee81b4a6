//! Paginated title collections: rental history, queues, and at-home items.

// std
use std::{marker::PhantomData, ops::Index, slice::Iter};
// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::{CatalogTitle, Fields, Link, NetflixIdentity},
	normalize::Node,
};

/// Names the JSON key a collection variant stores its items under.
pub trait CollectionKind {
	/// Key holding the item list (or a single item).
	const ITEMS_KEY: &'static str;
	/// Entity name used in payload errors.
	const ENTITY: &'static str;
}

/// Marker for [`RentalHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RentalHistoryKind;
impl CollectionKind for RentalHistoryKind {
	const ENTITY: &'static str = "rental history";
	const ITEMS_KEY: &'static str = "rental_history_item";
}

/// Marker for [`Queue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueKind;
impl CollectionKind for QueueKind {
	const ENTITY: &'static str = "queue";
	const ITEMS_KEY: &'static str = "queue_item";
}

/// Marker for [`AtHome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtHomeKind;
impl CollectionKind for AtHomeKind {
	const ENTITY: &'static str = "at home";
	const ITEMS_KEY: &'static str = "at_home_item";
}

/// Titles the user has rented.
pub type RentalHistory = Collection<RentalHistoryKind>;
/// Disc or instant queue.
pub type Queue = Collection<QueueKind>;
/// Discs currently at the user's home.
pub type AtHome = Collection<AtHomeKind>;

/// One page of titles plus pagination metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<K> {
	/// Titles on this page.
	pub items: Vec<CatalogTitle>,
	/// Total number of results across all pages.
	pub number_of_results: i64,
	/// Page size.
	pub results_per_page: i64,
	/// Index of the first item on this page.
	pub start_index: i64,
	/// Links keyed by their title.
	pub links: BTreeMap<String, Link>,
	/// Passthrough fields.
	pub extra: BTreeMap<String, Node>,
	kind: PhantomData<K>,
}
impl<K> Collection<K>
where
	K: CollectionKind,
{
	pub(crate) fn from_node(node: Node) -> Result<Self, PayloadError> {
		let mut fields = Fields::from_node(K::ENTITY, node)?;
		let items = fields
			.take(K::ITEMS_KEY)
			.map(Node::into_list)
			.unwrap_or_default()
			.into_iter()
			.map(CatalogTitle::from_node)
			.collect::<Result<_, _>>()?;
		let links = fields.take_links()?;
		let number_of_results = fields.require_int("number_of_results")?;
		let results_per_page = fields.require_int("results_per_page")?;
		let start_index = fields.require_int("start_index")?;

		Ok(Self {
			items,
			number_of_results,
			results_per_page,
			start_index,
			links,
			extra: fields.into_extra(),
			kind: PhantomData,
		})
	}
}
impl<K> Collection<K> {
	/// Number of items on this page.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` when the page holds no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the item at `index`.
	pub fn get(&self, index: usize) -> Option<&CatalogTitle> {
		self.items.get(index)
	}

	/// Iterates over the items.
	pub fn iter(&self) -> Iter<'_, CatalogTitle> {
		self.items.iter()
	}

	/// Membership by identity: a title, a raw id string, a link, or anything else exposing a
	/// Netflix identifier.
	pub fn contains<I>(&self, item: &I) -> bool
	where
		I: ?Sized + NetflixIdentity,
	{
		item.netflix_id()
			.is_some_and(|id| self.items.iter().any(|title| title.netflix_id() == Some(id)))
	}

	/// Concurrency token required by queue mutations.
	pub fn etag(&self) -> Option<&str> {
		self.extra.get("etag").and_then(Node::as_str)
	}
}
impl<K> Index<usize> for Collection<K> {
	type Output = CatalogTitle;

	fn index(&self, index: usize) -> &Self::Output {
		&self.items[index]
	}
}
impl<K> IntoIterator for Collection<K> {
	type IntoIter = std::vec::IntoIter<CatalogTitle>;
	type Item = CatalogTitle;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}
impl<'a, K> IntoIterator for &'a Collection<K> {
	type IntoIter = Iter<'a, CatalogTitle>;
	type Item = &'a CatalogTitle;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
