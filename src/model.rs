//! Typed catalog + account object graph.
//!
//! Every value here is built by the normalizer from an already-normalized [`Node`] tree and
//! is never mutated afterwards. Fields the API sends but the types do not name are kept in
//! explicit `extra` maps instead of being dropped.

pub mod category;
pub mod collection;
pub mod link;
pub mod title;
pub mod user;

pub use category::*;
pub use collection::*;
pub use link::*;
pub use title::*;
pub use user::*;

// self
use crate::{_prelude::*, error::PayloadError, normalize::Node};

/// Anything that can be matched against a title's derived Netflix identifier.
pub trait NetflixIdentity {
	/// Returns the identifier used for equality and collection membership.
	fn netflix_id(&self) -> Option<&str>;
}
impl NetflixIdentity for str {
	fn netflix_id(&self) -> Option<&str> {
		Some(self)
	}
}
impl NetflixIdentity for String {
	fn netflix_id(&self) -> Option<&str> {
		Some(self)
	}
}
impl<T> NetflixIdentity for &T
where
	T: ?Sized + NetflixIdentity,
{
	fn netflix_id(&self) -> Option<&str> {
		(**self).netflix_id()
	}
}

/// Field cursor over a normalized JSON object; popped fields are removed so the rest can be
/// kept as passthrough.
pub(crate) struct Fields {
	entity: &'static str,
	map: BTreeMap<String, Node>,
}
impl Fields {
	pub(crate) fn from_node(entity: &'static str, node: Node) -> Result<Self, PayloadError> {
		match node {
			Node::Map(map) => Ok(Self { entity, map }),
			_ => Err(PayloadError::UnexpectedShape { entity, field: "<root>", expected: "an object" }),
		}
	}

	pub(crate) fn take(&mut self, field: &str) -> Option<Node> {
		self.map.remove(field)
	}

	pub(crate) fn require(&mut self, field: &'static str) -> Result<Node, PayloadError> {
		self.take(field).ok_or(PayloadError::MissingField { entity: self.entity, field })
	}

	pub(crate) fn take_text(&mut self, field: &str) -> Option<String> {
		self.take(field).and_then(Node::into_text)
	}

	pub(crate) fn require_text(&mut self, field: &'static str) -> Result<String, PayloadError> {
		let entity = self.entity;

		self.require(field)?.into_text().ok_or(PayloadError::UnexpectedShape {
			entity,
			field,
			expected: "a string",
		})
	}

	pub(crate) fn require_int(&mut self, field: &'static str) -> Result<i64, PayloadError> {
		let entity = self.entity;

		self.require(field)?.as_i64().ok_or(PayloadError::NotAnInteger { entity, field })
	}

	/// Epoch seconds (number or numeric string) to a UTC timestamp; anything else is absent.
	pub(crate) fn take_timestamp(&mut self, field: &str) -> Option<OffsetDateTime> {
		self.take(field).as_ref().and_then(Node::as_f64).and_then(epoch_seconds)
	}

	/// Pops `link` (one or many) into a map keyed by link title.
	pub(crate) fn take_links(&mut self) -> Result<BTreeMap<String, Link>, PayloadError> {
		let Some(node) = self.take("link") else {
			return Ok(BTreeMap::new());
		};

		node.into_list()
			.into_iter()
			.map(|node| Link::from_node(node).map(|link| (link.key().to_owned(), link)))
			.collect()
	}

	pub(crate) fn into_extra(self) -> BTreeMap<String, Node> {
		self.map
	}
}

pub(crate) fn epoch_seconds(seconds: f64) -> Option<OffsetDateTime> {
	if !seconds.is_finite() {
		return None;
	}

	OffsetDateTime::from_unix_timestamp_nanos((seconds * 1_000_000_000.) as i128).ok()
}
