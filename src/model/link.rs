//! Hyperlinks attached to titles, users, and collections.

// std
use std::{
	cmp::Ordering,
	hash::{Hash, Hasher},
};
// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::{Fields, NetflixIdentity},
	normalize::Node,
};

const ENTITY: &str = "link";

/// API hyperlink. Its primary value is [`href`](Self::href): equality, ordering, hashing, and
/// display all go through it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
	/// Absolute target URL.
	pub href: String,
	/// Relation URI describing what the link points at.
	pub rel: Option<String>,
	/// Human-readable label; titles key their link maps by it.
	pub title: Option<String>,
}
impl Link {
	/// Creates a bare link.
	pub fn new(href: impl Into<String>) -> Self {
		Self { href: href.into(), rel: None, title: None }
	}

	/// Returns the href.
	pub fn as_str(&self) -> &str {
		&self.href
	}

	/// Map key for this link: its title, falling back to the relation and then the href.
	pub fn key(&self) -> &str {
		self.title.as_deref().or(self.rel.as_deref()).unwrap_or(&self.href)
	}

	pub(crate) fn from_node(node: Node) -> Result<Self, PayloadError> {
		if let Node::String(href) = node {
			return Ok(Self::new(href));
		}

		let mut fields = Fields::from_node(ENTITY, node)?;

		Ok(Self {
			href: fields.require_text("href")?,
			rel: fields.take_text("rel"),
			title: fields.take_text("title"),
		})
	}
}
impl PartialEq for Link {
	fn eq(&self, other: &Self) -> bool {
		self.href == other.href
	}
}
impl Eq for Link {}
impl PartialEq<str> for Link {
	fn eq(&self, other: &str) -> bool {
		self.href == other
	}
}
impl PartialEq<&str> for Link {
	fn eq(&self, other: &&str) -> bool {
		self.href == *other
	}
}
impl PartialOrd for Link {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for Link {
	fn cmp(&self, other: &Self) -> Ordering {
		self.href.cmp(&other.href)
	}
}
impl Hash for Link {
	fn hash<H>(&self, state: &mut H)
	where
		H: Hasher,
	{
		self.href.hash(state);
	}
}
impl AsRef<str> for Link {
	fn as_ref(&self) -> &str {
		&self.href
	}
}
impl Display for Link {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.href)
	}
}
impl NetflixIdentity for Link {
	fn netflix_id(&self) -> Option<&str> {
		Some(&self.href)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn links_compare_by_href_only() {
		let a = Link {
			href: "http://api.netflix.com/catalog/titles/movies/1".into(),
			rel: Some("http://schemas.netflix.com/catalog/title".into()),
			title: Some("The Matrix".into()),
		};
		let b = Link::new("http://api.netflix.com/catalog/titles/movies/1");

		assert_eq!(a, b);
		assert_eq!(a, "http://api.netflix.com/catalog/titles/movies/1");
		assert_eq!(a.to_string(), a.href);
		assert_eq!(a.key(), "The Matrix");
		assert_eq!(b.key(), b.href);
	}

	#[test]
	fn builds_from_object_and_rejects_missing_href() {
		let node = crate::normalize::normalize(serde_json::json!({
			"href": "http://api.netflix.com/catalog/titles/movies/1/discs",
			"rel": "http://schemas.netflix.com/catalog/titles.discs",
			"title": "discs",
		}))
		.expect("Link object should normalize.");
		let link = Link::from_node(node).expect("Link should build.");

		assert_eq!(link.key(), "discs");

		let node = crate::normalize::normalize(serde_json::json!({ "title": "discs", "rel": "x" }))
			.expect("Link object should normalize.");

		assert_eq!(
			Link::from_node(node),
			Err(PayloadError::MissingField { entity: ENTITY, field: "href" })
		);
	}
}
