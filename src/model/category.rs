//! Categories and delivery-format availability windows.

// std
use std::{
	cmp::Ordering,
	hash::{Hash, Hasher},
	ops::Deref,
};
// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::Fields,
	normalize::Node,
};

const CATEGORY: &str = "category";
const AVAILABILITY: &str = "availability";

/// Catalog category (genre, MPAA rating, delivery format, ...). Its primary value is
/// [`term`](Self::term).
///
/// Serializes as exactly its four constructor fields so values survive caches and process
/// boundaries unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
	/// Category term, e.g. `HBO` or `DVD`.
	pub term: String,
	/// Scheme URI the term belongs to.
	pub scheme: Option<String>,
	/// Display label.
	pub label: Option<String>,
	/// Free-form content.
	pub content: Option<String>,
}
impl Category {
	/// Creates a category with only a term.
	pub fn new(term: impl Into<String>) -> Self {
		Self { term: term.into(), scheme: None, label: None, content: None }
	}

	/// Returns the term.
	pub fn as_str(&self) -> &str {
		&self.term
	}

	pub(crate) fn from_node(node: Node) -> Result<Self, PayloadError> {
		if let Node::String(term) = node {
			return Ok(Self::new(term));
		}

		let mut fields = Fields::from_node(CATEGORY, node)?;

		Ok(Self {
			term: fields.require_text("term")?,
			scheme: fields.take_text("scheme"),
			label: fields.take_text("label"),
			content: fields.take_text("content"),
		})
	}
}
impl PartialEq for Category {
	fn eq(&self, other: &Self) -> bool {
		self.term == other.term
	}
}
impl Eq for Category {}
impl PartialEq<str> for Category {
	fn eq(&self, other: &str) -> bool {
		self.term == other
	}
}
impl PartialEq<&str> for Category {
	fn eq(&self, other: &&str) -> bool {
		self.term == *other
	}
}
impl PartialOrd for Category {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for Category {
	fn cmp(&self, other: &Self) -> Ordering {
		self.term.cmp(&other.term)
	}
}
impl Hash for Category {
	fn hash<H>(&self, state: &mut H)
	where
		H: Hasher,
	{
		self.term.hash(state);
	}
}
impl AsRef<str> for Category {
	fn as_ref(&self) -> &str {
		&self.term
	}
}
impl Display for Category {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.term)
	}
}

/// Delivery-format offering for a title, optionally bounded by an availability window.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Availability {
	/// Format category (`DVD`, `Blu-ray`, `instant`, ...).
	pub category: Category,
	/// Start of the window.
	#[serde(with = "time::serde::timestamp::option")]
	pub available_from: Option<OffsetDateTime>,
	/// End of the window.
	#[serde(with = "time::serde::timestamp::option")]
	pub available_until: Option<OffsetDateTime>,
	/// Always `false`: the API never reports a positive availability flag.
	pub available: bool,
}
impl Availability {
	/// Builds an availability from `{category, available_from?, available_until?}`, or from a
	/// bare term string.
	pub(crate) fn from_node(node: Node) -> Result<Self, PayloadError> {
		if let Node::String(term) = node {
			return Ok(Self {
				category: Category::new(term),
				available_from: None,
				available_until: None,
				available: false,
			});
		}

		let mut fields = Fields::from_node(AVAILABILITY, node)?;
		let category = Category::from_node(fields.require("category")?)?;
		let available_from = fields.take_timestamp("available_from");
		let available_until = fields.take_timestamp("available_until");

		Ok(Self { category, available_from, available_until, available: false })
	}
}
impl Deref for Availability {
	type Target = Category;

	fn deref(&self) -> &Self::Target {
		&self.category
	}
}
impl Display for Availability {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.category, f)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn category_round_trips_through_serde() {
		let hbo = Category::new("HBO");
		let encoded = serde_json::to_string(&hbo).expect("Category should serialize.");
		let decoded: Category = serde_json::from_str(&encoded).expect("Category should deserialize.");

		assert_eq!(decoded, hbo);
		assert_eq!(decoded.scheme, None);
		assert_eq!(decoded.label, None);
		assert_eq!(decoded.content, None);
		assert_eq!(decoded.to_string(), "HBO");
	}

	#[test]
	fn availability_reads_window_and_keeps_flag_false() {
		let node = crate::normalize::normalize(serde_json::json!({
			"available_from": "1202112000",
			"available_until": 1_234_567_890,
			"category": {
				"scheme": "http://api.netflix.com/categories/title_formats",
				"label": "instant",
				"term": "instant",
			},
		}))
		.expect("Availability object should normalize.");
		let availability = Availability::from_node(node).expect("Availability should build.");

		assert_eq!(availability.term, "instant");
		assert_eq!(
			availability.available_from.map(OffsetDateTime::unix_timestamp),
			Some(1_202_112_000)
		);
		assert_eq!(
			availability.available_until.map(OffsetDateTime::unix_timestamp),
			Some(1_234_567_890)
		);
		assert!(!availability.available);
	}

	#[test]
	fn availability_accepts_bare_term() {
		let availability =
			Availability::from_node(Node::String("DVD".into())).expect("Bare term should build.");

		assert_eq!(availability.to_string(), "DVD");
		assert!(availability.available_from.is_none());
	}
}
