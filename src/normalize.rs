//! Response normalizer: turns decoded JSON into a [`Node`] tree of domain objects.
//!
//! The API wraps results inconsistently: a one-result page may drop its array, scalar text
//! may arrive wrapped in a single-key object, and the same entity appears under different
//! envelopes. [`normalize`] walks the decoded value bottom-up and runs [`object_hook`] on
//! every object after its children, so a parent always sees already-built domain values.

mod node;

pub use node::*;

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::{AtHome, Availability, CatalogTitle, Queue, RentalHistory, User},
};

/// Decodes a success body and normalizes it.
pub fn decode(body: &[u8], status: u16) -> Result<Node> {
	let mut deserializer = serde_json::Deserializer::from_slice(body);
	let value = serde_path_to_error::deserialize::<_, Value>(&mut deserializer)
		.map_err(|source| Error::Decode { source, status })?;

	Ok(normalize(value)?)
}

/// Normalizes an already-decoded JSON value.
pub fn normalize(value: Value) -> Result<Node, PayloadError> {
	Ok(match value {
		Value::Array(values) =>
			Node::List(values.into_iter().map(normalize).collect::<Result<_, _>>()?),
		Value::Object(map) => object_hook(
			map.into_iter()
				.map(|(key, value)| normalize(value).map(|node| (key, node)))
				.collect::<Result<_, _>>()?,
		)?,
		scalar => Node::from(scalar),
	})
}

/// Maps one object (whose children are already normalized) to a domain value, or returns it
/// unchanged as [`Node::Map`]. The first matching rule wins; wrapper rules only apply when
/// the wrapper key is the object's sole key.
pub fn object_hook(mut map: BTreeMap<String, Node>) -> Result<Node, PayloadError> {
	if let Some(catalog_titles) = map.remove("catalog_titles") {
		return catalog_titles_page(catalog_titles);
	}

	let Some(key) = sole_key(&map) else {
		return Ok(Node::Map(map));
	};

	match key.as_str() {
		"catalog_title" => match take_sole(map) {
			Node::List(items) => titles(items),
			single => title_node(single),
		},
		"synopsis" => Ok(take_sole(map)),
		"delivery_formats"
			if map.get(&key).and_then(|formats| formats.get("availability")).is_some() =>
			availabilities(take_sole(map)),
		"user" => Ok(Node::User(Box::new(User::from_node(take_sole(map))?))),
		"rental_history" => Ok(Node::RentalHistory(RentalHistory::from_node(take_sole(map))?)),
		"at_home" => Ok(Node::AtHome(AtHome::from_node(take_sole(map))?)),
		"queue" => Ok(Node::Queue(Queue::from_node(take_sole(map))?)),
		_ => Ok(Node::Map(map)),
	}
}

/// Search pages carry their titles under `catalog_titles.catalog_title`; when that path is
/// missing the page itself is returned.
///
/// A page holding nothing but `catalog_title` was already folded by the inner walk, so it
/// arrives as a title or a list of titles.
fn catalog_titles_page(page: Node) -> Result<Node, PayloadError> {
	match page {
		Node::Map(mut page) => match page.remove("catalog_title") {
			Some(found) => titles(found.into_list()),
			None => Ok(Node::Map(page)),
		},
		title @ Node::Title(_) => Ok(Node::List(vec![title])),
		other => Ok(other),
	}
}

fn titles(items: Vec<Node>) -> Result<Node, PayloadError> {
	Ok(Node::List(items.into_iter().map(title_node).collect::<Result<_, _>>()?))
}

fn title_node(node: Node) -> Result<Node, PayloadError> {
	match node {
		Node::Title(_) => Ok(node),
		other => Ok(Node::Title(Box::new(CatalogTitle::from_node(other)?))),
	}
}

fn availabilities(formats: Node) -> Result<Node, PayloadError> {
	let items = match formats {
		Node::Map(mut formats) =>
			formats.remove("availability").map(Node::into_list).unwrap_or_default(),
		_ => Vec::new(),
	};

	Ok(Node::List(
		items
			.into_iter()
			.map(|node| Availability::from_node(node).map(Node::Availability))
			.collect::<Result<_, _>>()?,
	))
}

fn sole_key(map: &BTreeMap<String, Node>) -> Option<String> {
	match map.len() {
		1 => map.keys().next().cloned(),
		_ => None,
	}
}

fn take_sole(map: BTreeMap<String, Node>) -> Node {
	map.into_values().next().unwrap_or(Node::Null)
}
