//! Normalized JSON tree.

// crates.io
use serde_json::Number;
// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::{AtHome, Availability, CatalogTitle, Queue, RentalHistory, User},
};

/// JSON value after normalization: primitives and plain containers, plus the domain objects
/// the object hook produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
	/// `null`.
	Null,
	/// Boolean.
	Bool(bool),
	/// Number, kept exact.
	Number(Number),
	/// String.
	String(String),
	/// Array.
	List(Vec<Node>),
	/// Object that matched no domain shape.
	Map(BTreeMap<String, Node>),
	/// Catalog title.
	Title(Box<CatalogTitle>),
	/// Delivery-format availability.
	Availability(Availability),
	/// User profile.
	User(Box<User>),
	/// Rental history page.
	RentalHistory(RentalHistory),
	/// Queue page.
	Queue(Queue),
	/// At-home page.
	AtHome(AtHome),
}
impl Node {
	/// Coerces one-or-many into many: lists pass through, anything else becomes a
	/// one-element list.
	pub fn into_list(self) -> Vec<Node> {
		match self {
			Self::List(nodes) => nodes,
			other => vec![other],
		}
	}

	/// Borrows a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Reads a number, or a string holding one.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(n) => n.as_f64(),
			Self::String(s) => s.trim().parse().ok(),
			_ => None,
		}
	}

	/// Reads an integer, or a string holding one. Integral floats are accepted.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Number(n) => n.as_i64().or_else(|| {
				n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.).map(|f| f as i64)
			}),
			Self::String(s) => s.trim().parse().ok(),
			_ => None,
		}
	}

	/// Looks up a key of a plain object.
	pub fn get(&self, key: &str) -> Option<&Node> {
		match self {
			Self::Map(map) => map.get(key),
			_ => None,
		}
	}

	/// Converts text-like scalars (strings and numbers) into an owned string.
	pub fn into_text(self) -> Option<String> {
		match self {
			Self::String(s) => Some(s),
			Self::Number(n) => Some(n.to_string()),
			_ => None,
		}
	}

	/// Extracts titles from a search-style payload.
	///
	/// Accepts a list of titles, a single title, or an object; an object is a result page
	/// without a `catalog_title` entry and yields no titles.
	pub fn into_titles(self) -> Result<Vec<CatalogTitle>, PayloadError> {
		match self {
			Self::List(nodes) => nodes
				.into_iter()
				.map(|node| match node {
					Self::Title(title) => Ok(*title),
					other => CatalogTitle::from_node(other),
				})
				.collect(),
			Self::Title(title) => Ok(vec![*title]),
			Self::Map(_) => Ok(Vec::new()),
			_ => Err(shape("catalog titles", "a list of titles")),
		}
	}

	/// Extracts a single title.
	pub fn into_title(self) -> Result<CatalogTitle, PayloadError> {
		match self {
			Self::Title(title) => Ok(*title),
			Self::List(mut nodes) if nodes.len() == 1 => nodes.remove(0).into_title(),
			_ => Err(shape("catalog title", "a title")),
		}
	}

	/// Extracts a user profile.
	pub fn into_user(self) -> Result<User, PayloadError> {
		match self {
			Self::User(user) => Ok(*user),
			_ => Err(shape("user", "a user")),
		}
	}

	/// Extracts a queue page.
	pub fn into_queue(self) -> Result<Queue, PayloadError> {
		match self {
			Self::Queue(queue) => Ok(queue),
			_ => Err(shape("queue", "a queue")),
		}
	}

	/// Extracts a rental history page.
	pub fn into_rental_history(self) -> Result<RentalHistory, PayloadError> {
		match self {
			Self::RentalHistory(history) => Ok(history),
			_ => Err(shape("rental history", "a rental history")),
		}
	}

	/// Extracts an at-home page.
	pub fn into_at_home(self) -> Result<AtHome, PayloadError> {
		match self {
			Self::AtHome(at_home) => Ok(at_home),
			_ => Err(shape("at home", "an at-home list")),
		}
	}

	/// Extracts delivery-format availabilities.
	pub fn into_availabilities(self) -> Result<Vec<Availability>, PayloadError> {
		self.into_list()
			.into_iter()
			.map(|node| match node {
				Self::Availability(availability) => Ok(availability),
				_ => Err(shape("availability", "an availability")),
			})
			.collect()
	}
}
impl From<serde_json::Value> for Node {
	/// Plain conversion without the object hook.
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => Self::Number(n),
			Value::String(s) => Self::String(s),
			Value::Array(values) => Self::List(values.into_iter().map(Self::from).collect()),
			Value::Object(map) =>
				Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
		}
	}
}

fn shape(entity: &'static str, expected: &'static str) -> PayloadError {
	PayloadError::UnexpectedShape { entity, field: "<root>", expected }
}
