//! Subscriber profile.

// self
use crate::{
	_prelude::*,
	error::PayloadError,
	model::{Category, Fields, Link},
	normalize::Node,
};

const ENTITY: &str = "user";

/// Profile of the authorized user.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
	/// First name.
	pub first_name: Option<String>,
	/// Last name.
	pub last_name: Option<String>,
	/// API-assigned user identifier.
	pub user_id: Option<String>,
	/// Formats the user prefers, most preferred first.
	pub preferred_formats: Vec<Category>,
	/// Links keyed by their title (queues, rental history, at home, ...).
	pub links: BTreeMap<String, Link>,
	/// Passthrough fields.
	pub extra: BTreeMap<String, Node>,
}
impl User {
	pub(crate) fn from_node(node: Node) -> Result<Self, PayloadError> {
		let mut fields = Fields::from_node(ENTITY, node)?;
		let preferred_formats = fields
			.require("preferred_formats")?
			.into_list()
			.into_iter()
			.map(preferred_format)
			.collect::<Result<_, _>>()?;

		Ok(Self {
			first_name: fields.take_text("first_name"),
			last_name: fields.take_text("last_name"),
			user_id: fields.take_text("user_id"),
			preferred_formats,
			links: fields.take_links()?,
			extra: fields.into_extra(),
		})
	}
}
impl Display for User {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match (&self.first_name, &self.last_name) {
			(Some(first), Some(last)) => write!(f, "{first} {last}"),
			(Some(name), None) | (None, Some(name)) => f.write_str(name),
			(None, None) => f.write_str(self.user_id.as_deref().unwrap_or_default()),
		}
	}
}

/// Entries arrive wrapped as `{category: {...}}`; a bare category object is accepted too.
fn preferred_format(node: Node) -> Result<Category, PayloadError> {
	match node {
		Node::Map(mut map) => match map.remove("category") {
			Some(category) => Category::from_node(category),
			None => Category::from_node(Node::Map(map)),
		},
		other => Category::from_node(other),
	}
}
