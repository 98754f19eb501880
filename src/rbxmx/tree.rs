use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::rbxmx::value::{DecodedValue, OmitReason, UDim2};
use crate::rbxmx::{EnumTable, RbxError, Result, decode_value};

const SCREEN_GUI_CLASS: &str = "ScreenGui";

/// Properties never restated by generated code.
pub const EXCLUDED_PROPERTIES: [&str; 3] = ["Parent", "Archivable", "RobloxLocked"];

/// One decoded instance with its properties and children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
	/// Instance class name.
	pub class: String,
	/// Decoded properties in document order.
	pub properties: IndexMap<String, DecodedValue>,
	/// Child instances in document order.
	pub children: Vec<Node>,
}

impl Node {
	/// Node with no properties or children.
	pub fn new(class: impl Into<String>) -> Self {
		Self {
			class: class.into(),
			properties: IndexMap::new(),
			children: Vec::new(),
		}
	}

	/// Value of the `Name` string property.
	pub fn name(&self) -> Option<&str> {
		match self.properties.get("Name") {
			Some(DecodedValue::String(name)) => Some(name.as_str()),
			_ => None,
		}
	}

	/// Decoded `UDim2` property by name.
	pub fn udim2(&self, property: &str) -> Option<UDim2> {
		match self.properties.get(property) {
			Some(DecodedValue::UDim2(value)) => Some(*value),
			_ => None,
		}
	}

	/// Whether this node has a `Size` and so takes part in layout.
	pub fn is_sizable(&self) -> bool {
		self.udim2("Size").is_some()
	}

	/// Number of nodes in this subtree, including `self`.
	pub fn subtree_len(&self) -> usize {
		1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
	}
}

/// Parsed document: the top-level instances under `<roblox>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
	/// Top-level nodes in document order.
	pub roots: Vec<Node>,
}

impl Document {
	/// Total number of nodes across all roots.
	pub fn node_count(&self) -> usize {
		self.roots.iter().map(Node::subtree_len).sum()
	}

	/// Replace each top-level `ScreenGui` with its children.
	///
	/// The generated script supplies its own `ScreenGui`; a nested one under the
	/// container frame would never render.
	pub fn unwrap_screen_guis(self) -> Self {
		let mut roots = Vec::with_capacity(self.roots.len());
		for root in self.roots {
			if root.class == SCREEN_GUI_CLASS {
				warn!(name = root.name().unwrap_or_default(), children = root.children.len(), "unwrapping top-level ScreenGui");
				roots.extend(root.children);
			} else {
				roots.push(root);
			}
		}
		Self { roots }
	}
}

/// Parse RBXMX text into a [`Document`].
///
/// Fails on XML syntax errors, on item nesting deeper than `max_depth`, and
/// when the root holds no classed items.
pub fn parse_document(xml: &str, enums: &EnumTable, max_depth: u32) -> Result<Document> {
	let document = roxmltree::Document::parse(xml)?;
	let root = document.root_element();
	if root.tag_name().name() != "roblox" {
		warn!(root = root.tag_name().name(), "document root is not <roblox>");
	}

	let mut roots = Vec::new();
	for item in root.children().filter(|node| is_item(*node)) {
		if let Some(node) = build_node(item, enums, 0, max_depth)? {
			roots.push(node);
		}
	}

	if roots.is_empty() {
		return Err(RbxError::NoItems);
	}
	Ok(Document { roots })
}

/// Build a node from one `<Item>` element; class-less items yield `None`.
pub fn build_node(item: roxmltree::Node<'_, '_>, enums: &EnumTable, depth: u32, max_depth: u32) -> Result<Option<Node>> {
	if depth >= max_depth {
		return Err(RbxError::DepthExceeded { max_depth });
	}

	let Some(class) = item.attribute("class").map(str::trim).filter(|class| !class.is_empty()) else {
		debug!(referent = item.attribute("referent"), "skipping item without class");
		return Ok(None);
	};

	let mut node = Node::new(class);
	if let Some(properties) = item.children().find(|child| child.is_element() && child.tag_name().name() == "Properties") {
		for element in properties.children().filter(|child| child.is_element()) {
			let Some(name) = element.attribute("name") else {
				debug!(class, tag = element.tag_name().name(), "skipping property without name");
				continue;
			};
			let value = if EXCLUDED_PROPERTIES.contains(&name) {
				DecodedValue::Omitted(OmitReason::Excluded)
			} else {
				decode_value(name, element, enums)
			};
			if let DecodedValue::Omitted(reason) = &value {
				debug!(class, property = name, ?reason, "property omitted");
			}
			node.properties.insert(name.to_owned(), value);
		}
	}

	for child in item.children().filter(|child| is_item(*child)) {
		if let Some(built) = build_node(child, enums, depth + 1, max_depth)? {
			node.children.push(built);
		}
	}

	Ok(Some(node))
}

fn is_item(node: roxmltree::Node<'_, '_>) -> bool {
	node.is_element() && node.tag_name().name() == "Item"
}
