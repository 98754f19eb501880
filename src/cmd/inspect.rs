use std::path::PathBuf;

use rbxlua::rbxmx::{BoundsScope, ConversionConfig, DecodedValue, Document, EnumTable, LayoutBounds, Node, OmitReason, Result, compute_bounds, lua_value, parse_document};

use crate::cmd::util::{emit_json, read_model};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "bounds-scope", default_value_t = BoundsScope::TopLevel)]
	pub bounds_scope: BoundsScope,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Print the decoded instance tree with per-property values or omission reasons.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		bounds_scope,
		max_depth,
		json,
	} = args;

	let xml = read_model(&file)?;
	let max_depth = max_depth.unwrap_or(ConversionConfig::default().max_depth).max(1);
	let document = parse_document(&xml, EnumTable::builtin(), max_depth)?;
	let bounds = compute_bounds(&document, bounds_scope);

	if json {
		return emit_json(&InspectJson {
			path: file.display().to_string(),
			node_count: document.node_count(),
			bounds_scope,
			bounds,
			document: &document,
		});
	}

	println!("path: {}", file.display());
	println!("node_count: {}", document.node_count());
	println!(
		"bounds ({bounds_scope}): min=({}, {}) size=({}, {})",
		bounds.min_x, bounds.min_y, bounds.width, bounds.height
	);
	for root in &document.roots {
		print_node(root, 0);
	}
	Ok(())
}

fn print_node(node: &Node, indent: usize) {
	let pad = "  ".repeat(indent);
	match node.name() {
		Some(name) => println!("{pad}{} {name:?}", node.class),
		None => println!("{pad}{}", node.class),
	}
	for (property, value) in &node.properties {
		println!("{pad}  .{property}: {}", describe_value(value));
	}
	for child in &node.children {
		print_node(child, indent + 1);
	}
}

fn describe_value(value: &DecodedValue) -> String {
	match value {
		DecodedValue::Omitted(reason) => format!("<omitted: {}>", describe_omission(reason)),
		other => match lua_value(other) {
			Some(rendered) => format!("{} = {rendered}", other.kind_name()),
			None => other.kind_name().to_owned(),
		},
	}
}

fn describe_omission(reason: &OmitReason) -> String {
	match reason {
		OmitReason::Excluded => "excluded".to_owned(),
		OmitReason::NullReference => "object reference".to_owned(),
		OmitReason::EmptyContent => "empty content".to_owned(),
		OmitReason::Unsupported { tag } => format!("unsupported {tag}"),
		OmitReason::Malformed { detail } => format!("malformed: {detail}"),
	}
}

#[derive(serde::Serialize)]
struct InspectJson<'a> {
	path: String,
	node_count: usize,
	bounds_scope: BoundsScope,
	bounds: LayoutBounds,
	#[serde(flatten)]
	document: &'a Document,
}

#[cfg(test)]
mod tests;
