use tracing::debug;

use crate::rbxmx::behavior::{DRAG_LOCALS, INPUT_SERVICE_VAR, destroy_key_block, drag_block, input_service_line};
use crate::rbxmx::format::{lua_number, lua_string, lua_udim, lua_udim2, lua_value, lua_vector2};
use crate::rbxmx::value::{DecodedValue, UDim2};
use crate::rbxmx::{ConversionConfig, Document, IdentAllocator, Layout, Node};

/// Local holding the generated `ScreenGui`.
pub const SCREEN_GUI_VAR: &str = "screenGui";
/// Local holding the top-level container frame.
pub const CONTAINER_VAR: &str = "container";

const PREAMBLE_VARS: [&str; 3] = ["Players", "player", "playerGui"];

/// Per-call output buffer, identifier allocator, and draw-order counter.
#[derive(Debug)]
pub struct EmitterState {
	lines: Vec<String>,
	idents: IdentAllocator,
	draw_order: u32,
}

impl EmitterState {
	/// Fresh state with preamble and behaviour names reserved.
	pub fn new() -> Self {
		let mut idents = IdentAllocator::new();
		for name in PREAMBLE_VARS.into_iter().chain([SCREEN_GUI_VAR, CONTAINER_VAR, INPUT_SERVICE_VAR]).chain(DRAG_LOCALS) {
			idents.reserve(name);
		}
		Self {
			lines: Vec::new(),
			idents,
			draw_order: 0,
		}
	}

	fn push(&mut self, line: impl Into<String>) {
		self.lines.push(line.into());
	}

	fn next_draw_order(&mut self) -> u32 {
		self.draw_order += 1;
		self.draw_order
	}

	/// Emitted lines so far.
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// Join the buffer into script text.
	pub fn finish(self) -> String {
		let mut out = self.lines.join("\n");
		out.push('\n');
		out
	}
}

impl Default for EmitterState {
	fn default() -> Self {
		Self::new()
	}
}

/// Pre-order Luau writer for one document.
pub struct Emitter<'a> {
	config: &'a ConversionConfig,
	layout: Layout,
	state: EmitterState,
}

impl<'a> Emitter<'a> {
	/// Emitter for `config` using precomputed `layout`.
	pub fn new(config: &'a ConversionConfig, layout: Layout) -> Self {
		Self {
			config,
			layout,
			state: EmitterState::new(),
		}
	}

	/// Emit the full script for `document`.
	pub fn emit_document(mut self, document: &Document) -> String {
		self.emit_preamble(document);
		for root in &document.roots {
			self.emit_node(root, CONTAINER_VAR, 0);
		}
		self.emit_behaviors();
		self.state.finish()
	}

	fn emit_preamble(&mut self, document: &Document) {
		let [players, player, player_gui] = PREAMBLE_VARS;
		let size = self.layout.container_size();
		let anchor = self.layout.container_anchor();
		let position = self.layout.container_position();

		self.state.push("-- Generated by rbxlua from an RBXMX model");
		self.state.push(format!("-- Instances: {}", document.node_count()));
		self.state.push(format!("local {players} = game:GetService(\"Players\")"));
		self.state.push(format!("local {player} = {players}.LocalPlayer"));
		self.state.push(format!("local {player_gui} = {player}:WaitForChild(\"PlayerGui\")"));
		self.state.push("");

		self.state.push(format!("local {SCREEN_GUI_VAR} = Instance.new(\"ScreenGui\")"));
		self.state.push(format!("{SCREEN_GUI_VAR}.Name = {}", lua_string(&self.config.display_name)));
		self.state.push(format!("{SCREEN_GUI_VAR}.ResetOnSpawn = false"));
		self.state.push(format!("{SCREEN_GUI_VAR}.ZIndexBehavior = Enum.ZIndexBehavior.Sibling"));
		self.state.push(format!("{SCREEN_GUI_VAR}.Parent = {player_gui}"));
		self.state.push("");

		self.state.push(format!("local {CONTAINER_VAR} = Instance.new(\"Frame\")"));
		self.state.push(format!("{CONTAINER_VAR}.Name = \"Container\""));
		self.state.push(format!("{CONTAINER_VAR}.BackgroundTransparency = 1"));
		self.state.push(format!("{CONTAINER_VAR}.BorderSizePixel = 0"));
		self.state.push(format!("{CONTAINER_VAR}.AnchorPoint = {}", lua_vector2(anchor)));
		self.state.push(format!("{CONTAINER_VAR}.Position = {}", lua_udim2(position)));
		self.state.push(format!("{CONTAINER_VAR}.Size = {}", lua_udim2(size)));
		if self.config.draggable {
			self.state.push(format!("{CONTAINER_VAR}.Active = true"));
		}
		self.state.push(format!("{CONTAINER_VAR}.Parent = {SCREEN_GUI_VAR}"));
		self.state.push("");
	}

	/// Emit `node` inside its own `do ... end` block so only the ancestor chain holds live locals.
	fn emit_node(&mut self, node: &Node, parent: &str, depth: usize) {
		let outer = "\t".repeat(depth);
		let pad = "\t".repeat(depth + 1);
		let top_level = depth == 0;

		self.state.push(format!("{outer}do"));
		let var = self.state.idents.allocate(node.name(), &node.class);
		self.state.push(format!("{pad}local {var} = Instance.new({})", lua_string(&node.class)));

		let sizable = node.is_sizable();
		let mut wrote_position = false;
		for (name, value) in &node.properties {
			if !value.is_present() || (sizable && name == "ZIndex") {
				continue;
			}
			let rendered = if top_level && name == "Position"
				&& let DecodedValue::UDim2(position) = value
			{
				wrote_position = true;
				Some(lua_udim2(self.layout.normalize_position(*position)))
			} else {
				self.render_property(name, value)
			};

			match rendered {
				Some(rendered) => self.state.push(format!("{pad}{} = {rendered}", property_target(&var, name))),
				None => debug!(class = node.class.as_str(), property = name.as_str(), "no assignment emitted"),
			}
		}

		if top_level && sizable && !wrote_position {
			let position = self.layout.normalize_position(UDim2::default());
			if position != UDim2::default() {
				self.state.push(format!("{pad}{var}.Position = {}", lua_udim2(position)));
			}
		}
		if sizable {
			let order = self.state.next_draw_order();
			self.state.push(format!("{pad}{var}.ZIndex = {order}"));
		}

		self.state.push(format!("{pad}{var}.Parent = {parent}"));

		for child in &node.children {
			self.emit_node(child, &var, depth + 1);
		}
		self.state.push(format!("{outer}end"));
		if top_level {
			self.state.push("");
		}
	}

	fn render_property(&self, name: &str, value: &DecodedValue) -> Option<String> {
		if name == "BackgroundTransparency"
			&& let Some(transparency) = self.config.transparency_override
			&& matches!(value, DecodedValue::Float(_) | DecodedValue::Int(_))
		{
			return Some(lua_number(transparency));
		}
		match value {
			DecodedValue::UDim2(udim2) => Some(lua_udim2(self.layout.scale_udim2(*udim2))),
			DecodedValue::UDim(udim) => Some(lua_udim(udim.scale_offset(self.layout.scale))),
			other => lua_value(other),
		}
	}

	fn emit_behaviors(&mut self) {
		let key_code = self.config.destroy_key.key_code();
		if !self.config.draggable && key_code.is_none() {
			return;
		}

		self.state.push(input_service_line());
		self.state.push("");
		if self.config.draggable {
			for line in drag_block(CONTAINER_VAR) {
				self.state.push(line);
			}
			self.state.push("");
		}
		if let Some(key_code) = key_code {
			for line in destroy_key_block(key_code, SCREEN_GUI_VAR) {
				self.state.push(line);
			}
			self.state.push("");
		}
	}
}

fn property_target(var: &str, property: &str) -> String {
	let plain = property.starts_with(|ch: char| ch.is_ascii_alphabetic() || ch == '_') && property.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
	if plain { format!("{var}.{property}") } else { format!("{var}[{}]", lua_string(property)) }
}

#[cfg(test)]
mod tests;
