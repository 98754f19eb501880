use std::collections::HashSet;

const LUA_KEYWORDS: [&str; 23] = [
	"and", "break", "continue", "do", "else", "elseif", "end", "export", "false", "for", "function", "if", "in", "local", "nil", "not", "or",
	"repeat", "return", "then", "true", "type", "until",
];

const LUAU_GLOBALS: [&str; 33] = [
	"game", "workspace", "script", "plugin", "shared", "_G", "Instance", "Enum", "UDim", "UDim2", "Vector2", "Vector3", "Color3", "Rect",
	"Font", "BrickColor", "NumberSequence", "ColorSequence", "NumberRange", "CFrame", "TweenInfo", "math", "string", "table", "task",
	"print", "warn", "error", "pcall", "typeof", "tostring", "tonumber", "self",
];

/// Hands out unique Luau local names.
#[derive(Debug)]
pub struct IdentAllocator {
	taken: HashSet<String>,
}

impl IdentAllocator {
	/// Allocator that never shadows Luau builtins used by generated code.
	pub fn new() -> Self {
		Self::with_reserved(LUAU_GLOBALS)
	}

	/// Allocator with `reserved` names already taken.
	pub fn with_reserved<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
		let mut out = Self { taken: HashSet::new() };
		for name in reserved {
			out.taken.insert(name.to_owned());
		}
		out
	}

	/// Whether `name` is already handed out or reserved.
	pub fn is_taken(&self, name: &str) -> bool {
		self.taken.contains(name)
	}

	/// Mark `name` as taken.
	pub fn reserve(&mut self, name: &str) {
		self.taken.insert(name.to_owned());
	}

	/// Unique identifier derived from `display_name`, or from `class` when the name sanitizes to nothing.
	pub fn allocate(&mut self, display_name: Option<&str>, class: &str) -> String {
		let base = display_name
			.map(sanitize_identifier)
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| fallback_name(class));

		if self.taken.insert(base.clone()) {
			return base;
		}
		let mut suffix = 2_usize;
		loop {
			let candidate = format!("{base}_{suffix}");
			if self.taken.insert(candidate.clone()) {
				return candidate;
			}
			suffix += 1;
		}
	}
}

impl Default for IdentAllocator {
	fn default() -> Self {
		Self::new()
	}
}

/// Reduce arbitrary text to a valid Luau identifier; empty when nothing usable remains.
pub fn sanitize_identifier(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut pending_sep = false;
	for ch in text.chars() {
		if ch.is_ascii_alphanumeric() {
			if pending_sep && !out.is_empty() {
				out.push('_');
			}
			pending_sep = false;
			out.push(ch);
		} else if ch == '_' {
			out.push('_');
			pending_sep = false;
		} else {
			pending_sep = true;
		}
	}

	if out.chars().all(|ch| ch == '_') {
		return String::new();
	}
	if out.starts_with(|ch: char| ch.is_ascii_digit()) {
		out.insert(0, '_');
	}
	if LUA_KEYWORDS.contains(&out.as_str()) {
		out.push('_');
	}
	out
}

fn fallback_name(class: &str) -> String {
	let name = sanitize_identifier(&class.to_ascii_lowercase());
	if name.is_empty() { "instance".to_owned() } else { name }
}

#[cfg(test)]
mod tests;
