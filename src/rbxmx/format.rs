use crate::rbxmx::value::{Color3, DecodedValue, FontFace, UDim, UDim2, Vector2};

/// Quote and escape text as a Luau string literal.
pub fn lua_string(text: &str) -> String {
	let mut out = String::with_capacity(text.len() + 2);
	out.push('"');
	for ch in text.chars() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_control() && (c as u32) < 0x80 => out.push_str(&format!("\\{:03}", c as u32)),
			c => out.push(c),
		}
	}
	out.push('"');
	out
}

/// Render a number as a Luau literal.
pub fn lua_number(value: f64) -> String {
	if value.is_nan() {
		return "0/0".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "math.huge".to_owned() } else { "-math.huge".to_owned() };
	}
	if value.fract() == 0.0 && value.abs() < 1e15 {
		return format!("{}", value as i64);
	}
	format!("{value}")
}

/// Right-hand side expression for a decoded value; `None` for omitted values.
pub fn lua_value(value: &DecodedValue) -> Option<String> {
	let text = match value {
		DecodedValue::String(text) => lua_string(text),
		DecodedValue::Bool(flag) => flag.to_string(),
		DecodedValue::Int(number) => number.to_string(),
		DecodedValue::Float(number) => lua_number(*number),
		DecodedValue::Color(color) => lua_color(*color),
		DecodedValue::Vector2(vector) => lua_vector2(*vector),
		DecodedValue::Vector3(vector) => format!("Vector3.new({}, {}, {})", lua_number(vector.x), lua_number(vector.y), lua_number(vector.z)),
		DecodedValue::UDim(udim) => lua_udim(*udim),
		DecodedValue::UDim2(udim2) => lua_udim2(*udim2),
		DecodedValue::Rect(rect) => format!(
			"Rect.new({}, {}, {}, {})",
			lua_number(rect.min.x),
			lua_number(rect.min.y),
			lua_number(rect.max.x),
			lua_number(rect.max.y)
		),
		DecodedValue::EnumToken { raw, resolved } => resolved.clone().unwrap_or_else(|| raw.to_string()),
		DecodedValue::Font(font) => lua_font(font),
		DecodedValue::ContentRef(url) => lua_string(url),
		DecodedValue::NumberSequence(number) => format!("NumberSequence.new({})", lua_number(*number)),
		DecodedValue::ColorSequence(color) => format!("ColorSequence.new({})", lua_color(*color)),
		DecodedValue::NumberRange { min, max } => format!("NumberRange.new({}, {})", lua_number(*min), lua_number(*max)),
		DecodedValue::BrickColor(number) => format!("BrickColor.new({number})"),
		DecodedValue::Omitted(_) => return None,
	};
	Some(text)
}

/// `Color3.fromRGB` for byte-aligned colours, `Color3.new` otherwise.
pub fn lua_color(color: Color3) -> String {
	match color.as_rgb_bytes() {
		Some([r, g, b]) => format!("Color3.fromRGB({r}, {g}, {b})"),
		None => format!("Color3.new({}, {}, {})", lua_number(color.r), lua_number(color.g), lua_number(color.b)),
	}
}

/// `Vector2.new(x, y)`
pub fn lua_vector2(vector: Vector2) -> String {
	format!("Vector2.new({}, {})", lua_number(vector.x), lua_number(vector.y))
}

/// `UDim.new(scale, offset)`
pub fn lua_udim(udim: UDim) -> String {
	format!("UDim.new({}, {})", lua_number(udim.scale), lua_number(udim.offset))
}

/// `UDim2.new(xScale, xOffset, yScale, yOffset)`
pub fn lua_udim2(udim2: UDim2) -> String {
	format!(
		"UDim2.new({}, {}, {}, {})",
		lua_number(udim2.x.scale),
		lua_number(udim2.x.offset),
		lua_number(udim2.y.scale),
		lua_number(udim2.y.offset)
	)
}

fn lua_font(font: &FontFace) -> String {
	let weight = if is_identifier(&font.weight) { font.weight.as_str() } else { "Regular" };
	let style = if is_identifier(&font.style) { font.style.as_str() } else { "Normal" };
	format!("Font.new({}, Enum.FontWeight.{weight}, Enum.FontStyle.{style})", lua_string(&font.family))
}

fn is_identifier(text: &str) -> bool {
	let mut chars = text.chars();
	matches!(chars.next(), Some(first) if first.is_ascii_alphabetic() || first == '_') && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests;
