use roxmltree::Node;

use crate::rbxmx::value::{Color3, DecodedValue, FontFace, OmitReason, Rect, UDim, UDim2, Vector2, Vector3};
use crate::rbxmx::EnumTable;

/// Family used when a font element carries no usable family URL.
pub const DEFAULT_FONT_FAMILY: &str = "rbxasset://fonts/families/SourceSansPro.json";

const DEFAULT_BRICK_COLOR: i64 = 194;

/// XML value element kinds understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// `<string>`
	String,
	/// `<ProtectedString>`
	ProtectedString,
	/// `<bool>`
	Bool,
	/// `<int>` / `<int64>`
	Int,
	/// `<float>` / `<double>`
	Float,
	/// `<token>`
	Token,
	/// `<Color3>` with `R`/`G`/`B` children.
	Color3,
	/// `<Color3uint8>` packed integer.
	Color3Packed,
	/// `<Vector2>`
	Vector2,
	/// `<Vector3>`
	Vector3,
	/// `<UDim>`
	UDim,
	/// `<UDim2>`
	UDim2,
	/// `<Rect2D>` / `<Rect>`
	Rect,
	/// `<Font>`
	Font,
	/// `<Content>`
	Content,
	/// `<Ref>`
	Ref,
	/// `<NumberSequence>`
	NumberSequence,
	/// `<ColorSequence>`
	ColorSequence,
	/// `<NumberRange>`
	NumberRange,
	/// `<BrickColor>`
	BrickColor,
	/// Any other tag.
	Unsupported,
}

impl ValueKind {
	/// Classify a value element tag name.
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"string" => Self::String,
			"ProtectedString" => Self::ProtectedString,
			"bool" => Self::Bool,
			"int" | "int64" => Self::Int,
			"float" | "double" => Self::Float,
			"token" => Self::Token,
			"Color3" => Self::Color3,
			"Color3uint8" => Self::Color3Packed,
			"Vector2" => Self::Vector2,
			"Vector3" => Self::Vector3,
			"UDim" => Self::UDim,
			"UDim2" => Self::UDim2,
			"Rect2D" | "Rect" => Self::Rect,
			"Font" => Self::Font,
			"Content" => Self::Content,
			"Ref" => Self::Ref,
			"NumberSequence" => Self::NumberSequence,
			"ColorSequence" => Self::ColorSequence,
			"NumberRange" => Self::NumberRange,
			"BrickColor" => Self::BrickColor,
			_ => Self::Unsupported,
		}
	}
}

type Decoded<T> = std::result::Result<T, String>;

/// Decode one property value element. Never fails; problems become [`DecodedValue::Omitted`].
pub fn decode_value(property: &str, element: Node<'_, '_>, enums: &EnumTable) -> DecodedValue {
	let tag = element.tag_name().name();
	let kind = ValueKind::from_tag(tag);
	match decode_kind(kind, property, element, enums) {
		Ok(value) => value,
		Err(detail) => DecodedValue::Omitted(OmitReason::Malformed { detail }),
	}
}

fn decode_kind(kind: ValueKind, property: &str, element: Node<'_, '_>, enums: &EnumTable) -> Decoded<DecodedValue> {
	let value = match kind {
		ValueKind::String | ValueKind::ProtectedString => DecodedValue::String(element_text(element)),
		ValueKind::Bool => DecodedValue::Bool(parse_bool(&element_text(element))?),
		ValueKind::Int => DecodedValue::Int(parse_int(&element_text(element))?),
		ValueKind::Float => DecodedValue::Float(parse_number(&element_text(element))?),
		ValueKind::Token => {
			let raw = parse_int(&element_text(element))?;
			DecodedValue::EnumToken {
				raw,
				resolved: enums.resolve(property, raw),
			}
		}
		ValueKind::Color3 => DecodedValue::Color(Color3 {
			r: child_number(element, "R")?,
			g: child_number(element, "G")?,
			b: child_number(element, "B")?,
		}),
		ValueKind::Color3Packed => {
			let packed = parse_int(&element_text(element))?;
			DecodedValue::Color(Color3::from_packed(packed as u32))
		}
		ValueKind::Vector2 => DecodedValue::Vector2(decode_vector2(Some(element))?),
		ValueKind::Vector3 => DecodedValue::Vector3(Vector3 {
			x: child_number(element, "X")?,
			y: child_number(element, "Y")?,
			z: child_number(element, "Z")?,
		}),
		ValueKind::UDim => DecodedValue::UDim(UDim {
			scale: child_number(element, "S")?,
			offset: child_number(element, "O")?,
		}),
		ValueKind::UDim2 => DecodedValue::UDim2(UDim2::new(
			child_number(element, "XS")?,
			child_number(element, "XO")?,
			child_number(element, "YS")?,
			child_number(element, "YO")?,
		)),
		ValueKind::Rect => DecodedValue::Rect(Rect {
			min: decode_vector2(child(element, "min"))?,
			max: decode_vector2(child(element, "max"))?,
		}),
		ValueKind::Font => DecodedValue::Font(decode_font(element)),
		ValueKind::Content => decode_content(element),
		ValueKind::Ref => DecodedValue::Omitted(OmitReason::NullReference),
		ValueKind::NumberSequence => {
			let numbers = parse_number_list(&element_text(element))?;
			let first = numbers.get(1).or(numbers.first()).copied().unwrap_or(0.0);
			DecodedValue::NumberSequence(first)
		}
		ValueKind::ColorSequence => {
			let numbers = parse_number_list(&element_text(element))?;
			let color = match numbers.get(1..4) {
				Some([r, g, b]) => Color3 { r: *r, g: *g, b: *b },
				_ => Color3::WHITE,
			};
			DecodedValue::ColorSequence(color)
		}
		ValueKind::NumberRange => {
			let numbers = parse_number_list(&element_text(element))?;
			let min = numbers.first().copied().unwrap_or(0.0);
			let max = numbers.get(1).copied().unwrap_or(min);
			DecodedValue::NumberRange { min, max }
		}
		ValueKind::BrickColor => {
			let text = element_text(element);
			let number = if text.trim().is_empty() { DEFAULT_BRICK_COLOR } else { parse_int(&text)? };
			DecodedValue::BrickColor(number)
		}
		ValueKind::Unsupported => DecodedValue::Omitted(OmitReason::Unsupported {
			tag: element.tag_name().name().to_owned(),
		}),
	};
	Ok(value)
}

fn decode_vector2(element: Option<Node<'_, '_>>) -> Decoded<Vector2> {
	let Some(element) = element else {
		return Ok(Vector2::default());
	};
	Ok(Vector2 {
		x: child_number(element, "X")?,
		y: child_number(element, "Y")?,
	})
}

fn decode_font(element: Node<'_, '_>) -> FontFace {
	let family = child(element, "Family")
		.and_then(|family| child(family, "url"))
		.map(element_text)
		.map(|url| url.trim().to_owned())
		.filter(|url| !url.is_empty())
		.unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_owned());
	let weight = child(element, "Weight")
		.map(element_text)
		.map(|raw| font_weight_name(raw.trim()))
		.unwrap_or_else(|| "Regular".to_owned());
	let style = child(element, "Style")
		.map(element_text)
		.map(|raw| raw.trim().to_owned())
		.filter(|raw| !raw.is_empty())
		.unwrap_or_else(|| "Normal".to_owned());

	FontFace { family, weight, style }
}

/// Map a numeric or named font weight to its `Enum.FontWeight` member.
pub fn font_weight_name(raw: &str) -> String {
	let named = match raw.parse::<u32>() {
		Ok(100) => "Thin",
		Ok(200) => "ExtraLight",
		Ok(300) => "Light",
		Ok(400) => "Regular",
		Ok(500) => "Medium",
		Ok(600) => "SemiBold",
		Ok(700) => "Bold",
		Ok(800) => "ExtraBold",
		Ok(900) => "Heavy",
		Ok(_) => "Regular",
		Err(_) if raw.is_empty() => "Regular",
		Err(_) => return raw.to_owned(),
	};
	named.to_owned()
}

fn decode_content(element: Node<'_, '_>) -> DecodedValue {
	if child(element, "null").is_some() {
		return DecodedValue::Omitted(OmitReason::EmptyContent);
	}
	let url = match child(element, "url") {
		Some(url) => element_text(url),
		None => element_text(element),
	};
	let url = url.trim();
	if url.is_empty() {
		DecodedValue::Omitted(OmitReason::EmptyContent)
	} else {
		DecodedValue::ContentRef(url.to_owned())
	}
}

fn child<'a, 'input>(element: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
	element.children().find(|node| node.is_element() && node.tag_name().name() == name)
}

fn element_text(element: Node<'_, '_>) -> String {
	element.children().filter(|node| node.is_text()).filter_map(|node| node.text()).collect()
}

fn child_number(element: Node<'_, '_>, name: &str) -> Decoded<f64> {
	match child(element, name) {
		Some(node) => parse_number(&element_text(node)),
		None => Ok(0.0),
	}
}

fn parse_number(text: &str) -> Decoded<f64> {
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return Ok(0.0);
	}
	trimmed.parse::<f64>().map_err(|_| format!("invalid number {trimmed:?}"))
}

fn parse_int(text: &str) -> Decoded<i64> {
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return Ok(0);
	}
	trimmed.parse::<i64>().map_err(|_| format!("invalid integer {trimmed:?}"))
}

fn parse_bool(text: &str) -> Decoded<bool> {
	let trimmed = text.trim();
	if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
		Ok(false)
	} else if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
		Ok(true)
	} else {
		Err(format!("invalid bool {trimmed:?}"))
	}
}

fn parse_number_list(text: &str) -> Decoded<Vec<f64>> {
	text.split_whitespace()
		.map(|item| item.parse::<f64>().map_err(|_| format!("invalid number {item:?}")))
		.collect()
}
