use serde::Serialize;

/// Decoded property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DecodedValue {
	/// Plain or protected string, unescaped.
	String(String),
	/// Boolean flag.
	Bool(bool),
	/// 32- or 64-bit integer.
	Int(i64),
	/// Single- or double-precision float.
	Float(f64),
	/// RGB colour with components in `0.0..=1.0`.
	Color(Color3),
	/// Two-component vector.
	Vector2(Vector2),
	/// Three-component vector.
	Vector3(Vector3),
	/// One-axis scale/offset pair.
	UDim(UDim),
	/// Two-axis scale/offset pairs.
	UDim2(UDim2),
	/// Axis-aligned rectangle.
	Rect(Rect),
	/// Integer enum token and its resolved member, if known.
	EnumToken {
		/// Raw token value from the document.
		raw: i64,
		/// Qualified member name such as `Enum.BorderMode.Inset`.
		resolved: Option<String>,
	},
	/// Font face description.
	Font(FontFace),
	/// Asset URL.
	ContentRef(String),
	/// Number sequence reduced to its first keypoint value.
	NumberSequence(f64),
	/// Colour sequence reduced to its first keypoint colour.
	ColorSequence(Color3),
	/// Inclusive numeric range.
	NumberRange {
		/// Lower bound.
		min: f64,
		/// Upper bound.
		max: f64,
	},
	/// Legacy palette colour number.
	BrickColor(i64),
	/// Value that is never emitted.
	Omitted(OmitReason),
}

impl DecodedValue {
	/// Whether this value produces an assignment statement.
	pub fn is_present(&self) -> bool {
		!matches!(self, Self::Omitted(_))
	}

	/// Short lowercase label for the value kind.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::String(_) => "string",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Color(_) => "color",
			Self::Vector2(_) => "vector2",
			Self::Vector3(_) => "vector3",
			Self::UDim(_) => "udim",
			Self::UDim2(_) => "udim2",
			Self::Rect(_) => "rect",
			Self::EnumToken { .. } => "enum",
			Self::Font(_) => "font",
			Self::ContentRef(_) => "content",
			Self::NumberSequence(_) => "number_sequence",
			Self::ColorSequence(_) => "color_sequence",
			Self::NumberRange { .. } => "number_range",
			Self::BrickColor(_) => "brick_color",
			Self::Omitted(_) => "omitted",
		}
	}
}

/// Why a property was not turned into an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum OmitReason {
	/// Property name is in the fixed exclusion set.
	Excluded,
	/// Object reference; targets are not reconstructed.
	NullReference,
	/// Content element without a usable URL.
	EmptyContent,
	/// Value kind the decoder does not translate.
	Unsupported {
		/// XML tag of the value element.
		tag: String,
	},
	/// Value text could not be parsed for its kind.
	Malformed {
		/// Human-readable parse failure.
		detail: String,
	},
}

/// RGB colour with normalized components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color3 {
	/// Red channel.
	pub r: f64,
	/// Green channel.
	pub g: f64,
	/// Blue channel.
	pub b: f64,
}

impl Color3 {
	/// White, used when a sequence has no keypoints.
	pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

	/// Unpack a `0x[AA]RRGGBB` integer; any alpha byte is ignored.
	pub fn from_packed(packed: u32) -> Self {
		let [_, r, g, b] = packed.to_be_bytes();
		Self {
			r: f64::from(r) / 255.0,
			g: f64::from(g) / 255.0,
			b: f64::from(b) / 255.0,
		}
	}

	/// Byte channels when every component sits exactly on the 1/255 grid.
	pub fn as_rgb_bytes(&self) -> Option<[u8; 3]> {
		let mut out = [0_u8; 3];
		for (slot, component) in out.iter_mut().zip([self.r, self.g, self.b]) {
			let scaled = component * 255.0;
			let rounded = scaled.round();
			if !(0.0..=255.0).contains(&rounded) || (scaled - rounded).abs() > 1e-6 {
				return None;
			}
			*slot = rounded as u8;
		}
		Some(out)
	}
}

/// Two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector2 {
	/// X component.
	pub x: f64,
	/// Y component.
	pub y: f64,
}

/// Three-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector3 {
	/// X component.
	pub x: f64,
	/// Y component.
	pub y: f64,
	/// Z component.
	pub z: f64,
}

/// Fraction of parent size plus absolute pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct UDim {
	/// Fraction of the parent extent.
	pub scale: f64,
	/// Pixel offset.
	pub offset: f64,
}

impl UDim {
	/// Multiply the pixel offset by `factor`, flooring to whole pixels.
	pub fn scale_offset(self, factor: f64) -> Self {
		Self {
			scale: self.scale,
			offset: (self.offset * factor).floor(),
		}
	}
}

/// Two-axis [`UDim`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct UDim2 {
	/// Horizontal axis.
	pub x: UDim,
	/// Vertical axis.
	pub y: UDim,
}

impl UDim2 {
	/// Build from the four scalar components.
	pub fn new(x_scale: f64, x_offset: f64, y_scale: f64, y_offset: f64) -> Self {
		Self {
			x: UDim { scale: x_scale, offset: x_offset },
			y: UDim { scale: y_scale, offset: y_offset },
		}
	}

	/// Multiply both pixel offsets by `factor`, flooring to whole pixels.
	pub fn scale_offsets(self, factor: f64) -> Self {
		Self {
			x: self.x.scale_offset(factor),
			y: self.y.scale_offset(factor),
		}
	}

	/// Shift both pixel offsets by `(dx, dy)`.
	pub fn translate(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x.scale, self.x.offset + dx, self.y.scale, self.y.offset + dy)
	}
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
	/// Minimum corner.
	pub min: Vector2,
	/// Maximum corner.
	pub max: Vector2,
}

/// Font face reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFace {
	/// Family asset URL.
	pub family: String,
	/// `Enum.FontWeight` member name.
	pub weight: String,
	/// `Enum.FontStyle` member name.
	pub style: String,
}
