use std::collections::HashMap;
use std::sync::LazyLock;

/// Enum type and member names keyed by raw token value.
#[derive(Debug, Clone)]
pub struct EnumSpec {
	/// Enum type name, e.g. `BorderMode`.
	pub enum_name: &'static str,
	/// `(raw, member)` pairs.
	pub members: &'static [(i64, &'static str)],
}

/// Property-name keyed lookup from token values to qualified enum members.
#[derive(Debug, Clone, Default)]
pub struct EnumTable {
	by_property: HashMap<&'static str, EnumSpec>,
}

static BUILTIN: LazyLock<EnumTable> = LazyLock::new(EnumTable::build_builtin);

impl EnumTable {
	/// Shared table covering common GUI properties, built on first use.
	pub fn builtin() -> &'static EnumTable {
		&BUILTIN
	}

	/// Table with no mappings; every token stays numeric.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Register or replace the enum used for `property`.
	pub fn insert(&mut self, property: &'static str, enum_name: &'static str, members: &'static [(i64, &'static str)]) {
		self.by_property.insert(property, EnumSpec { enum_name, members });
	}

	/// Qualified member for `raw` on `property`, or `None` when unmapped.
	pub fn resolve(&self, property: &str, raw: i64) -> Option<String> {
		let spec = self.by_property.get(property)?;
		let (_, member) = spec.members.iter().find(|(value, _)| *value == raw)?;
		Some(format!("Enum.{}.{}", spec.enum_name, member))
	}

	/// Enum spec registered for `property`.
	pub fn spec(&self, property: &str) -> Option<&EnumSpec> {
		self.by_property.get(property)
	}

	/// Number of mapped property names.
	pub fn len(&self) -> usize {
		self.by_property.len()
	}

	/// Whether no property is mapped.
	pub fn is_empty(&self) -> bool {
		self.by_property.is_empty()
	}

	fn build_builtin() -> Self {
		let mut table = Self::empty();
		for &(property, enum_name, members) in BUILTIN_ENUMS {
			table.insert(property, enum_name, members);
		}
		table
	}
}

type BuiltinRow = (&'static str, &'static str, &'static [(i64, &'static str)]);

const BUILTIN_ENUMS: &[BuiltinRow] = &[
	("BorderMode", "BorderMode", &[(0, "Outline"), (1, "Middle"), (2, "Inset")]),
	("ApplyStrokeMode", "ApplyStrokeMode", &[(0, "Contextual"), (1, "Border")]),
	("LineJoinMode", "LineJoinMode", &[(0, "Round"), (1, "Bevel"), (2, "Miter")]),
	("FillDirection", "FillDirection", &[(0, "Horizontal"), (1, "Vertical")]),
	("HorizontalAlignment", "HorizontalAlignment", &[(0, "Center"), (1, "Left"), (2, "Right")]),
	("VerticalAlignment", "VerticalAlignment", &[(0, "Center"), (1, "Top"), (2, "Bottom")]),
	("SizeConstraint", "SizeConstraint", &[(0, "RelativeXY"), (1, "RelativeXX"), (2, "RelativeYY")]),
	("AutomaticSize", "AutomaticSize", &[(0, "None"), (1, "X"), (2, "Y"), (3, "XY")]),
	("AutomaticCanvasSize", "AutomaticSize", &[(0, "None"), (1, "X"), (2, "Y"), (3, "XY")]),
	("EasingDirection", "EasingDirection", &[(0, "In"), (1, "Out"), (2, "InOut")]),
	(
		"EasingStyle",
		"EasingStyle",
		&[
			(0, "Linear"),
			(1, "Sine"),
			(2, "Back"),
			(3, "Quad"),
			(4, "Quart"),
			(5, "Quint"),
			(6, "Bounce"),
			(7, "Elastic"),
			(8, "Exponential"),
			(9, "Circular"),
			(10, "Cubic"),
		],
	),
	("TextXAlignment", "TextXAlignment", &[(0, "Left"), (1, "Right"), (2, "Center")]),
	("TextYAlignment", "TextYAlignment", &[(0, "Top"), (1, "Center"), (2, "Bottom")]),
	("TextTruncate", "TextTruncate", &[(0, "None"), (1, "AtEnd"), (2, "SplitWord")]),
	("ScaleType", "ScaleType", &[(0, "Stretch"), (1, "Slice"), (2, "Tile"), (3, "Fit"), (4, "Crop")]),
	("SortOrder", "SortOrder", &[(0, "Name"), (1, "Custom"), (2, "LayoutOrder")]),
	("ZIndexBehavior", "ZIndexBehavior", &[(0, "Global"), (1, "Sibling")]),
	("ScrollingDirection", "ScrollingDirection", &[(1, "X"), (2, "Y"), (4, "XY")]),
	("ResampleMode", "ResamplerMode", &[(0, "Default"), (1, "Pixelated")]),
	("AspectType", "AspectType", &[(0, "FitWithinMaxSize"), (1, "ScaleWithParentSize")]),
	("DominantAxis", "DominantAxis", &[(0, "Width"), (1, "Height")]),
	("StartCorner", "StartCorner", &[(0, "TopLeft"), (1, "TopRight"), (2, "BottomLeft"), (3, "BottomRight")]),
	("ElasticBehavior", "ElasticBehavior", &[(0, "WhenScrollable"), (1, "Always"), (2, "Never")]),
	("VerticalScrollBarPosition", "VerticalScrollBarPosition", &[(0, "Right"), (1, "Left")]),
	("HorizontalScrollBarInset", "ScrollBarInset", &[(0, "None"), (1, "ScrollBar"), (2, "Always")]),
	("VerticalScrollBarInset", "ScrollBarInset", &[(0, "None"), (1, "ScrollBar"), (2, "Always")]),
	(
		"Font",
		"Font",
		&[
			(0, "Legacy"),
			(1, "Arial"),
			(2, "ArialBold"),
			(3, "SourceSans"),
			(4, "SourceSansBold"),
			(5, "SourceSansLight"),
			(6, "SourceSansItalic"),
			(7, "Bodoni"),
			(8, "Garamond"),
			(9, "Cartoon"),
			(10, "Code"),
			(11, "Highway"),
			(12, "SciFi"),
			(13, "Arcade"),
			(14, "Fantasy"),
			(15, "Antique"),
			(16, "SourceSansSemibold"),
			(17, "Gotham"),
			(18, "GothamMedium"),
			(19, "GothamBold"),
			(20, "GothamBlack"),
		],
	),
];
