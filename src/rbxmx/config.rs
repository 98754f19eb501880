use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rbxmx::{RbxError, Result};

/// Smallest scale accepted by [`ConversionConfig::clamped`].
pub const MIN_SCALE: f64 = 0.1;
/// Largest scale accepted by [`ConversionConfig::clamped`].
pub const MAX_SCALE: f64 = 5.0;

/// Inputs for one conversion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
	/// Multiplier for pixel offsets.
	pub scale: f64,
	/// Screen placement of the generated container.
	pub position: AnchorPreset,
	/// Emit pointer drag handling on the container.
	pub draggable: bool,
	/// Key that destroys the generated GUI.
	pub destroy_key: DestroyKey,
	/// Name given to the generated `ScreenGui`.
	pub display_name: String,
	/// Replacement for every `BackgroundTransparency` value.
	pub transparency_override: Option<f64>,
	/// Which nodes contribute to the layout bounding box.
	pub bounds_scope: BoundsScope,
	/// Maximum item nesting accepted by the tree builder.
	pub max_depth: u32,
}

impl Default for ConversionConfig {
	fn default() -> Self {
		Self {
			scale: 1.0,
			position: AnchorPreset::Center,
			draggable: false,
			destroy_key: DestroyKey::None,
			display_name: "ConvertedGui".to_owned(),
			transparency_override: None,
			bounds_scope: BoundsScope::TopLevel,
			max_depth: 1024,
		}
	}
}

impl ConversionConfig {
	/// Reject values the emitter cannot honour.
	pub fn validate(&self) -> Result<()> {
		if !self.scale.is_finite() || self.scale <= 0.0 {
			return Err(RbxError::InvalidConfig {
				field: "scale",
				value: self.scale.to_string(),
			});
		}
		if let Some(transparency) = self.transparency_override
			&& !(0.0..=1.0).contains(&transparency)
		{
			return Err(RbxError::InvalidConfig {
				field: "transparency_override",
				value: transparency.to_string(),
			});
		}
		if self.max_depth == 0 {
			return Err(RbxError::InvalidConfig {
				field: "max_depth",
				value: "0".to_owned(),
			});
		}
		Ok(())
	}

	/// Copy with scale and transparency pulled into their accepted ranges.
	pub fn clamped(&self) -> Self {
		let scale = if self.scale.is_finite() { self.scale.clamp(MIN_SCALE, MAX_SCALE) } else { 1.0 };
		let transparency_override = self
			.transparency_override
			.filter(|value| !value.is_nan())
			.map(|value| value.clamp(0.0, 1.0));
		Self {
			scale,
			transparency_override,
			max_depth: self.max_depth.max(1),
			..self.clone()
		}
	}
}

/// Screen placement preset for the generated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPreset {
	/// Centered on screen.
	Center,
	/// Top edge, horizontally centered.
	Top,
	/// Bottom edge, horizontally centered.
	Bottom,
	/// Left edge, vertically centered.
	Left,
	/// Right edge, vertically centered.
	Right,
	/// Top-left corner.
	TopLeft,
	/// Top-right corner.
	TopRight,
	/// Bottom-left corner.
	BottomLeft,
	/// Bottom-right corner.
	BottomRight,
	/// Original document coordinates.
	Original,
}

impl AnchorPreset {
	/// Every preset, in declaration order.
	pub const ALL: [Self; 10] = [
		Self::Center,
		Self::Top,
		Self::Bottom,
		Self::Left,
		Self::Right,
		Self::TopLeft,
		Self::TopRight,
		Self::BottomLeft,
		Self::BottomRight,
		Self::Original,
	];

	/// Kebab-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Center => "center",
			Self::Top => "top",
			Self::Bottom => "bottom",
			Self::Left => "left",
			Self::Right => "right",
			Self::TopLeft => "top-left",
			Self::TopRight => "top-right",
			Self::BottomLeft => "bottom-left",
			Self::BottomRight => "bottom-right",
			Self::Original => "original",
		}
	}

	/// Anchor point and scale position for the container, `None` for [`AnchorPreset::Original`].
	pub fn anchor(self) -> Option<(f64, f64)> {
		let point = match self {
			Self::Center => (0.5, 0.5),
			Self::Top => (0.5, 0.0),
			Self::Bottom => (0.5, 1.0),
			Self::Left => (0.0, 0.5),
			Self::Right => (1.0, 0.5),
			Self::TopLeft => (0.0, 0.0),
			Self::TopRight => (1.0, 0.0),
			Self::BottomLeft => (0.0, 1.0),
			Self::BottomRight => (1.0, 1.0),
			Self::Original => return None,
		};
		Some(point)
	}
}

impl FromStr for AnchorPreset {
	type Err = RbxError;

	fn from_str(value: &str) -> Result<Self> {
		let wanted = normalize_literal(value);
		Self::ALL
			.into_iter()
			.find(|preset| normalize_literal(preset.as_str()) == wanted)
			.ok_or_else(|| RbxError::InvalidAnchor { value: value.to_owned() })
	}
}

impl fmt::Display for AnchorPreset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Key bound to destroying the generated GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DestroyKey {
	/// No key binding.
	None,
	/// `Enum.KeyCode.X`
	X,
	/// `Enum.KeyCode.Z`
	Z,
	/// `Enum.KeyCode.Q`
	Q,
	/// `Enum.KeyCode.E`
	E,
	/// `Enum.KeyCode.R`
	R,
	/// `Enum.KeyCode.F`
	F,
	/// `Enum.KeyCode.G`
	G,
	/// `Enum.KeyCode.H`
	H,
	/// `Enum.KeyCode.K`
	K,
	/// `Enum.KeyCode.L`
	L,
	/// `Enum.KeyCode.M`
	M,
	/// `Enum.KeyCode.P`
	P,
	/// `Enum.KeyCode.Delete`
	Delete,
	/// `Enum.KeyCode.Backspace`
	Backspace,
	/// `Enum.KeyCode.End`
	End,
	/// `Enum.KeyCode.Insert`
	Insert,
	/// `Enum.KeyCode.RightControl`
	RightControl,
	/// `Enum.KeyCode.RightShift`
	RightShift,
}

impl DestroyKey {
	/// Every option, in declaration order.
	pub const ALL: [Self; 19] = [
		Self::None,
		Self::X,
		Self::Z,
		Self::Q,
		Self::E,
		Self::R,
		Self::F,
		Self::G,
		Self::H,
		Self::K,
		Self::L,
		Self::M,
		Self::P,
		Self::Delete,
		Self::Backspace,
		Self::End,
		Self::Insert,
		Self::RightControl,
		Self::RightShift,
	];

	/// `Enum.KeyCode` member name, `None` when unbound.
	pub fn key_code(self) -> Option<&'static str> {
		let name = match self {
			Self::None => return None,
			Self::X => "X",
			Self::Z => "Z",
			Self::Q => "Q",
			Self::E => "E",
			Self::R => "R",
			Self::F => "F",
			Self::G => "G",
			Self::H => "H",
			Self::K => "K",
			Self::L => "L",
			Self::M => "M",
			Self::P => "P",
			Self::Delete => "Delete",
			Self::Backspace => "Backspace",
			Self::End => "End",
			Self::Insert => "Insert",
			Self::RightControl => "RightControl",
			Self::RightShift => "RightShift",
		};
		Some(name)
	}

	/// Kebab-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::X => "x",
			Self::Z => "z",
			Self::Q => "q",
			Self::E => "e",
			Self::R => "r",
			Self::F => "f",
			Self::G => "g",
			Self::H => "h",
			Self::K => "k",
			Self::L => "l",
			Self::M => "m",
			Self::P => "p",
			Self::Delete => "delete",
			Self::Backspace => "backspace",
			Self::End => "end",
			Self::Insert => "insert",
			Self::RightControl => "right-control",
			Self::RightShift => "right-shift",
		}
	}
}

impl FromStr for DestroyKey {
	type Err = RbxError;

	fn from_str(value: &str) -> Result<Self> {
		let wanted = normalize_literal(value);
		Self::ALL
			.into_iter()
			.find(|key| normalize_literal(key.as_str()) == wanted)
			.ok_or_else(|| RbxError::InvalidDestroyKey { value: value.to_owned() })
	}
}

impl fmt::Display for DestroyKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which nodes contribute to the layout bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundsScope {
	/// Only direct children of the document root.
	TopLevel,
	/// Every node, using offsets accumulated from ancestors.
	Tree,
}

impl BoundsScope {
	/// Kebab-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TopLevel => "top-level",
			Self::Tree => "tree",
		}
	}
}

impl FromStr for BoundsScope {
	type Err = RbxError;

	fn from_str(value: &str) -> Result<Self> {
		match normalize_literal(value).as_str() {
			"toplevel" => Ok(Self::TopLevel),
			"tree" => Ok(Self::Tree),
			_ => Err(RbxError::InvalidBoundsScope { value: value.to_owned() }),
		}
	}
}

impl fmt::Display for BoundsScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn normalize_literal(value: &str) -> String {
	value
		.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.map(|ch| ch.to_ascii_lowercase())
		.collect()
}
