use serde::Serialize;

use crate::rbxmx::value::{UDim2, Vector2};
use crate::rbxmx::{AnchorPreset, BoundsScope, Document, Node};

/// Canvas used when no node carries a `Size`.
pub const DEFAULT_CANVAS: (f64, f64) = (800.0, 600.0);

/// Pixel-offset bounding box of the nodes in scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutBounds {
	/// Smallest X offset.
	pub min_x: f64,
	/// Smallest Y offset.
	pub min_y: f64,
	/// Extent from `min_x` to the furthest right edge.
	pub width: f64,
	/// Extent from `min_y` to the furthest bottom edge.
	pub height: f64,
}

impl LayoutBounds {
	/// Bounds used when nothing in scope is sizable.
	pub fn fallback() -> Self {
		Self {
			min_x: 0.0,
			min_y: 0.0,
			width: DEFAULT_CANVAS.0,
			height: DEFAULT_CANVAS.1,
		}
	}
}

/// Compute bounds over `Position`/`Size` offsets of the nodes in `scope`.
pub fn compute_bounds(document: &Document, scope: BoundsScope) -> LayoutBounds {
	let mut acc = BoundsAcc::default();
	for root in &document.roots {
		match scope {
			BoundsScope::TopLevel => {
				acc.add(root, Vector2::default());
			}
			BoundsScope::Tree => add_subtree(&mut acc, root, Vector2::default()),
		}
	}
	acc.finish()
}

fn add_subtree(acc: &mut BoundsAcc, node: &Node, origin: Vector2) {
	let absolute = acc.add(node, origin);
	for child in &node.children {
		add_subtree(acc, child, absolute);
	}
}

#[derive(Default)]
struct BoundsAcc {
	extent: Option<(f64, f64, f64, f64)>,
}

impl BoundsAcc {
	/// Fold one node in; returns its absolute offset for descendants.
	fn add(&mut self, node: &Node, origin: Vector2) -> Vector2 {
		let position = node.udim2("Position").unwrap_or_default();
		let absolute = Vector2 {
			x: origin.x + position.x.offset,
			y: origin.y + position.y.offset,
		};
		let Some(size) = node.udim2("Size") else {
			return absolute;
		};

		let right = absolute.x + size.x.offset;
		let bottom = absolute.y + size.y.offset;
		self.extent = Some(match self.extent {
			None => (absolute.x, absolute.y, right, bottom),
			Some((min_x, min_y, max_x, max_y)) => (min_x.min(absolute.x), min_y.min(absolute.y), max_x.max(right), max_y.max(bottom)),
		});
		absolute
	}

	fn finish(self) -> LayoutBounds {
		match self.extent {
			Some((min_x, min_y, max_x, max_y)) => LayoutBounds {
				min_x,
				min_y,
				width: (max_x - min_x).max(0.0),
				height: (max_y - min_y).max(0.0),
			},
			None => LayoutBounds::fallback(),
		}
	}
}

/// Geometry transforms for one conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
	/// Bounding box before scaling.
	pub bounds: LayoutBounds,
	/// Offset multiplier.
	pub scale: f64,
	/// Container placement.
	pub preset: AnchorPreset,
}

impl Layout {
	/// Build the transform set.
	pub fn new(bounds: LayoutBounds, scale: f64, preset: AnchorPreset) -> Self {
		Self { bounds, scale, preset }
	}

	/// Scale offsets of a non-positional `UDim2`.
	pub fn scale_udim2(&self, value: UDim2) -> UDim2 {
		value.scale_offsets(self.scale)
	}

	/// Re-express a top-level position relative to the bounds origin, then scale it.
	pub fn normalize_position(&self, position: UDim2) -> UDim2 {
		position.translate(-self.bounds.min_x, -self.bounds.min_y).scale_offsets(self.scale)
	}

	/// Scaled container size in whole pixels.
	pub fn container_size(&self) -> UDim2 {
		UDim2::new(0.0, self.bounds.width, 0.0, self.bounds.height).scale_offsets(self.scale)
	}

	/// Container anchor point.
	pub fn container_anchor(&self) -> Vector2 {
		let (x, y) = self.preset.anchor().unwrap_or((0.0, 0.0));
		Vector2 { x, y }
	}

	/// Container position for the configured preset.
	pub fn container_position(&self) -> UDim2 {
		match self.preset.anchor() {
			Some((x, y)) => UDim2::new(x, 0.0, y, 0.0),
			None => UDim2::new(0.0, self.bounds.min_x, 0.0, self.bounds.min_y).scale_offsets(self.scale),
		}
	}
}
