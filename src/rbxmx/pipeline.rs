use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{info, warn};

use crate::rbxmx::{ConversionConfig, Emitter, EnumTable, Layout, LayoutBounds, RbxError, Result, compute_bounds, parse_document};

/// Leading text of every diagnostic result.
pub const DIAGNOSTIC_MARKER: &str = "-- Error";

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
	/// XML syntax error.
	Syntax,
	/// No top-level items.
	Empty,
	/// Configuration rejected.
	Config,
	/// Any other failure during conversion.
	Internal,
}

/// Failure report returned in place of generated source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// Failure category.
	pub kind: DiagnosticKind,
	/// Underlying message.
	pub message: String,
}

impl Diagnostic {
	/// Classify a pipeline error.
	pub fn from_error(err: &RbxError) -> Self {
		let kind = match err {
			RbxError::Xml(_) => DiagnosticKind::Syntax,
			RbxError::NoItems => DiagnosticKind::Empty,
			RbxError::InvalidConfig { .. } | RbxError::InvalidAnchor { .. } | RbxError::InvalidDestroyKey { .. } | RbxError::InvalidBoundsScope { .. } => {
				DiagnosticKind::Config
			}
			_ => DiagnosticKind::Internal,
		};
		let message = match err {
			RbxError::Xml(inner) => inner.to_string(),
			other => other.to_string(),
		};
		Self { kind, message }
	}

	/// Luau comment text starting with [`DIAGNOSTIC_MARKER`].
	pub fn text(&self) -> String {
		match self.kind {
			DiagnosticKind::Syntax => format!("{DIAGNOSTIC_MARKER}: XML parse error: {}\n-- Make sure the file is a valid RBXMX file\n", self.message),
			DiagnosticKind::Empty => format!("{DIAGNOSTIC_MARKER}: No items found in file\n"),
			DiagnosticKind::Config => format!("{DIAGNOSTIC_MARKER}: invalid configuration: {}\n", self.message),
			DiagnosticKind::Internal => format!("{DIAGNOSTIC_MARKER}: conversion failed: {}\n", self.message),
		}
	}
}

/// Successful conversion output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedScript {
	/// Luau source text.
	pub source: String,
	/// Number of instances emitted from the document.
	pub node_count: usize,
	/// Bounds used for normalization.
	pub bounds: LayoutBounds,
}

/// Result of one conversion: full source or a diagnostic, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
	/// Generated script.
	Generated(GeneratedScript),
	/// Diagnostic report.
	Diagnostic(Diagnostic),
}

impl Conversion {
	/// Whether source was generated.
	pub fn is_generated(&self) -> bool {
		matches!(self, Self::Generated(_))
	}

	/// Single-string form: source text or diagnostic text.
	pub fn into_text(self) -> String {
		match self {
			Self::Generated(script) => script.source,
			Self::Diagnostic(diagnostic) => diagnostic.text(),
		}
	}
}

/// Convert RBXMX text with the builtin enum table.
pub fn convert(xml: &str, config: &ConversionConfig) -> String {
	convert_with_table(xml, config, EnumTable::builtin())
}

/// Convert RBXMX text with a caller-supplied enum table.
pub fn convert_with_table(xml: &str, config: &ConversionConfig, enums: &EnumTable) -> String {
	convert_detailed(xml, config, enums).into_text()
}

/// Convert and keep the structured outcome.
pub fn convert_detailed(xml: &str, config: &ConversionConfig, enums: &EnumTable) -> Conversion {
	match panic::catch_unwind(AssertUnwindSafe(|| run(xml, config, enums))) {
		Ok(Ok(script)) => {
			info!(
				nodes = script.node_count,
				width = script.bounds.width,
				height = script.bounds.height,
				lines = script.source.lines().count(),
				"conversion finished"
			);
			Conversion::Generated(script)
		}
		Ok(Err(err)) => {
			let diagnostic = Diagnostic::from_error(&err);
			warn!(kind = ?diagnostic.kind, "conversion failed: {err}");
			Conversion::Diagnostic(diagnostic)
		}
		Err(payload) => {
			let message = panic_message(payload.as_ref());
			warn!("conversion panicked: {message}");
			Conversion::Diagnostic(Diagnostic {
				kind: DiagnosticKind::Internal,
				message,
			})
		}
	}
}

fn run(xml: &str, config: &ConversionConfig, enums: &EnumTable) -> Result<GeneratedScript> {
	config.validate()?;
	let document = parse_document(xml, enums, config.max_depth)?.unwrap_screen_guis();
	if document.roots.is_empty() {
		return Err(RbxError::NoItems);
	}
	let bounds = compute_bounds(&document, config.bounds_scope);
	let layout = Layout::new(bounds, config.scale, config.position);
	let source = Emitter::new(config, layout).emit_document(&document);

	Ok(GeneratedScript {
		source,
		node_count: document.node_count(),
		bounds,
	})
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(text) = payload.downcast_ref::<&str>() {
		(*text).to_owned()
	} else if let Some(text) = payload.downcast_ref::<String>() {
		text.clone()
	} else {
		"unknown internal error".to_owned()
	}
}
