use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RbxError>;

/// Errors produced while reading, parsing, and converting RBXMX documents.
#[derive(Debug, Error)]
pub enum RbxError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Configuration file was not valid JSON for the expected shape.
	#[error("config json: {0}")]
	Json(#[from] serde_json::Error),
	/// XML text could not be parsed.
	#[error("XML parse error: {0}")]
	Xml(#[from] roxmltree::Error),
	/// The document root has no `<Item>` children with a class.
	#[error("no items found in document")]
	NoItems,
	/// Item nesting exceeded the configured recursion guard.
	#[error("item nesting exceeded max depth {max_depth}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Anchor preset literal was not recognized.
	#[error("invalid anchor preset: {value}")]
	InvalidAnchor {
		/// User-provided literal.
		value: String,
	},
	/// Destroy key literal was not recognized.
	#[error("invalid destroy key: {value}")]
	InvalidDestroyKey {
		/// User-provided literal.
		value: String,
	},
	/// Bounds scope literal was not recognized.
	#[error("invalid bounds scope: {value}")]
	InvalidBoundsScope {
		/// User-provided literal.
		value: String,
	},
	/// Configuration value is outside its accepted range.
	#[error("invalid config: {field} = {value}")]
	InvalidConfig {
		/// Offending field name.
		field: &'static str,
		/// Rendered offending value.
		value: String,
	},
	/// Input file exceeded the command-layer size limit.
	#[error("input too large: {size} bytes (limit {limit})")]
	InputTooLarge {
		/// Actual input size in bytes.
		size: u64,
		/// Maximum accepted size in bytes.
		limit: u64,
	},
	/// Binary `.rbxm` models are not supported.
	#[error("binary .rbxm models are not supported; save the model as .rbxmx from Studio first")]
	BinaryModelUnsupported,
	/// Input file does not carry a supported extension.
	#[error("unsupported input file: {path} (expected .rbxmx)")]
	UnsupportedExtension {
		/// Rendered input path.
		path: String,
	},
}
