mod behavior;
mod config;
mod decode;
mod emit;
mod enums;
mod error;
mod format;
mod ident;
mod layout;
mod pipeline;
mod tree;
mod value;

/// Drag and destroy-key block builders.
pub use behavior::{INPUT_SERVICE_VAR, destroy_key_block, drag_block};
/// Conversion configuration and its option enums.
pub use config::{AnchorPreset, BoundsScope, ConversionConfig, DestroyKey, MAX_SCALE, MIN_SCALE};
/// Typed value decoding entry points.
pub use decode::{DEFAULT_FONT_FAMILY, ValueKind, decode_value, font_weight_name};
/// Luau emission.
pub use emit::{CONTAINER_VAR, Emitter, EmitterState, SCREEN_GUI_VAR};
/// Token to enum member lookup.
pub use enums::{EnumSpec, EnumTable};
/// Error and result aliases.
pub use error::{RbxError, Result};
/// Luau literal formatting helpers.
pub use format::{lua_number, lua_string, lua_value};
/// Identifier allocation.
pub use ident::{IdentAllocator, sanitize_identifier};
/// Bounding box and geometry transforms.
pub use layout::{DEFAULT_CANVAS, Layout, LayoutBounds, compute_bounds};
/// End-to-end conversion entry points.
pub use pipeline::{Conversion, DIAGNOSTIC_MARKER, Diagnostic, DiagnosticKind, GeneratedScript, convert, convert_detailed, convert_with_table};
/// Instance tree types and builder.
pub use tree::{Document, EXCLUDED_PROPERTIES, Node, build_node, parse_document};
/// Decoded value types.
pub use value::{Color3, DecodedValue, FontFace, OmitReason, Rect, UDim, UDim2, Vector2, Vector3};
