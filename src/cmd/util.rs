use std::fs;
use std::path::{Path, PathBuf};

use rbxlua::rbxmx::{RbxError, Result};
use serde::Serialize;

/// Largest input file accepted, in bytes.
pub(crate) const MAX_INPUT_BYTES: u64 = 5_000_000;
/// Longest result printed inline instead of written to a file.
pub(crate) const INLINE_LIMIT: usize = 1900;

/// Read an `.rbxmx` model after extension and size checks.
pub(crate) fn read_model(path: &Path) -> Result<String> {
	check_extension(path)?;
	let size = fs::metadata(path)?.len();
	if size > MAX_INPUT_BYTES {
		return Err(RbxError::InputTooLarge {
			size,
			limit: MAX_INPUT_BYTES,
		});
	}
	Ok(fs::read_to_string(path)?)
}

/// Accept `.rbxmx`; name the binary format explicitly when it shows up.
pub(crate) fn check_extension(path: &Path) -> Result<()> {
	let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
	match extension.as_deref() {
		Some("rbxmx") => Ok(()),
		Some("rbxm") => Err(RbxError::BinaryModelUnsupported),
		_ => Err(RbxError::UnsupportedExtension {
			path: path.display().to_string(),
		}),
	}
}

/// `<dir>/<stem>_converted.lua` next to the input.
pub(crate) fn converted_path(input: &Path) -> PathBuf {
	let stem = input.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_else(|| "model".to_owned());
	input.with_file_name(format!("{stem}_converted.lua"))
}

/// Whether `text` is short enough to print directly.
pub(crate) fn fits_inline(text: &str) -> bool {
	text.chars().count() <= INLINE_LIMIT
}

/// Pretty-print a JSON payload on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
