use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rbxlua::rbxmx::{AnchorPreset, BoundsScope, Conversion, ConversionConfig, DestroyKey, Diagnostic, EnumTable, LayoutBounds, Result, convert_detailed};
use tracing::debug;

use crate::cmd::util::{converted_path, emit_json, fits_inline, read_model};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// JSON file with a full or partial conversion config.
	#[arg(long)]
	pub config: Option<PathBuf>,
	#[arg(long)]
	pub scale: Option<f64>,
	#[arg(long)]
	pub position: Option<AnchorPreset>,
	#[arg(long)]
	pub draggable: bool,
	#[arg(long = "destroy-key")]
	pub destroy_key: Option<DestroyKey>,
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub transparency: Option<f64>,
	#[arg(long = "bounds-scope")]
	pub bounds_scope: Option<BoundsScope>,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long)]
	pub stdout: bool,
	#[arg(long)]
	pub json: bool,
}

/// Convert one model and deliver the script inline, to a file, or as a JSON report.
pub fn run(args: Args) -> Result<ExitCode> {
	let xml = read_model(&args.file)?;
	let config = build_config(&args)?.clamped();
	debug!(?config, "effective config");

	let conversion = convert_detailed(&xml, &config, EnumTable::builtin());
	let status = if conversion.is_generated() { ExitCode::SUCCESS } else { ExitCode::FAILURE };

	if args.json {
		emit_json(&ConvertJson::new(&args.file, &config, &conversion))?;
		return Ok(status);
	}

	let text = conversion.into_text();
	if args.stdout || (args.out.is_none() && fits_inline(&text)) {
		print!("{text}");
	} else {
		let target = args.out.unwrap_or_else(|| converted_path(&args.file));
		fs::write(&target, &text)?;
		println!("wrote {} ({} lines)", target.display(), text.lines().count());
	}
	Ok(status)
}

fn build_config(args: &Args) -> Result<ConversionConfig> {
	let mut config = match &args.config {
		Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
		None => ConversionConfig::default(),
	};

	if let Some(scale) = args.scale {
		config.scale = scale;
	}
	if let Some(position) = args.position {
		config.position = position;
	}
	if args.draggable {
		config.draggable = true;
	}
	if let Some(destroy_key) = args.destroy_key {
		config.destroy_key = destroy_key;
	}
	if let Some(name) = &args.name {
		config.display_name = name.clone();
	}
	if let Some(transparency) = args.transparency {
		config.transparency_override = Some(transparency);
	}
	if let Some(bounds_scope) = args.bounds_scope {
		config.bounds_scope = bounds_scope;
	}
	Ok(config)
}

#[derive(serde::Serialize)]
struct ConvertJson<'a> {
	path: String,
	ok: bool,
	config: &'a ConversionConfig,
	node_count: Option<usize>,
	bounds: Option<LayoutBounds>,
	source: Option<&'a str>,
	diagnostic: Option<DiagnosticJson<'a>>,
}

#[derive(serde::Serialize)]
struct DiagnosticJson<'a> {
	#[serde(flatten)]
	detail: &'a Diagnostic,
	text: String,
}

impl<'a> ConvertJson<'a> {
	fn new(path: &Path, config: &'a ConversionConfig, conversion: &'a Conversion) -> Self {
		let mut out = Self {
			path: path.display().to_string(),
			ok: conversion.is_generated(),
			config,
			node_count: None,
			bounds: None,
			source: None,
			diagnostic: None,
		};
		match conversion {
			Conversion::Generated(script) => {
				out.node_count = Some(script.node_count);
				out.bounds = Some(script.bounds);
				out.source = Some(&script.source);
			}
			Conversion::Diagnostic(diagnostic) => {
				out.diagnostic = Some(DiagnosticJson {
					detail: diagnostic,
					text: diagnostic.text(),
				});
			}
		}
		out
	}
}
