#![allow(missing_docs)]

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "rbxlua", about = "Convert Roblox XML models into Luau GUI scripts")]
struct Cli {
	/// Log decoding and emission details to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Convert(cmd::convert::Args),
	Inspect(cmd::inspect::Args),
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli.command) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Commands) -> rbxlua::rbxmx::Result<ExitCode> {
	match command {
		Commands::Convert(args) => cmd::convert::run(args),
		Commands::Inspect(args) => cmd::inspect::run(args).map(|()| ExitCode::SUCCESS),
	}
}

fn init_tracing(verbose: bool) {
	let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
