use std::path::PathBuf;
use std::process;

use amalg_cli::AmalgCli;
use amalg_core::AnyEmptyResult;
use amalg_core::Manifest;
use amalg_core::PassReport;
use amalg_core::amalgamate;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = AmalgCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics with help text and
		// error codes.
		match e.downcast::<amalg_core::AmalgError>() {
			Ok(amalg_err) => {
				let report: miette::Report = (*amalg_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run(args: &AmalgCli) -> AnyEmptyResult {
	let mut manifest = match &args.manifest {
		Some(path) => Manifest::from_path(path)?,
		None => Manifest::load_required(&args.src_dir)?,
	};

	if let Some(max_includes) = args.max_includes {
		manifest.max_includes = max_includes;
	}

	let out_dir = match &args.out_dir {
		Some(dir) => dir.clone(),
		None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
	};

	let report = amalgamate(&args.src_dir, &manifest, &out_dir)?;

	print_pass_summary(&report.source, &report.source_path, args.verbose);
	print_pass_summary(&report.header, &report.header_path, args.verbose);

	Ok(())
}

fn print_pass_summary(pass: &PassReport, artifact: &std::path::Path, verbose: bool) {
	println!(
		"Amalgamated {} file(s) into {} ({} bytes)",
		pass.files_spliced(),
		colored!(artifact.display(), bold),
		pass.bytes_written
	);

	if verbose {
		for file in &pass.spliced {
			println!("  {file}");
		}
	}
}
