use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Merge a multi-file C library into one .c and one .h by inlining quoted includes.",
	long_about = "amalg produces a single-file distribution of a multi-file C library by \
	              recursively inlining quote-style (\"...\") includes, leaving angle-bracket \
	              (<...>) system includes untouched.\n\nAn amalg.toml manifest inside the source \
	              directory lists the ordered implementation files and the root header. Two \
	              artifacts are written per run: the merged implementation file and the merged \
	              header file, each containing every quoted include exactly once.\n\nThis is not a \
	              C preprocessor: macros, conditional compilation, and pragma-based include \
	              guards are never evaluated."
)]
pub struct AmalgCli {
	/// Source directory containing the library. Every quoted include is
	/// resolved against this directory, never against the including file's
	/// own directory.
	pub src_dir: PathBuf,

	/// Path to the manifest file. Defaults to `amalg.toml` (or
	/// `.amalg.toml`) inside the source directory.
	#[arg(long, short)]
	pub manifest: Option<PathBuf>,

	/// Directory the merged artifacts are written to. Defaults to the
	/// current working directory.
	#[arg(long, short)]
	pub out_dir: Option<PathBuf>,

	/// Override the manifest's cap on distinct includes per output pass.
	#[arg(long)]
	pub max_includes: Option<usize>,

	/// Enable verbose output (lists every spliced file).
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
