use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum AmalgError {
	#[error(transparent)]
	#[diagnostic(code(amalg::io_error))]
	Io(#[from] std::io::Error),

	#[error("include target not found: `{path}`")]
	#[diagnostic(
		code(amalg::missing_include),
		help(
			"quoted includes always resolve against the source directory, never against the \
			 including file's own directory — check the spelling relative to the source directory"
		)
	)]
	MissingInclude { path: String },

	#[error("unterminated quoted include in `{file}` at byte offset {offset}")]
	#[diagnostic(
		code(amalg::malformed_include),
		help("add the closing `\"` to the include directive")
	)]
	MalformedInclude { file: String, offset: usize },

	#[error("include identifier in `{file}` is not valid UTF-8")]
	#[diagnostic(
		code(amalg::invalid_include_path),
		help("the text between the quotes must be a UTF-8 relative path")
	)]
	InvalidIncludePath { file: String },

	#[error("distinct include limit exceeded ({limit})")]
	#[diagnostic(
		code(amalg::capacity_exceeded),
		help(
			"raise `max_includes` in amalg.toml if the tree is genuinely this large; otherwise \
			 look for an include-graph explosion (for example a cycle through a manifest seed)"
		)
	)]
	CapacityExceeded { limit: usize },

	#[error("failed to parse manifest file: {0}")]
	#[diagnostic(
		code(amalg::manifest_parse),
		help("check that amalg.toml is valid TOML with `sources` and `root_header` entries")
	)]
	ManifestParse(String),

	#[error("no manifest found in `{dir}`")]
	#[diagnostic(
		code(amalg::missing_manifest),
		help("create an `amalg.toml` inside the source directory or pass `--manifest <path>`")
	)]
	MissingManifest { dir: String },
}

pub type AmalgResult<T> = Result<T, AmalgError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
