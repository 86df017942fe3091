use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::AmalgError;
use crate::AmalgResult;
use crate::dedup::DEFAULT_MAX_INCLUDES;

/// Supported manifest file locations inside the source directory, in
/// discovery order (highest precedence first).
pub const MANIFEST_FILE_CANDIDATES: [&str; 2] = ["amalg.toml", ".amalg.toml"];

/// Manifest loaded from an `amalg.toml` file.
///
/// ```toml
/// sources = ["mpf_add.c", "mpf_sub.c", "mpf_mul.c"]
/// root_header = "tomfloat.h"
/// max_includes = 1000
///
/// [output]
/// source = "tomfloat.c"
/// header = "tomfloat.h"
/// ```
///
/// `sources` is the ordered list of implementation files seeding the
/// merged-source pass; `root_header` is the single seed of the merged-header
/// pass. Both passes resolve every quoted include against the source
/// directory the manifest was found in.
#[derive(Debug, Deserialize)]
pub struct Manifest {
	/// Ordered implementation files to amalgamate, spliced in list order.
	pub sources: Vec<String>,
	/// Root header file seeding the merged-header pass.
	pub root_header: String,
	/// Output artifact names. Defaults to `amalgamated.c` / `amalgamated.h`.
	#[serde(default)]
	pub output: OutputConfig,
	/// Cap on distinct include identifiers per output pass. Exceeding it
	/// aborts the run. Defaults to 1000.
	#[serde(default = "default_max_includes")]
	pub max_includes: usize,
}

/// Names of the two artifacts written by a run.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
	/// Name of the merged implementation artifact.
	#[serde(default = "default_source_name")]
	pub source: String,
	/// Name of the merged header artifact.
	#[serde(default = "default_header_name")]
	pub header: String,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			source: default_source_name(),
			header: default_header_name(),
		}
	}
}

fn default_max_includes() -> usize {
	DEFAULT_MAX_INCLUDES
}

fn default_source_name() -> String {
	"amalgamated.c".to_string()
}

fn default_header_name() -> String {
	"amalgamated.h".to_string()
}

impl Manifest {
	/// Find the manifest file inside `dir`, trying each candidate name in
	/// order. Returns `None` when no candidate exists.
	pub fn resolve_path(dir: &Path) -> Option<PathBuf> {
		MANIFEST_FILE_CANDIDATES
			.iter()
			.map(|candidate| dir.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the manifest from `dir` if one of the candidate files exists.
	pub fn load(dir: &Path) -> AmalgResult<Option<Self>> {
		let Some(manifest_path) = Self::resolve_path(dir) else {
			return Ok(None);
		};

		Ok(Some(Self::from_path(&manifest_path)?))
	}

	/// Load the manifest from `dir`, failing when none is found.
	pub fn load_required(dir: &Path) -> AmalgResult<Self> {
		Self::load(dir)?.ok_or_else(|| {
			AmalgError::MissingManifest {
				dir: dir.display().to_string(),
			}
		})
	}

	/// Load and parse a manifest from an explicit file path.
	pub fn from_path(path: &Path) -> AmalgResult<Self> {
		let content = std::fs::read_to_string(path)?;
		let manifest: Self =
			toml::from_str(&content).map_err(|e| AmalgError::ManifestParse(e.to_string()))?;

		Ok(manifest)
	}
}
