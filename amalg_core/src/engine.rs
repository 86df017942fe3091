use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::AmalgError;
use crate::AmalgResult;
use crate::dedup::DedupSet;
use crate::loader::load_content;
use crate::manifest::Manifest;

/// The literal byte sequence opening a quoted include directive. Only this
/// exact form is recognized: angle-bracket includes and directives with
/// whitespace before the opening quote never match and pass through as
/// plain text.
const INCLUDE_MARKER: &[u8] = b"#include \"";

/// Find the first occurrence of `needle` in `haystack`.
pub(crate) fn memstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

/// Summary of one output pass.
#[derive(Debug, Default)]
pub struct PassReport {
	/// Every physical file spliced into the output, seeds included, in
	/// splice order (depth-first, left-to-right).
	pub spliced: Vec<String>,
	/// Distinct include identifiers recorded by the deduplicator.
	pub distinct_includes: usize,
	/// Total bytes appended to the output sink.
	pub bytes_written: u64,
}

impl PassReport {
	/// Number of physical files spliced into the output.
	pub fn files_spliced(&self) -> usize {
		self.spliced.len()
	}
}

/// Result of a full amalgamation run: one merged-source pass and one
/// merged-header pass, each with its own deduplicator.
#[derive(Debug)]
pub struct AmalgReport {
	/// Summary of the merged implementation pass.
	pub source: PassReport,
	/// Summary of the merged header pass.
	pub header: PassReport,
	/// Path the merged implementation artifact was written to.
	pub source_path: PathBuf,
	/// Path the merged header artifact was written to.
	pub header_path: PathBuf,
}

fn append<W: Write>(out: &mut W, bytes: &[u8], report: &mut PassReport) -> AmalgResult<()> {
	out.write_all(bytes)?;
	report.bytes_written += bytes.len() as u64;

	Ok(())
}

/// Recursively splice `file` (resolved against `dir`) into `out`.
///
/// The file's content is scanned left-to-right for `#include "` markers.
/// Plain text between directives is appended verbatim. Each directive's
/// identifier — the literal text between the quotes — is checked against
/// `dedup`: identifiers seen before are elided entirely (the directive line
/// produces no output), first-time identifiers are recorded and then
/// amalgamated in place via recursion. Nested includes resolve against the
/// same fixed `dir`, never against the including file's own directory.
///
/// The byte immediately following a directive's closing quote (its trailing
/// newline) is consumed together with the directive, so an elided duplicate
/// leaves no blank line behind.
///
/// Note the deliberate asymmetry: only include *targets* pass through the
/// deduplicator. Top-level seeds enter here directly via [`run_pass`]
/// without being recorded, so a cycle back to a seed is only stopped by the
/// capacity cap.
pub fn amalgamate_file<W: Write>(
	dir: &Path,
	file: &str,
	out: &mut W,
	dedup: &mut DedupSet,
	report: &mut PassReport,
) -> AmalgResult<()> {
	let content = load_content(dir, file)?;
	tracing::debug!(file, bytes = content.len(), "splicing");
	report.spliced.push(file.to_string());

	let mut prev = 0;
	while let Some(found) = memstr(&content[prev..], INCLUDE_MARKER) {
		let marker_start = prev + found;
		let ident_start = marker_start + INCLUDE_MARKER.len();

		// Flush the plain text before the directive first; a malformed
		// directive aborts after this point, leaving the prefix written.
		append(out, &content[prev..marker_start], report)?;

		let Some(quote) = memstr(&content[ident_start..], b"\"") else {
			return Err(AmalgError::MalformedInclude {
				file: file.to_string(),
				offset: marker_start,
			});
		};
		let ident_end = ident_start + quote;
		let identifier = &content[ident_start..ident_end];

		// Resume past the closing quote and the directive's trailing
		// newline, clamped when the directive ends the file.
		let resume = (ident_end + 2).min(content.len());

		if dedup.seen(identifier) {
			tracing::trace!(
				identifier = %String::from_utf8_lossy(identifier),
				"eliding duplicate include"
			);
			prev = resume;
			continue;
		}

		dedup.record(identifier)?;

		let target = std::str::from_utf8(identifier)
			.map_err(|_| {
				AmalgError::InvalidIncludePath {
					file: file.to_string(),
				}
			})?
			.to_string();
		amalgamate_file(dir, &target, out, dedup, report)?;

		prev = resume;
	}

	append(out, &content[prev..], report)
}

/// Run one output pass: create a fresh deduplicator, splice every seed in
/// order into `out`, and return the pass summary.
///
/// Seed identifiers are not recorded in the deduplicator — only their
/// nested quoted includes are.
pub fn run_pass<W: Write>(
	dir: &Path,
	seeds: &[String],
	out: &mut W,
	max_includes: usize,
) -> AmalgResult<PassReport> {
	let mut dedup = DedupSet::with_limit(max_includes);
	let mut report = PassReport::default();

	for seed in seeds {
		amalgamate_file(dir, seed, out, &mut dedup, &mut report)?;
	}

	report.distinct_includes = dedup.len();
	Ok(report)
}

/// Run both output passes described by `manifest`, writing the merged
/// implementation and header artifacts into `out_dir`.
///
/// The two passes use independent deduplicators: the first splices the
/// ordered `sources` list into the implementation artifact, the second
/// splices the single `root_header` into the header artifact. Output files
/// are created (truncated) up front; on abort a partially written artifact
/// is left behind, which is acceptable for a build-time tool that is re-run
/// on failure.
pub fn amalgamate(src_dir: &Path, manifest: &Manifest, out_dir: &Path) -> AmalgResult<AmalgReport> {
	let source_path = out_dir.join(&manifest.output.source);
	let mut out = BufWriter::new(File::create(&source_path)?);
	let source = run_pass(src_dir, &manifest.sources, &mut out, manifest.max_includes)?;
	out.flush()?;

	let header_path = out_dir.join(&manifest.output.header);
	let mut out = BufWriter::new(File::create(&header_path)?);
	let header = run_pass(
		src_dir,
		std::slice::from_ref(&manifest.root_header),
		&mut out,
		manifest.max_includes,
	)?;
	out.flush()?;

	Ok(AmalgReport {
		source,
		header,
		source_path,
		header_path,
	})
}
