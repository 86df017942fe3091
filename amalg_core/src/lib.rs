//! `amalg_core` is the core library for the [amalg](https://github.com/aeldidi/amalg) amalgamation tool. It merges a multi-file C library into a single-file distribution by recursively inlining quote-style (`"..."`) includes while leaving angle-bracket (`<...>`) system includes untouched.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Manifest (amalg.toml)
//!   → Loader (bulk-reads each file's exact bytes)
//!   → Amalgamator (scans for `#include "` markers, splices targets in place)
//!   → Deduplicator (per-pass FNV-1a fingerprint set, one splice per identifier)
//!   → Output sink (append-only, depth-first left-to-right, byte-faithful)
//! ```
//!
//! Two independent output passes run the pipeline with separate
//! deduplicators: one seeded with the ordered implementation-file list to
//! produce the merged `.c` artifact, one seeded with the root header to
//! produce the merged `.h` artifact.
//!
//! ## Key Types
//!
//! - [`Manifest`] — The amalgamation manifest loaded from `amalg.toml`.
//! - [`DedupSet`] — The per-pass record of already-spliced include identifiers.
//! - [`PassReport`] / [`AmalgReport`] — Summaries of one pass and of a full run.
//! - [`AmalgError`] — Every failure is fatal; there is no partial-output recovery.
//!
//! ## Guarantees
//!
//! Within one pass, the literal text of any include identifier is spliced
//! at most once, at its first occurrence in traversal order; later
//! occurrences are elided entirely. All non-include text is reproduced
//! byte-for-byte, and two runs over an unchanged tree produce
//! byte-identical artifacts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use amalg_core::Manifest;
//! use amalg_core::amalgamate;
//!
//! let src_dir = Path::new("src");
//! let manifest = Manifest::load_required(src_dir).unwrap();
//! let report = amalgamate(src_dir, &manifest, Path::new(".")).unwrap();
//! println!(
//! 	"{} file(s) -> {}",
//! 	report.source.files_spliced(),
//! 	report.source_path.display()
//! );
//! ```

pub use dedup::*;
pub use engine::*;
pub use error::*;
pub use fingerprint::*;
pub use loader::*;
pub use manifest::*;

mod dedup;
mod engine;
mod error;
mod fingerprint;
mod loader;
pub mod manifest;
