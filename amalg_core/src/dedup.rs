use std::collections::HashSet;

use crate::AmalgError;
use crate::AmalgResult;
use crate::fingerprint::fnv1a_64;

/// Default cap on distinct include identifiers per output pass.
pub const DEFAULT_MAX_INCLUDES: usize = 1000;

/// Per-pass record of which include identifiers have already been spliced
/// into the output stream, keyed by the FNV-1a fingerprint of the literal
/// identifier text.
///
/// One instance is created per output pass and passed `&mut` down the
/// recursive traversal. The set only grows: there is no removal, and
/// `record` is idempotent. Exceeding the configured limit is treated as an
/// include-graph explosion and fails loudly rather than truncating.
///
/// Deduplication is purely textual — two different spellings of the same
/// physical file (`"a.c"` vs `"./a.c"`) produce different fingerprints and
/// are both spliced.
#[derive(Debug)]
pub struct DedupSet {
	fingerprints: HashSet<u64>,
	limit: usize,
}

impl DedupSet {
	/// Create an empty set with the default include cap.
	pub fn new() -> Self {
		Self::with_limit(DEFAULT_MAX_INCLUDES)
	}

	/// Create an empty set that holds at most `limit` distinct identifiers.
	pub fn with_limit(limit: usize) -> Self {
		Self {
			fingerprints: HashSet::new(),
			limit,
		}
	}

	/// Returns true iff `identifier` has already been recorded.
	pub fn seen(&self, identifier: &[u8]) -> bool {
		self.fingerprints.contains(&fnv1a_64(identifier))
	}

	/// Record `identifier`. Idempotent; fails with `CapacityExceeded` when
	/// a new identifier would push the set past its limit.
	pub fn record(&mut self, identifier: &[u8]) -> AmalgResult<()> {
		if self.fingerprints.insert(fnv1a_64(identifier)) && self.fingerprints.len() > self.limit {
			return Err(AmalgError::CapacityExceeded { limit: self.limit });
		}

		Ok(())
	}

	/// Number of distinct identifiers recorded so far.
	pub fn len(&self) -> usize {
		self.fingerprints.len()
	}

	/// Returns true when no identifier has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.fingerprints.is_empty()
	}

	/// The configured cap on distinct identifiers.
	pub fn limit(&self) -> usize {
		self.limit
	}
}

impl Default for DedupSet {
	fn default() -> Self {
		Self::new()
	}
}
