//! 64-bit FNV-1a fingerprints for include identifiers.
//!
//! Deduplication keys are fingerprints of the literal identifier text, so
//! the hash must be bit-exact and deterministic across runs and platforms:
//! the fixed initial value, the fixed prime, one XOR-then-multiply step per
//! input byte with 64-bit wraparound, and no finalization step. The
//! identifier universe is small (bounded by the per-pass include cap), so
//! determinism matters more than distribution here.

const FNV_64_INITIAL: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash `bytes` with 64-bit FNV-1a.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
	let mut hash = FNV_64_INITIAL;

	for &byte in bytes {
		hash = (hash ^ u64::from(byte)).wrapping_mul(FNV_64_PRIME);
	}

	hash
}
