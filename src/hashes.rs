use crate::bytes::{Bytes32, concat_sorted};
use sha3::{Digest, Keccak256};

#[must_use]
pub fn keccak256(data: &[u8]) -> Bytes32 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash of one encoded reward entry. Leaves are hashed once, matching the
/// reference distribution contract.
#[must_use]
pub fn leaf_hash(encoded: &[u8]) -> Bytes32 {
    keccak256(encoded)
}

/// Canonical pair hash: the numerically smaller digest is placed first, so
/// `pair_hash(a, b) == pair_hash(b, a)` and verifiers need no direction bits.
#[must_use]
pub fn pair_hash(a: &Bytes32, b: &Bytes32) -> Bytes32 {
    let concatenated = concat_sorted(a, b);
    keccak256(&concatenated)
}
