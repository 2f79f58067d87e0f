use crate::bytes::{Bytes32, HexString, hex_to_bytes32};
use crate::error::Result;
use crate::hashes::pair_hash;
use serde::{Deserialize, Serialize};

/// Inclusion proof for one (possibly padded) reward entry.
///
/// `siblings` runs bottom to top; because the pair hash is commutative, no
/// left/right direction bits are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardProof {
    pub leaf_data: HexString,
    pub leaf_hash: HexString,
    pub siblings: Vec<HexString>,
    pub root: HexString,
}

impl RewardProof {
    /// Recombines `leaf_hash` with `siblings` and checks the result against
    /// `root`. Fails on malformed hex, returns `Ok(false)` on a mismatch.
    pub fn verify(&self) -> Result<bool> {
        verify_proof(&self.leaf_hash, &self.siblings, &self.root)
    }
}

/// Folds a sibling path into the root it commits to.
#[must_use]
pub fn process_siblings(leaf_hash: Bytes32, siblings: &[Bytes32]) -> Bytes32 {
    siblings
        .iter()
        .fold(leaf_hash, |current, sibling| pair_hash(&current, sibling))
}

pub fn verify_proof(leaf_hash: &str, siblings: &[HexString], root: &str) -> Result<bool> {
    let leaf = hex_to_bytes32(leaf_hash)?;
    let root = hex_to_bytes32(root)?;
    let siblings: Vec<Bytes32> = siblings
        .iter()
        .map(|s| hex_to_bytes32(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(process_siblings(leaf, &siblings) == root)
}
