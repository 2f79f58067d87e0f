use crate::bytes::{Bytes32, HexString, bytes32_to_hex, bytes_to_hex};
use crate::error::{Result, RewardTreeError};
use crate::hashes::{leaf_hash, pair_hash};
use crate::proof::RewardProof;
use crate::reward::RewardEntry;
use alloy_primitives::U512;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The root commitment together with the distribution's total weight, the
/// pair a payout contract is seeded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootAndTotalWeight {
    pub root: HexString,
    pub total_weight: String,
}

/// Binary Merkle tree over a reward distribution.
///
/// Built eagerly from an ordered reward list and immutable afterwards: every
/// query and proof is a read-only projection, so a built tree can be shared
/// across threads freely.
///
/// An odd input list is padded with one synthetic zero entry so level 0 is
/// always even; each derived level that comes out odd has its last node
/// duplicated before the next round of pairing. The padding entry is hashed
/// and proven like any other leaf but never contributes to the total weight.
#[derive(Debug, Clone)]
pub struct RewardMerkleTree {
    encoded_leaves: Vec<Vec<u8>>,
    levels: Vec<Vec<Bytes32>>,
    total_weight: U512,
}

impl RewardMerkleTree {
    /// Builds the tree, rejecting duplicate addresses before any hash is
    /// computed. The caller's slice is never mutated; padding happens on an
    /// internal copy.
    pub fn new(rewards: &[RewardEntry]) -> Result<Self> {
        if rewards.is_empty() {
            return Err(RewardTreeError::EmptyRewardList);
        }

        let mut seen = HashSet::with_capacity(rewards.len());
        for entry in rewards {
            if !seen.insert(entry.address) {
                return Err(RewardTreeError::DuplicateAddress(entry.address.to_string()));
            }
        }

        // Sum in 512 bits: uint256 weights cannot overflow this for any
        // feasible entry count.
        let mut total_weight = U512::ZERO;
        for entry in rewards {
            total_weight += U512::from(entry.weight);
        }

        let mut padded = rewards.to_vec();
        if padded.len() % 2 == 1 {
            padded.push(RewardEntry::padding());
        }

        let encoded_leaves: Vec<Vec<u8>> = padded.iter().map(RewardEntry::encode).collect();
        let leaf_hashes: Vec<Bytes32> = encoded_leaves.iter().map(|l| leaf_hash(l)).collect();
        let levels = build_levels(leaf_hashes);

        Ok(Self {
            encoded_leaves,
            levels,
            total_weight,
        })
    }

    pub fn root(&self) -> HexString {
        bytes32_to_hex(&self.root_bytes())
    }

    /// Sum of the original (pre-padding) weights as a decimal string.
    pub fn total_weight(&self) -> String {
        self.total_weight.to_string()
    }

    pub fn root_and_total_weight(&self) -> RootAndTotalWeight {
        RootAndTotalWeight {
            root: self.root(),
            total_weight: self.total_weight(),
        }
    }

    /// Number of leaves after padding.
    pub fn leaf_count(&self) -> usize {
        self.encoded_leaves.len()
    }

    /// ABI-encoded leaf data, post-padding, in leaf order.
    pub fn encoded_leaves(&self) -> &[Vec<u8>] {
        &self.encoded_leaves
    }

    pub fn leaf_hashes(&self) -> Vec<HexString> {
        self.levels[0].iter().map(bytes32_to_hex).collect()
    }

    /// Every level of the tree, leaves first, root last.
    pub fn levels(&self) -> Vec<Vec<HexString>> {
        self.levels
            .iter()
            .map(|level| level.iter().map(bytes32_to_hex).collect())
            .collect()
    }

    /// Inclusion proof for the leaf at `index`.
    ///
    /// The walk carries the node's position at every level: the sibling sits
    /// at `position ^ 1` and the parent at `position / 2`, so duplicated
    /// nodes in a padded level can never divert the path.
    pub fn proof(&self, index: usize) -> Result<RewardProof> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(RewardTreeError::ProofIndexOutOfRange { index, leaf_count });
        }

        let mut position = index;
        let mut current = self.levels[0][index];
        let mut siblings = Vec::with_capacity(self.levels.len().saturating_sub(1));

        for (depth, level) in self.levels.iter().enumerate() {
            if level.len() == 1 {
                break;
            }
            let sibling = *level
                .get(position ^ 1)
                .ok_or(RewardTreeError::SiblingNotFound { level: depth })?;
            siblings.push(sibling);
            current = pair_hash(&current, &sibling);
            position /= 2;
        }
        debug_assert_eq!(current, self.root_bytes());

        Ok(RewardProof {
            leaf_data: bytes_to_hex(&self.encoded_leaves[index]),
            leaf_hash: bytes32_to_hex(&self.levels[0][index]),
            siblings: siblings.iter().map(bytes32_to_hex).collect(),
            root: self.root(),
        })
    }

    /// One proof per (padded) leaf, in ascending leaf order.
    pub fn all_proofs(&self) -> Result<Vec<RewardProof>> {
        (0..self.leaf_count()).map(|i| self.proof(i)).collect()
    }

    fn root_bytes(&self) -> Bytes32 {
        self.levels[self.levels.len() - 1][0]
    }
}

/// Builds all levels bottom-up from an even number of leaf hashes.
///
/// Pairing only consumes full pairs: `chunks_exact(2)` drops an odd trailing
/// node rather than promoting it. A derived level that comes out odd (and is
/// not the root) gets its last node duplicated before being stored, so the
/// next round always pairs cleanly.
fn build_levels(leaf_hashes: Vec<Bytes32>) -> Vec<Vec<Bytes32>> {
    let mut levels = Vec::new();
    let mut current = leaf_hashes;

    loop {
        let done = current.len() == 1;
        levels.push(current.clone());
        if done {
            return levels;
        }

        let mut next: Vec<Bytes32> = current
            .chunks_exact(2)
            .map(|pair| pair_hash(&pair[0], &pair[1]))
            .collect();
        if next.len() % 2 == 1 && next.len() > 1 {
            let last = next[next.len() - 1];
            next.push(last);
        }
        current = next;
    }
}
