//! # reward-merkle
//!
//! Binary Merkle tree over a reward distribution list, producing the tree
//! root, the total distributed weight, and per-entry inclusion proofs.
//!
//! Leaves are the keccak256 hashes of ABI-encoded `(uint256 weight, address)`
//! pairs. Parents use a commutative pair hash (smaller digest first), so a
//! verifier can rebuild the root from a leaf and its sibling path without
//! direction bits. Odd lists are padded with a single zero entry, and odd
//! intermediate levels are re-evened by duplicating their last node.
//!
//! ## Example
//!
//! ```rust
//! use reward_merkle::{RewardEntry, RewardMerkleTree};
//!
//! let rewards = vec![
//!     RewardEntry::new("0xE9bf7285894bB90D155FD707c69032ab6191cAe2", "100").unwrap(),
//!     RewardEntry::new("0xd1cD2a1d539f044A5ddf03cC197013BE1C43283B", "300").unwrap(),
//!     RewardEntry::new("0xd7B2243E279FD948BD7E0f3D22138e5BAD0f34dE", "600").unwrap(),
//! ];
//!
//! let tree = RewardMerkleTree::new(&rewards).unwrap();
//! assert_eq!(tree.total_weight(), "1000");
//!
//! let proof = tree.proof(0).unwrap();
//! assert!(proof.verify().unwrap());
//! assert_eq!(proof.root, tree.root());
//! ```

#![deny(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bytes;
pub mod error;
pub mod hashes;
pub mod proof;
pub mod reward;
pub mod tree;

pub use bytes::{Bytes32, HexString};
pub use error::{Result, RewardTreeError};
pub use hashes::{keccak256, leaf_hash, pair_hash};
pub use proof::{RewardProof, verify_proof};
pub use reward::RewardEntry;
pub use tree::{RewardMerkleTree, RootAndTotalWeight};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rewards() -> Vec<RewardEntry> {
        vec![
            RewardEntry::new("0xE9bf7285894bB90D155FD707c69032ab6191cAe2", "100").unwrap(),
            RewardEntry::new("0xd1cD2a1d539f044A5ddf03cC197013BE1C43283B", "300").unwrap(),
            RewardEntry::new("0xd7B2243E279FD948BD7E0f3D22138e5BAD0f34dE", "600").unwrap(),
        ]
    }

    #[test]
    fn test_odd_list_padded_and_all_proofs_verify() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();

        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.total_weight(), "1000");

        let proofs = tree.all_proofs().unwrap();
        assert_eq!(proofs.len(), 4);
        for proof in &proofs {
            assert!(proof.verify().unwrap());
            assert_eq!(proof.root, tree.root());
        }
    }

    #[test]
    fn test_single_entry_edge_case() {
        let rewards =
            vec![RewardEntry::new("0xE9bf7285894bB90D155FD707c69032ab6191cAe2", "42").unwrap()];
        let tree = RewardMerkleTree::new(&rewards).unwrap();

        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.levels().len(), 2);
        assert_eq!(tree.total_weight(), "42");

        let proof = tree.proof(0).unwrap();
        assert_eq!(proof.siblings.len(), 1);
        assert!(proof.verify().unwrap());
    }

    #[test]
    fn test_padding_entry_excluded_from_total() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();
        // leaf 3 is the synthetic zero entry
        let padding_proof = tree.proof(3).unwrap();
        assert_eq!(padding_proof.leaf_data, format!("0x{}", "00".repeat(64)));
        assert!(padding_proof.verify().unwrap());
        assert_eq!(tree.total_weight(), "1000");
    }

    #[test]
    fn test_proof_soundness_via_standalone_verifier() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();
        let root = tree.root();
        for proof in tree.all_proofs().unwrap() {
            assert!(verify_proof(&proof.leaf_hash, &proof.siblings, &root).unwrap());
        }
    }

    #[test]
    fn test_tampered_proof_fails() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();
        let mut proof = tree.proof(1).unwrap();
        proof.siblings[0] = tree.proof(0).unwrap().leaf_hash;
        // swapping in the wrong sibling must break verification
        assert!(!proof.verify().unwrap());
    }

    #[test]
    fn test_root_and_total_weight_projection() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();
        let combined = tree.root_and_total_weight();
        assert_eq!(combined.root, tree.root());
        assert_eq!(combined.total_weight, "1000");
    }

    #[test]
    fn test_proof_serde_roundtrip() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();
        let proof = tree.proof(2).unwrap();

        let json = serde_json::to_string(&proof).unwrap();
        assert!(json.contains("\"leafData\""));
        assert!(json.contains("\"leafHash\""));

        let loaded: RewardProof = serde_json::from_str(&json).unwrap();
        assert_eq!(proof, loaded);
        assert!(loaded.verify().unwrap());
    }

    #[test]
    fn test_duplicate_address_fails_construction() {
        let mut rewards = sample_rewards();
        rewards.push(
            RewardEntry::new("0xE9bf7285894bB90D155FD707c69032ab6191cAe2", "1").unwrap(),
        );
        assert!(matches!(
            RewardMerkleTree::new(&rewards),
            Err(RewardTreeError::DuplicateAddress(_))
        ));
    }

    #[test]
    fn test_levels_and_leaf_hashes_consistent() {
        let tree = RewardMerkleTree::new(&sample_rewards()).unwrap();
        let levels = tree.levels();
        assert_eq!(levels[0], tree.leaf_hashes());
        assert_eq!(levels[levels.len() - 1], vec![tree.root()]);
    }
}
