use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardTreeError {
    #[error("Duplicate address in reward list: {0}")]
    DuplicateAddress(String),

    #[error("Proof index {index} out of range for {leaf_count} leaves")]
    ProofIndexOutOfRange { index: usize, leaf_count: usize },

    #[error("Sibling not found at level {level}")]
    SiblingNotFound { level: usize },

    #[error("Expected non-empty reward list")]
    EmptyRewardList,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Merkle tree nodes must be 32 bytes")]
    InvalidNodeLength,

    #[error("Hex decode error: {0}")]
    HexDecode(String),
}

pub type Result<T> = std::result::Result<T, RewardTreeError>;
