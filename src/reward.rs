use crate::error::{Result, RewardTreeError};
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

/// One line of a reward distribution: who gets paid, and their weight.
///
/// Entries are validated at construction and immutable afterwards; the weight
/// is a non-negative decimal integer that must fit in a `uint256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEntry {
    pub address: Address,
    pub weight: U256,
}

impl RewardEntry {
    pub fn new(address: &str, weight: &str) -> Result<Self> {
        let address: Address = address
            .parse()
            .map_err(|e| RewardTreeError::InvalidAddress(format!("{address}: {e}")))?;
        let weight = parse_weight(weight)?;
        Ok(Self { address, weight })
    }

    /// The synthetic zero entry appended when a reward list has odd length.
    #[must_use]
    pub fn padding() -> Self {
        Self {
            address: Address::ZERO,
            weight: U256::ZERO,
        }
    }

    /// Static ABI encoding of the `(uint256, address)` pair, weight first —
    /// 64 bytes, the same layout the distribution contract hashes on-chain.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(64);
        encoded.extend(self.weight.abi_encode());
        encoded.extend(self.address.abi_encode());
        encoded
    }
}

fn parse_weight(s: &str) -> Result<U256> {
    let s = s.trim();
    U256::from_str_radix(s, 10).map_err(|e| RewardTreeError::InvalidWeight(format!("{s}: {e}")))
}
