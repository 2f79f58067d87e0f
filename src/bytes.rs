use crate::error::{Result, RewardTreeError};
use std::cmp::Ordering;

pub type Bytes32 = [u8; 32];
pub type HexString = String;

pub fn hex_to_bytes32(s: &str) -> Result<Bytes32> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| RewardTreeError::HexDecode(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(RewardTreeError::InvalidNodeLength);
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

#[must_use]
pub fn bytes32_to_hex(bytes: &Bytes32) -> HexString {
    format!("0x{}", hex::encode(bytes))
}

#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> HexString {
    format!("0x{}", hex::encode(bytes))
}

/// Byte-wise comparison, equivalent to comparing the digests as unsigned
/// big-endian 256-bit integers.
#[must_use]
pub fn compare_bytes32(a: &Bytes32, b: &Bytes32) -> Ordering {
    for i in 0..32 {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[must_use]
pub fn concat_sorted(a: &Bytes32, b: &Bytes32) -> Vec<u8> {
    let mut result = Vec::with_capacity(64);
    if compare_bytes32(a, b) == Ordering::Less {
        result.extend_from_slice(a);
        result.extend_from_slice(b);
    } else {
        result.extend_from_slice(b);
        result.extend_from_slice(a);
    }
    result
}
