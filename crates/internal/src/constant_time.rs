//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable};

/// Constant-time selection between two limb arrays
pub fn ct_select_limbs<const N: usize>(a: &[u64; N], b: &[u64; N], condition: Choice) -> [u64; N] {
    let mut result = [0u64; N];
    for i in 0..N {
        result[i] = u64::conditional_select(&a[i], &b[i], condition);
    }
    result
}

/// Extract bit `i` of a little-endian byte string as a `Choice`
pub fn ct_bit(bytes: &[u8], i: usize) -> Choice {
    Choice::from((bytes[i / 8] >> (i % 8)) & 1)
}

/// Constant-time mask generation for a single bit
///
/// Returns an all-1s mask if `bit` is 1, all-0s if it is 0
pub fn ct_mask_u64(bit: u64) -> u64 {
    0u64.wrapping_sub(bit & 1)
}
