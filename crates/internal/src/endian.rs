//! Endianness utility functions for little-endian limb encodings

/// Convert a u64 from little-endian byte order to native byte order
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Load `N` little-endian 64-bit limbs from `8 * N` bytes
pub fn limbs_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    let mut limbs = [0u64; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = u64_from_le_bytes(&bytes[i * 8..i * 8 + 8]);
    }
    limbs
}

/// Store 64-bit limbs as little-endian bytes into `out`
pub fn limbs_to_le_bytes(limbs: &[u64], out: &mut [u8]) {
    for (i, limb) in limbs.iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
    }
}
