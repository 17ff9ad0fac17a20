//! Scalar arithmetic modulo l = 2^252 + 27742317777372353535851937790883648493
//!
//! A [`Scalar`] holds a 256-bit little-endian integer. Scalars produced by
//! reduction are in `[0, l)`; the clamped private scalar is deliberately left
//! unreduced, since key derivation multiplies the base point by the clamped
//! integer itself.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::constants::L;
use super::limb::{adc, mul_wide, sub_if_ge};
use shredsig_internal::endian::{limbs_from_le_bytes, limbs_to_le_bytes};

/// 256-bit scalar, little-endian
///
/// May hold the private scalar, so it is wiped on drop, compares in constant
/// time and never prints its value.
#[derive(Clone, Zeroize)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar").finish_non_exhaustive()
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Scalar {
    /// Create scalar from bytes (little-endian), without reduction
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Scalar { bytes: *bytes }
    }

    /// Reduce a 512-bit little-endian integer modulo l
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        let wide: [u64; 8] = limbs_from_le_bytes(bytes);
        Self::from_limbs(&reduce_wide(&wide))
    }

    /// Little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Borrow the little-endian encoding
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// This scalar reduced modulo l
    pub fn reduce(&self) -> Scalar {
        let mut wide = [0u64; 8];
        wide[..4].copy_from_slice(&self.limbs());
        Self::from_limbs(&reduce_wide(&wide))
    }

    /// Returns `(a * b + c) mod l`
    ///
    /// Inputs may be any 256-bit integers; the full 512-bit value is formed
    /// before the single reduction.
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        let mut wide = mul_wide(&a.limbs(), &b.limbs());
        let c = c.limbs();

        // a * b <= (2^256 - 1)^2, so adding c < 2^256 cannot overflow 512 bits
        let mut carry = 0u64;
        for (i, limb) in wide.iter_mut().enumerate() {
            let addend = if i < 4 { c[i] } else { 0 };
            let (v, cc) = adc(*limb, addend, carry);
            *limb = v;
            carry = cc;
        }

        Self::from_limbs(&reduce_wide(&wide))
    }

    fn limbs(&self) -> [u64; 4] {
        limbs_from_le_bytes(&self.bytes)
    }

    fn from_limbs(limbs: &[u64; 4]) -> Scalar {
        let mut bytes = [0u8; 32];
        limbs_to_le_bytes(limbs, &mut bytes);
        Scalar { bytes }
    }
}

/// Reduce a 512-bit integer modulo l
///
/// Binary long division, one bit per step from the top. The remainder stays
/// below l < 2^253, so doubling it never leaves four limbs.
fn reduce_wide(wide: &[u64; 8]) -> [u64; 4] {
    let mut r = [0u64; 4];
    for i in (0..512).rev() {
        let bit = (wide[i / 64] >> (i % 64)) & 1;
        r[3] = (r[3] << 1) | (r[2] >> 63);
        r[2] = (r[2] << 1) | (r[1] >> 63);
        r[1] = (r[1] << 1) | (r[0] >> 63);
        r[0] = (r[0] << 1) | bit;
        r = sub_if_ge(&r, &L);
    }
    r
}
