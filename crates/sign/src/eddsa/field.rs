//! Field arithmetic modulo q = 2^255 - 19
//!
//! Elements are kept fully reduced in `[0, q)` as four little-endian 64-bit
//! limbs. Multiplication folds the high half of the 512-bit product back in
//! using 2^256 = 38 (mod q).

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::constants::{Q, Q_MINUS_2};
use super::limb::{adc, add_mod, mac, mul_wide, sub_if_ge, sub_mod};
use shredsig_internal::endian::{limbs_from_le_bytes, limbs_to_le_bytes};

/// Field element representing a value modulo q = 2^255 - 19
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 4]);

impl FieldElement {
    /// Zero element
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0]);

    /// One element
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0]);

    /// Embed a small integer
    pub fn from_u64(n: u64) -> Self {
        FieldElement([n, 0, 0, 0])
    }

    /// Create a field element from 32 little-endian bytes, reducing mod q
    ///
    /// All 256 bits are read; callers decoding a point clear bit 255 first.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let limbs: [u64; 4] = limbs_from_le_bytes(bytes);
        // Any 256-bit value is below 2q + 38, so two subtractions suffice.
        FieldElement(sub_if_ge(&sub_if_ge(&limbs, &Q), &Q))
    }

    /// Canonical little-endian encoding
    pub fn to_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        limbs_to_le_bytes(&self.0, &mut out);
        out
    }

    /// Low bit of the canonical representative
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Add two field elements
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        FieldElement(add_mod(&self.0, &other.0, &Q))
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        FieldElement(sub_mod(&self.0, &other.0, &Q))
    }

    /// Additive inverse
    pub fn neg(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// Multiply two field elements
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        reduce_wide(&mul_wide(&self.0, &other.0))
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Modular exponentiation `self^exponent mod q`
    ///
    /// Square-and-multiply over all 256 exponent bits, most significant
    /// first. The product is always computed and kept by conditional
    /// selection, so the running time does not depend on the exponent.
    /// An exponent of zero yields one.
    pub fn pow(&self, exponent: &[u64; 4]) -> FieldElement {
        let mut result = FieldElement::ONE;
        for i in (0..256).rev() {
            result = result.square();
            let product = result.mul(self);
            let bit = Choice::from(((exponent[i / 64] >> (i % 64)) & 1) as u8);
            result = FieldElement::conditional_select(&result, &product, bit);
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem, `self^(q-2)`
    ///
    /// Zero has no inverse; it maps to zero.
    pub fn invert(&self) -> FieldElement {
        self.pow(&Q_MINUS_2)
    }
}

/// Reduce a 512-bit product modulo q
fn reduce_wide(t: &[u64; 8]) -> FieldElement {
    // lo + 2^256 * hi == lo + 38 * hi (mod q)
    let mut r = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (v, c) = mac(t[i], t[i + 4], 38, carry);
        r[i] = v;
        carry = c;
    }

    // Fold the (< 40) overflow limb the same way.
    let (v, mut c) = mac(r[0], carry, 38, 0);
    r[0] = v;
    for limb in r.iter_mut().skip(1) {
        let (v, cc) = adc(*limb, 0, c);
        *limb = v;
        c = cc;
    }
    // A second wrap only happens when r is already tiny.
    r[0] = r[0].wrapping_add(38 * c);

    FieldElement(sub_if_ge(&sub_if_ge(&r, &Q), &Q))
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(limbs)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
