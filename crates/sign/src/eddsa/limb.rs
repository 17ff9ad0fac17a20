//! Fixed-width multi-limb integer helpers
//!
//! Integers are little-endian arrays of 64-bit limbs. All helpers run in
//! time independent of the limb values.

use shredsig_internal::constant_time::{ct_mask_u64, ct_select_limbs};
use subtle::Choice;

/// Add with carry: returns (a + b + carry mod 2^64, carry out)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Subtract with borrow: returns (a - b - borrow mod 2^64, borrow out)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// Multiply-accumulate: returns (acc + a * b + carry mod 2^64, carry out)
#[inline(always)]
pub(crate) const fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (acc as u128) + (a as u128) * (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Full 256 x 256 -> 512-bit schoolbook product
pub(crate) fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut t = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (v, c) = mac(t[i + j], a[i], b[j], carry);
            t[i + j] = v;
            carry = c;
        }
        t[i + 4] = carry;
    }
    t
}

/// Returns `a - m` if `a >= m`, else `a`
pub(crate) fn sub_if_ge(a: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let mut diff = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (v, b) = sbb(a[i], m[i], borrow);
        diff[i] = v;
        borrow = b;
    }
    // borrow == 0 means a >= m
    ct_select_limbs(a, &diff, Choice::from((borrow ^ 1) as u8))
}

/// Modular subtraction for `a, b < m`
pub(crate) fn sub_mod(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let mut diff = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (v, b) = sbb(a[i], b[i], borrow);
        diff[i] = v;
        borrow = b;
    }
    // On underflow add the modulus back; the final carry cancels the wrap.
    let mask = ct_mask_u64(borrow);
    let mut carry = 0u64;
    for i in 0..4 {
        let (v, c) = adc(diff[i], m[i] & mask, carry);
        diff[i] = v;
        carry = c;
    }
    diff
}

/// Modular addition for `a, b < m < 2^255`
pub(crate) fn add_mod(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let mut sum = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (v, c) = adc(a[i], b[i], carry);
        sum[i] = v;
        carry = c;
    }
    sub_if_ge(&sum, m)
}
