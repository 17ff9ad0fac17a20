//! Ed25519 sizes, moduli and the lazily computed curve constants

use std::sync::OnceLock;

use super::field::FieldElement;
use super::point::{recover_x_with, EdwardsPoint};

/// Seed (secret key) size in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = 32;

/// Encoded public key size in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Signature size in bytes (encoded R followed by S)
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Field prime q = 2^255 - 19
pub(crate) const Q: [u64; 4] = [
    0xffff_ffff_ffff_ffed,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
];

/// q - 2, the Fermat inversion exponent
pub(crate) const Q_MINUS_2: [u64; 4] = [
    0xffff_ffff_ffff_ffeb,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
];

/// (q - 1) / 4 = 2^253 - 5
pub(crate) const Q_MINUS_1_DIV_4: [u64; 4] = [
    0xffff_ffff_ffff_fffb,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x1fff_ffff_ffff_ffff,
];

/// (q + 3) / 8 = 2^252 - 2
pub(crate) const Q_PLUS_3_DIV_8: [u64; 4] = [
    0xffff_ffff_ffff_fffe,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0fff_ffff_ffff_ffff,
];

/// Group order l = 2^252 + 27742317777372353535851937790883648493
pub(crate) const L: [u64; 4] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];

/// Group order l, little-endian bytes
pub const CURVE_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Curve constants derived from the field once per process
#[derive(Debug)]
pub struct CurveConstants {
    /// d = -121665 / 121666
    pub d: FieldElement,
    /// I = 2^((q-1)/4), a square root of -1
    pub sqrt_m1: FieldElement,
    /// Base point B with y = 4/5 and even x
    pub base: EdwardsPoint,
}

impl CurveConstants {
    fn compute() -> Self {
        let d = FieldElement::from_u64(121665)
            .neg()
            .mul(&FieldElement::from_u64(121666).invert());
        let sqrt_m1 = FieldElement::from_u64(2).pow(&Q_MINUS_1_DIV_4);

        let base_y = FieldElement::from_u64(4).mul(&FieldElement::from_u64(5).invert());
        let base_x = recover_x_with(&base_y, &d, &sqrt_m1);

        CurveConstants {
            d,
            sqrt_m1,
            base: EdwardsPoint::from_affine(base_x, base_y),
        }
    }
}

static CURVE: OnceLock<CurveConstants> = OnceLock::new();

/// Returns the process-wide curve constants, computing them on first use
pub fn curve() -> &'static CurveConstants {
    CURVE.get_or_init(CurveConstants::compute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shredsig_internal::endian::limbs_from_le_bytes;

    #[test]
    fn test_order_bytes_match_limbs() {
        let limbs: [u64; 4] = limbs_from_le_bytes(&CURVE_ORDER);
        assert_eq!(limbs, L);
    }

    #[test]
    fn test_d_definition() {
        // d * 121666 + 121665 == 0
        let c = curve();
        let lhs = c
            .d
            .mul(&FieldElement::from_u64(121666))
            .add(&FieldElement::from_u64(121665));
        assert_eq!(lhs, FieldElement::ZERO);
    }

    #[test]
    fn test_sqrt_m1_squares_to_minus_one() {
        let c = curve();
        assert_eq!(c.sqrt_m1.square(), FieldElement::ONE.neg());
    }

    #[test]
    fn test_base_point_encoding() {
        // RFC 8032: B encodes as 0x58 followed by 31 bytes of 0x66
        let mut expected = [0x66u8; 32];
        expected[0] = 0x58;
        let c = curve();
        assert_eq!(c.base.compress().to_bytes(), expected);
        assert!(c.base.is_on_curve());
        assert_eq!(c.base.x().is_odd().unwrap_u8(), 0);
    }

    #[test]
    fn test_curve_constants_are_shared() {
        let first = curve() as *const CurveConstants;
        let second = curve() as *const CurveConstants;
        assert_eq!(first, second);
    }
}
