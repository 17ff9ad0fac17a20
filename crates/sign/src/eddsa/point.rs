//! Edwards curve point operations for Ed25519
//!
//! Points live on the twisted Edwards curve -x² + y² = 1 + d·x²·y² and are
//! kept in affine coordinates. The addition law is complete, so the same
//! formula serves for doubling and for adding the neutral element (0, 1).

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::constants::{curve, Q_PLUS_3_DIV_8};
use super::field::FieldElement;
use shredsig_api::{Error, Result};
use shredsig_internal::constant_time::ct_bit;

/// Point on the twisted Edwards curve
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Compressed point representation (32 bytes)
///
/// Bits 0..255 hold y little-endian, bit 255 holds the low bit of x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedPoint {
    pub(crate) bytes: [u8; 32],
}

impl EdwardsPoint {
    /// Identity element (0, 1)
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
        }
    }

    /// Base point generator B
    pub fn base_point() -> Self {
        curve().base
    }

    /// Build a point from affine coordinates without checking the curve equation
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Self {
        EdwardsPoint { x, y }
    }

    /// Affine x coordinate
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Affine y coordinate
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Add two points
    ///
    /// x3 = (x1·y2 + x2·y1) / (1 + t), y3 = (y1·y2 + x1·x2) / (1 - t) with
    /// t = d·x1·x2·y1·y2. Both denominators are inverted together through
    /// 1 / (D1·D2); they are nonzero for any pair of curve points.
    pub fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let d = &curve().d;

        let x1x2 = self.x.mul(&other.x);
        let y1y2 = self.y.mul(&other.y);
        let t = d.mul(&x1x2).mul(&y1y2);

        let d1 = FieldElement::ONE.add(&t);
        let d2 = FieldElement::ONE.sub(&t);
        let inv = d1.mul(&d2).invert();

        let x_num = self.x.mul(&other.y).add(&other.x.mul(&self.y));
        let y_num = y1y2.add(&x1x2);

        EdwardsPoint {
            x: x_num.mul(&d2).mul(&inv),
            y: y_num.mul(&d1).mul(&inv),
        }
    }

    /// Double a point
    pub fn double(&self) -> EdwardsPoint {
        self.add(self)
    }

    /// Negate a point, (x, y) -> (-x, y)
    pub fn negate(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y,
        }
    }

    /// Scalar multiplication by a little-endian integer of any byte width
    ///
    /// Double-and-add from the least significant bit. Every bit costs one
    /// addition and one doubling; the sum is kept by conditional selection.
    pub fn scalar_mult(&self, scalar: &[u8]) -> EdwardsPoint {
        let mut result = EdwardsPoint::identity();
        let mut addend = *self;

        for i in 0..scalar.len() * 8 {
            let sum = result.add(&addend);
            result = EdwardsPoint::conditional_select(&result, &sum, ct_bit(scalar, i));
            addend = addend.double();
        }

        result
    }

    /// Evaluate -x² + y² - 1 - d·x²·y² == 0
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let dxxyy = curve().d.mul(&xx).mul(&yy);

        let lhs = yy.sub(&xx).sub(&FieldElement::ONE).sub(&dxxyy);
        lhs.ct_eq(&FieldElement::ZERO).into()
    }

    /// Compress to 32 bytes
    pub fn compress(&self) -> CompressedPoint {
        let mut bytes = self.y.to_bytes();
        bytes[31] |= self.x.is_odd().unwrap_u8() << 7;
        CompressedPoint { bytes }
    }
}

impl CompressedPoint {
    /// Wrap an encoded point
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        CompressedPoint { bytes: *bytes }
    }

    /// Encoded bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Decompress to a curve point
    ///
    /// The recovered point is checked against the curve equation; encodings
    /// whose y has no matching x fail with `PointNotOnCurve`.
    pub fn decompress(&self) -> Result<EdwardsPoint> {
        let sign = Choice::from(self.bytes[31] >> 7);

        let mut y_bytes = self.bytes;
        y_bytes[31] &= 0x7f;
        let y = FieldElement::from_bytes(&y_bytes);

        let mut x = recover_x(&y);
        let flip = x.is_odd() ^ sign;
        x = FieldElement::conditional_select(&x, &x.neg(), flip);

        let point = EdwardsPoint { x, y };
        if !point.is_on_curve() {
            return Err(Error::PointNotOnCurve {
                context: "Ed25519 point decoding",
            });
        }
        Ok(point)
    }
}

/// Recover the even x coordinate belonging to y
///
/// The result is only meaningful when such an x exists; callers check the
/// curve equation afterwards.
pub fn recover_x(y: &FieldElement) -> FieldElement {
    let c = curve();
    recover_x_with(y, &c.d, &c.sqrt_m1)
}

/// x recovery against explicit constants, used while the constants are
/// still being built
pub(crate) fn recover_x_with(
    y: &FieldElement,
    d: &FieldElement,
    sqrt_m1: &FieldElement,
) -> FieldElement {
    let yy = y.square();
    let xx = yy
        .sub(&FieldElement::ONE)
        .mul(&d.mul(&yy).add(&FieldElement::ONE).invert());

    let mut x = xx.pow(&Q_PLUS_3_DIV_8);

    let wrong_root = !x.square().ct_eq(&xx);
    x = FieldElement::conditional_select(&x, &x.mul(sqrt_m1), wrong_root);

    FieldElement::conditional_select(&x, &x.neg(), x.is_odd())
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}
