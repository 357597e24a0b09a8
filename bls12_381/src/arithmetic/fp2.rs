//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.

use super::{
    CurveField,
    field::{FIELD_BYTES, Fp, sqrt_ratio_with},
    sign::{LexicographicSign, Sgn0},
};
use core::fmt::{self, Debug, Formatter};
use elliptic_curve::{
    ff::Field,
    rand_core::RngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

/// `(p - 3) / 4` as little-endian limbs.
const P_MINUS_3_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// `(p - 1) / 2` as little-endian limbs.
const P_MINUS_1_DIV_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// `1 + u`, a fixed non-square of `Fp2`.
const NON_SQUARE: Fp2 = Fp2::new(Fp::ONE, Fp::ONE);

/// Element `c0 + c1 * u` of the quadratic extension field.
#[derive(Clone, Copy, Default)]
pub struct Fp2 {
    /// Constant component.
    pub c0: Fp,
    /// Coefficient of `u`.
    pub c1: Fp,
}

impl Fp2 {
    /// Zero element.
    pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    /// Create an element from its two components.
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Embed a base field element.
    pub const fn from_fp(c0: Fp) -> Self {
        Self::new(c0, Fp::ZERO)
    }

    /// Decode from the 96-byte encoding `c1 ‖ c0`, each component big-endian.
    ///
    /// Returns `None` if either component is not fully reduced.
    pub fn from_bytes(bytes: &[u8; 2 * FIELD_BYTES]) -> CtOption<Self> {
        let (hi, lo) = bytes.split_at(FIELD_BYTES);
        Fp::from_be_slice(lo).and_then(|c0| Fp::from_be_slice(hi).map(|c1| Self::new(c0, c1)))
    }

    /// Encode as `c1 ‖ c0`, each component big-endian.
    pub fn to_bytes(&self) -> [u8; 2 * FIELD_BYTES] {
        let mut bytes = [0u8; 2 * FIELD_BYTES];
        bytes[..FIELD_BYTES].copy_from_slice(&self.c1.to_bytes());
        bytes[FIELD_BYTES..].copy_from_slice(&self.c0.to_bytes());
        bytes
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Returns `self + rhs`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::new(Fp::add(&self.c0, &rhs.c0), Fp::add(&self.c1, &rhs.c1))
    }

    /// Returns `self - rhs`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::new(Fp::sub(&self.c0, &rhs.c0), Fp::sub(&self.c1, &rhs.c1))
    }

    /// Returns `self * rhs` (Karatsuba).
    pub const fn mul(&self, rhs: &Self) -> Self {
        let v0 = Fp::mul(&self.c0, &rhs.c0);
        let v1 = Fp::mul(&self.c1, &rhs.c1);
        let cross = Fp::mul(&Fp::add(&self.c0, &self.c1), &Fp::add(&rhs.c0, &rhs.c1));
        Self::new(Fp::sub(&v0, &v1), Fp::sub(&Fp::sub(&cross, &v0), &v1))
    }

    /// Returns `-self`.
    pub const fn neg(&self) -> Self {
        Self::new(Fp::neg(&self.c0), Fp::neg(&self.c1))
    }

    /// Returns `self * self`.
    pub const fn square(&self) -> Self {
        // (c0 + c1 u)^2 = (c0 + c1)(c0 - c1) + 2 c0 c1 u
        let a = Fp::add(&self.c0, &self.c1);
        let b = Fp::sub(&self.c0, &self.c1);
        let c = Fp::double(&self.c0);
        Self::new(Fp::mul(&a, &b), Fp::mul(&c, &self.c1))
    }

    /// Returns `self + self`.
    pub const fn double(&self) -> Self {
        Self::add(self, self)
    }

    /// Returns `c0 - c1 * u`, the image of the Frobenius endomorphism.
    pub const fn conjugate(&self) -> Self {
        Self::new(self.c0, Fp::neg(&self.c1))
    }

    /// Returns `c0^2 + c1^2`, the norm down to `Fp`.
    pub const fn norm(&self) -> Fp {
        Fp::add(&Fp::square(&self.c0), &Fp::square(&self.c1))
    }

    /// Multiply both components by a base field element.
    pub const fn mul_by_fp(&self, rhs: &Fp) -> Self {
        Self::new(Fp::mul(&self.c0, rhs), Fp::mul(&self.c1, rhs))
    }

    /// Compute the multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        // (c0 + c1 u)^-1 = (c0 - c1 u) / (c0^2 + c1^2)
        self.norm().invert().map(|t| self.conjugate().mul_by_fp(&t))
    }

    /// Compute a square root, or `None` if this element is not a square.
    ///
    /// Algorithm 9 of <https://eprint.iacr.org/2012/685.pdf>.
    pub fn sqrt(&self) -> CtOption<Self> {
        // a1 = self^((p - 3) / 4)
        let a1 = self.pow_vartime(P_MINUS_3_DIV_4);
        // alpha = a1^2 * self = self^((p - 1) / 2)
        let alpha = a1.square() * self;
        // x0 = self^((p + 1) / 4)
        let x0 = a1 * self;

        // alpha = -1 means self lies in Fp and is a non-square there, so the
        // root is x0 * u.
        let via_u = Self::new(-x0.c1, x0.c0);
        let via_alpha = (alpha + Self::ONE).pow_vartime(P_MINUS_1_DIV_2) * x0;
        let root = Self::conditional_select(&via_alpha, &via_u, alpha.ct_eq(&-Self::ONE));

        CtOption::new(root, root.square().ct_eq(self))
    }

    /// Is this element a square (zero included)?
    ///
    /// An element of `Fp2` is a square exactly when its norm is a square in `Fp`.
    pub fn is_square(&self) -> Choice {
        self.norm().is_square()
    }
}

impl_field_ops!(Fp2);

impl Field for Fp2 {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        Self::new(Fp::random(&mut rng), Fp::random(&mut rng))
    }

    fn is_zero(&self) -> Choice {
        Self::is_zero(self)
    }

    fn square(&self) -> Self {
        Self::square(self)
    }

    fn double(&self) -> Self {
        Self::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Self::invert(self)
    }

    fn sqrt(&self) -> CtOption<Self> {
        Self::sqrt(self)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        sqrt_ratio_with(num, div, &NON_SQUARE)
    }
}

impl CurveField for Fp2 {
    const ENCODED_SIZE: usize = 2 * FIELD_BYTES;

    fn is_square(&self) -> Choice {
        Self::is_square(self)
    }

    fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
        match <&[u8; 2 * FIELD_BYTES]>::try_from(bytes) {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(_) => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    fn write_be_slice(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }
}

impl LexicographicSign for Fp2 {
    fn is_lexicographically_largest(&self) -> Choice {
        // c1 decides unless it is zero, in which case c0 does.
        self.c1.is_lexicographically_largest()
            | (self.c1.is_zero() & self.c0.is_lexicographically_largest())
    }
}

impl Sgn0 for Fp2 {
    fn sgn0(&self) -> Choice {
        let sign_0 = self.c0.sgn0();
        let zero_0 = self.c0.is_zero();
        let sign_1 = self.c1.sgn0();
        sign_0 | (zero_0 & sign_1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp::conditional_select(&a.c0, &b.c0, choice),
            Fp::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl PartialEq for Fp2 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp2 {}

impl DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(c0: Fp) -> Self {
        Self::from_fp(c0)
    }
}

impl From<u64> for Fp2 {
    fn from(w: u64) -> Self {
        Self::from_fp(Fp::from_u64(w))
    }
}

impl Debug for Fp2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2(0x{:x} + 0x{:x} * u)", self.c0, self.c1)
    }
}
