//! Field arithmetic modulo p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab
//!
//! Elements are kept in Montgomery form by `crypto-bigint`'s constant-modulus
//! [`Residue`] type.

use super::CurveField;
use crate::arithmetic::sign::{LexicographicSign, Sgn0};
use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use elliptic_curve::{
    bigint::{
        Encoding, U384, impl_modulus,
        modular::constant_mod::{Residue, ResidueParams},
    },
    ff::Field,
    rand_core::RngCore,
    subtle::{
        Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
        CtOption,
    },
    zeroize::DefaultIsZeroes,
};

/// Size of an encoded base field element in bytes.
pub const FIELD_BYTES: usize = 48;

impl_modulus!(
    FpModulus,
    U384,
    "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"
);

pub(crate) type ResidueType = Residue<FpModulus, { FpModulus::LIMBS }>;

/// Field modulus `p`.
const MODULUS: U384 = U384::from_be_hex(
    "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
);

/// `(p - 1) / 2`: elements above this bound are lexicographically largest.
const HALF_MODULUS: U384 = U384::from_be_hex(
    "0d0088f51cbff34d258dd3db21a5d66bb23ba5c279c2895fb39869507b587b120f55ffff58a9ffffdcff7fffffffd555",
);

/// `(p + 1) / 4`, the square root exponent for `p = 3 mod 4`.
const SQRT_EXP: U384 = U384::from_be_hex(
    "0680447a8e5ff9a692c6e9ed90d2eb35d91dd2e13ce144afd9cc34a83dac3d8907aaffffac54ffffee7fbfffffffeaab",
);

/// `2^256 mod p`, used to fold the upper half of a wide input.
const TWO_POW_256: Fp = Fp::from_be_hex(
    "000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000000",
);

/// Element of the BLS12-381 base field.
#[derive(Clone, Copy, Default)]
pub struct Fp(pub(crate) ResidueType);

impl Fp {
    /// Zero element.
    pub const ZERO: Self = Self(ResidueType::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ResidueType::ONE);

    /// Create a field element from a big-endian hex string.
    ///
    /// Intended for constants: the value is reduced modulo `p` and malformed
    /// input fails const evaluation.
    pub const fn from_be_hex(hex: &str) -> Self {
        Self(ResidueType::new(&U384::from_be_hex(hex)))
    }

    /// Create a field element from a `u64`.
    pub const fn from_u64(w: u64) -> Self {
        Self(ResidueType::new(&U384::from_u64(w)))
    }

    /// Decode a field element from its canonical integer value.
    ///
    /// Returns `None` if `uint` is not less than the modulus.
    pub fn from_uint(uint: &U384) -> CtOption<Self> {
        CtOption::new(Self(ResidueType::new(uint)), uint.ct_lt(&MODULUS))
    }

    /// Returns the canonical integer value of this element.
    pub const fn to_uint(&self) -> U384 {
        self.0.retrieve()
    }

    /// Decode a field element from its canonical big-endian encoding.
    ///
    /// Returns `None` if the encoded value is not fully reduced.
    pub fn from_bytes(bytes: &[u8; FIELD_BYTES]) -> CtOption<Self> {
        Self::from_uint(&U384::from_be_bytes(*bytes))
    }

    /// Returns the canonical big-endian encoding of this element.
    pub fn to_bytes(&self) -> [u8; FIELD_BYTES] {
        self.to_uint().to_be_bytes()
    }

    /// Reduce a 64-byte big-endian integer modulo `p`.
    ///
    /// This is the `OS2IP(bytes) mod p` step of `hash_to_field` with `L = 64`.
    pub fn from_wide_bytes(bytes: &[u8; 64]) -> Self {
        let mut hi = [0u8; FIELD_BYTES];
        let mut lo = [0u8; FIELD_BYTES];
        hi[16..].copy_from_slice(&bytes[..32]);
        lo[16..].copy_from_slice(&bytes[32..]);

        let hi = Self(ResidueType::new(&U384::from_be_bytes(hi)));
        let lo = Self(ResidueType::new(&U384::from_be_bytes(lo)));
        hi * TWO_POW_256 + lo
    }

    /// Is this element odd?
    pub fn is_odd(&self) -> Choice {
        (self.to_uint().as_words()[0] as u8 & 1).into()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns `self + rhs`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(ResidueType::add(&self.0, &rhs.0))
    }

    /// Returns `self - rhs`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(ResidueType::sub(&self.0, &rhs.0))
    }

    /// Returns `self * rhs`.
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self(ResidueType::mul(&self.0, &rhs.0))
    }

    /// Returns `-self`.
    pub const fn neg(&self) -> Self {
        Self(ResidueType::neg(&self.0))
    }

    /// Returns `self * self`.
    pub const fn square(&self) -> Self {
        Self(ResidueType::square(&self.0))
    }

    /// Returns `self + self`.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Raise to the power of a 384-bit exponent.
    pub const fn pow(&self, exp: &U384) -> Self {
        Self(ResidueType::pow(&self.0, exp))
    }

    /// Compute the multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (inv, is_some) = self.0.invert();
        CtOption::new(Self(inv), is_some.into())
    }

    /// Compute a square root, or `None` if this element is not a square.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = self.pow(&SQRT_EXP);
        CtOption::new(root, root.square().ct_eq(self))
    }

    /// Is this element a square (zero included)?
    ///
    /// Euler's criterion: `self^((p - 1) / 2)` is one for non-zero squares.
    pub fn is_square(&self) -> Choice {
        self.pow(&HALF_MODULUS).ct_eq(&Self::ONE) | self.is_zero()
    }
}

impl_field_ops!(Fp);

impl Field for Fp {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Self::from_wide_bytes(&bytes)
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

    /// `-1` is a non-square since `p = 3 mod 4`; it is the `G_S` used for
    /// non-square ratios.
    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        sqrt_ratio_with(num, div, &-Self::ONE)
    }
}

impl CurveField for Fp {
    const ENCODED_SIZE: usize = FIELD_BYTES;

    fn is_square(&self) -> Choice {
        Self::is_square(self)
    }

    fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
        match <&[u8; FIELD_BYTES]>::try_from(bytes) {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(_) => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    fn write_be_slice(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }
}

impl LexicographicSign for Fp {
    fn is_lexicographically_largest(&self) -> Choice {
        self.to_uint().ct_gt(&HALF_MODULUS)
    }
}

impl Sgn0 for Fp {
    fn sgn0(&self) -> Choice {
        self.is_odd()
    }
}

/// [`Field::sqrt_ratio`] in terms of [`Field::sqrt`], using `non_square` as
/// the fixed non-residue `G_S`.
pub(crate) fn sqrt_ratio_with<F: Field>(num: &F, div: &F, non_square: &F) -> (Choice, F) {
    let ratio = *num * div.invert().unwrap_or(F::ZERO);
    let root = ratio.sqrt();
    let is_square = root.is_some() & !(div.is_zero() & !num.is_zero());
    let alt = (ratio * non_square).sqrt().unwrap_or(F::ZERO);
    (is_square, F::conditional_select(&alt, &root.unwrap_or(F::ZERO), root.is_some()))
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ResidueType::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp {}

impl DefaultIsZeroes for Fp {}

impl From<u64> for Fp {
    fn from(w: u64) -> Self {
        Self::from_u64(w)
    }
}

impl From<Fp> for U384 {
    fn from(fe: Fp) -> U384 {
        fe.to_uint()
    }
}

impl TryFrom<U384> for Fp {
    type Error = crate::Error;

    fn try_from(uint: U384) -> crate::Result<Self> {
        Option::from(Self::from_uint(&uint)).ok_or(crate::Error::NotWellFormed)
    }
}

impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{:x})", self)
    }
}

impl LowerHex for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl UpperHex for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Fp, HALF_MODULUS, MODULUS};
    use crate::arithmetic::sign::LexicographicSign;
    use elliptic_curve::{
        bigint::{Encoding, U384},
        ff::Field,
    };
    use hex_literal::hex;
    use proptest::prelude::*;
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    #[test]
    fn zero_is_additive_identity() {
        let a = Fp::from_u64(42);
        assert_eq!(a + Fp::ZERO, a);
        assert_eq!(Fp::ZERO - a, -a);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let a = Fp::from_u64(42);
        assert_eq!(a * Fp::ONE, a);
    }

    #[test]
    fn from_bytes_rejects_modulus() {
        assert!(bool::from(Fp::from_bytes(&MODULUS.to_be_bytes()).is_none()));
        let max = MODULUS.wrapping_sub(&U384::ONE);
        assert_eq!(Fp::from_bytes(&max.to_be_bytes()).unwrap(), -Fp::ONE);
    }

    #[test]
    fn bytes_are_big_endian() {
        let bytes = Fp::from_u64(0x0102).to_bytes();
        assert_eq!(&bytes[46..], &[0x01, 0x02]);
        assert!(bytes[..46].iter().all(|b| *b == 0));
    }

    #[test]
    fn invert() {
        let a = Fp::from_u64(7);
        assert_eq!(a * a.invert().unwrap(), Fp::ONE);
        assert!(bool::from(Fp::ZERO.invert().is_none()));
    }

    #[test]
    fn sqrt_of_four() {
        let root = Fp::from_u64(4).sqrt().unwrap();
        assert!(root == Fp::from_u64(2) || root == -Fp::from_u64(2));
    }

    #[test]
    fn minus_one_is_not_square() {
        assert!(!bool::from((-Fp::ONE).is_square()));
        assert!(bool::from((-Fp::ONE).sqrt().is_none()));
        assert!(bool::from(Fp::ZERO.is_square()));
    }

    #[test]
    fn sqrt_ratio_of_non_square() {
        let (is_square, root) = <Fp as Field>::sqrt_ratio(&-Fp::from_u64(4), &Fp::ONE);
        assert!(!bool::from(is_square));
        assert_eq!(root.square(), Fp::from_u64(4));

        let (is_square, root) = <Fp as Field>::sqrt_ratio(&Fp::ONE, &Fp::ZERO);
        assert!(!bool::from(is_square));
        assert_eq!(root, Fp::ZERO);
    }

    #[test]
    fn half_modulus_is_not_largest() {
        let half = Fp::from_uint(&HALF_MODULUS).unwrap();
        assert!(!bool::from(half.is_lexicographically_largest()));
        assert!(bool::from((half + Fp::ONE).is_lexicographically_largest()));
        assert!(!bool::from(Fp::ZERO.is_lexicographically_largest()));
    }

    #[test]
    fn wide_reduction() {
        // 2^512 - 1 mod p
        let reduced = Fp::from_wide_bytes(&[0xff; 64]);
        assert_eq!(
            reduced.to_bytes(),
            hex!("02cb5d3a884e56c4fab7cd07ee4e16bc15efebb5d396d7cf82383087033108464532383fa8eaff4e967d3988a62b6c9c")
        );
    }

    #[test]
    fn random_elements_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(381);
        assert_ne!(Fp::random(&mut rng), Fp::random(&mut rng));
    }

    proptest! {
        #[test]
        fn sign_disagrees_with_negation(a in any::<u64>(), b in any::<u64>()) {
            let v = Fp::from_u64(a) * Fp::from_u64(b) + Fp::ONE;
            prop_assume!(v != Fp::ZERO);
            prop_assert_ne!(
                bool::from(v.is_lexicographically_largest()),
                bool::from((-v).is_lexicographically_largest())
            );
        }

        #[test]
        fn square_has_root(a in any::<u64>()) {
            let sq = Fp::from_u64(a).square();
            prop_assert!(bool::from(sq.is_square()));
            prop_assert_eq!(sq.sqrt().unwrap().square(), sq);
        }
    }
}
