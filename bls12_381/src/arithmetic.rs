//! Pure Rust implementation of group operations on the BLS12-381 groups
//! `G1` (over `Fp`) and `G2` (over `Fp2`).

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod fp2;
pub mod isogeny;
pub(crate) mod projective;
pub mod sign;
pub mod sswu;

#[cfg(feature = "hash2curve")]
pub mod hash2curve;

pub use self::{
    affine::AffinePoint, field::Fp, fp2::Fp2, isogeny::IsogenyMap, projective::ProjectivePoint,
    sswu::SswuParams,
};

use self::sign::{LexicographicSign, Sgn0};
use crate::{G1, G2};
use core::fmt::Debug;
use elliptic_curve::{
    consts::{U48, U96, U192},
    ff::Field,
    generic_array::ArrayLength,
    subtle::{Choice, CtOption},
};

/// Field over which the coordinates of a group's points are defined.
///
/// This is the capability set the point codec, the isogeny evaluator and the
/// SWU map need beyond [`Field`]: the fixed-size big-endian encoding and
/// square detection.
pub trait CurveField: Field + LexicographicSign + Sgn0 {
    /// Size of the big-endian encoding in bytes.
    const ENCODED_SIZE: usize;

    /// Is this element a square (zero included)?
    fn is_square(&self) -> Choice;

    /// Decode from a big-endian encoding of exactly [`Self::ENCODED_SIZE`]
    /// bytes.
    ///
    /// Returns `None` for the wrong length or a non-canonical encoding.
    fn from_be_slice(bytes: &[u8]) -> CtOption<Self>;

    /// Write the big-endian encoding into `out`, which must be exactly
    /// [`Self::ENCODED_SIZE`] bytes long.
    fn write_be_slice(&self, out: &mut [u8]);
}

/// Identifier of a BLS12-381 group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GroupId {
    /// Group over the base field `Fp`.
    G1,
    /// Group over the quadratic extension `Fp2`.
    G2,
}

mod sealed {
    pub trait Sealed {}
}

/// Parameters of a BLS12-381 group described by the short Weierstrass
/// equation `y² = x³ + b`.
pub trait CurveParams:
    sealed::Sealed + Copy + Clone + Debug + Default + Eq + Send + Sync + 'static
{
    /// Coordinate field.
    type FieldElement: CurveField;

    /// Size of a compressed point encoding.
    type CompressedSize: ArrayLength<u8>;

    /// Size of an uncompressed point encoding.
    type UncompressedSize: ArrayLength<u8>;

    /// Which group this is.
    const GROUP: GroupId;

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: Self::FieldElement;

    /// `3 * b`, as used by the complete addition formulas.
    const EQUATION_B3: Self::FieldElement;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Effective cofactor `h_eff` as little-endian limbs.
    const H_EFF: &'static [u64];

    /// Isogeny from the SWU-friendly curve onto this curve.
    const ISOGENY: IsogenyMap<Self::FieldElement>;

    /// Simplified SWU parameters of the isogenous curve.
    const SSWU: SswuParams<Self::FieldElement>;
}

/// Order `r` of the prime-order subgroups as little-endian limbs.
pub(crate) const GROUP_ORDER: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

impl sealed::Sealed for G1 {}

impl CurveParams for G1 {
    type FieldElement = Fp;
    type CompressedSize = U48;
    type UncompressedSize = U96;

    const GROUP: GroupId = GroupId::G1;
    const EQUATION_B: Fp = Fp::from_u64(4);
    const EQUATION_B3: Fp = Fp::from_u64(12);

    const GENERATOR: (Fp, Fp) = (
        Fp::from_be_hex(
            "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb",
        ),
        Fp::from_be_hex(
            "08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1",
        ),
    );

    const H_EFF: &'static [u64] = &[0xd201_0000_0001_0001];

    const ISOGENY: IsogenyMap<Fp> = isogeny::g1::ISOGENY;
    const SSWU: SswuParams<Fp> = sswu::G1_SSWU;
}

impl sealed::Sealed for G2 {}

impl CurveParams for G2 {
    type FieldElement = Fp2;
    type CompressedSize = U96;
    type UncompressedSize = U192;

    const GROUP: GroupId = GroupId::G2;
    const EQUATION_B: Fp2 = Fp2::new(Fp::from_u64(4), Fp::from_u64(4));
    const EQUATION_B3: Fp2 = Fp2::new(Fp::from_u64(12), Fp::from_u64(12));

    const GENERATOR: (Fp2, Fp2) = (
        Fp2::new(
            Fp::from_be_hex(
                "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
            ),
            Fp::from_be_hex(
                "13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
            ),
        ),
        Fp2::new(
            Fp::from_be_hex(
                "0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801",
            ),
            Fp::from_be_hex(
                "0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be",
            ),
        ),
    );

    const H_EFF: &'static [u64] = &[
        0xe802_0005_aaa9_5551,
        0x5989_4c0a_debb_f6b4,
        0xe954_cbc0_6689_f6a3,
        0x2ec0_ec69_d747_7c1a,
        0x6d82_bf01_5d12_12b0,
        0x329c_2f17_8731_db95,
        0x9986_ff03_1508_ffe1,
        0x88e2_a8e9_145a_d768,
        0x584c_6a0e_a91b_3528,
        0x0bc6_9f08_f2ee_75b3,
    ];

    const ISOGENY: IsogenyMap<Fp2> = isogeny::g2::ISOGENY;
    const SSWU: SswuParams<Fp2> = sswu::G2_SSWU;
}

/// Affine point in `G1`.
pub type G1Affine = AffinePoint<G1>;

/// Projective point in `G1`.
pub type G1Projective = ProjectivePoint<G1>;

/// Affine point in `G2`.
pub type G2Affine = AffinePoint<G2>;

/// Projective point in `G2`.
pub type G2Projective = ProjectivePoint<G2>;
