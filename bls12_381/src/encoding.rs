//! Point serialization in the ZCash BLS12-381 format.
//!
//! The three most significant bits of the first byte carry flags:
//!
//! | bit | flag        | meaning                                              |
//! |-----|-------------|------------------------------------------------------|
//! | 7   | compression | only `x` is encoded                                  |
//! | 6   | infinity    | the point at infinity, all other bits must be zero   |
//! | 5   | sign        | `y` is the lexicographically largest root (compressed only) |
//!
//! The remaining bits hold big-endian coordinates. Compressed points encode
//! `x`; uncompressed points encode `y` followed by `x`. Elements of `Fp2`
//! are written as `c1 ‖ c0`.

use crate::{
    Error, G1, G2, Result,
    arithmetic::{
        AffinePoint, CurveField, CurveParams, Fp, Fp2, ProjectivePoint, field::FIELD_BYTES,
        sign::LexicographicSign,
    },
};
use elliptic_curve::{
    ff::Field,
    generic_array::{GenericArray, typenum::Unsigned},
    subtle::{Choice, ConditionallySelectable},
};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Set when only the x-coordinate is encoded.
pub const COMPRESSION_FLAG: u8 = 0x80;

/// Set for the point at infinity.
pub const INFINITY_FLAG: u8 = 0x40;

/// Set when the encoded `y` is the lexicographically largest square root.
pub const SIGN_FLAG: u8 = 0x20;

/// Bits of the first byte reserved for flags.
const FLAGS_MASK: u8 = COMPRESSION_FLAG | INFINITY_FLAG | SIGN_FLAG;

/// Compressed encoding of a point of group `C`.
pub type CompressedPoint<C> = GenericArray<u8, <C as CurveParams>::CompressedSize>;

/// Uncompressed encoding of a point of group `C`.
pub type UncompressedPoint<C> = GenericArray<u8, <C as CurveParams>::UncompressedSize>;

const _: () = {
    assert!(<G1 as CurveParams>::CompressedSize::USIZE == FIELD_BYTES);
    assert!(<G1 as CurveParams>::UncompressedSize::USIZE == 2 * FIELD_BYTES);
    assert!(<G2 as CurveParams>::CompressedSize::USIZE == 2 * FIELD_BYTES);
    assert!(<G2 as CurveParams>::UncompressedSize::USIZE == 4 * FIELD_BYTES);
    assert!(<G1 as CurveParams>::CompressedSize::USIZE == <Fp as CurveField>::ENCODED_SIZE);
    assert!(<G2 as CurveParams>::CompressedSize::USIZE == <Fp2 as CurveField>::ENCODED_SIZE);
};

/// Flags carried by the first byte of an encoded point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    /// Only the x-coordinate follows.
    pub compressed: bool,
    /// The point at infinity.
    pub infinity: bool,
    /// `y` is the lexicographically largest root.
    pub sign: bool,
}

impl Header {
    /// Parse the flags of the first byte of an encoded point.
    ///
    /// The combinations `0x20`, `0x60` and `0xE0` are reserved: a sign
    /// without compression, or a sign on the point at infinity.
    pub fn parse(byte: u8) -> Result<Self> {
        match byte & FLAGS_MASK {
            0x20 | 0x60 | 0xE0 => Err(Error::MalformedHeader),
            flags => Ok(Self {
                compressed: flags & COMPRESSION_FLAG != 0,
                infinity: flags & INFINITY_FLAG != 0,
                sign: flags & SIGN_FLAG != 0,
            }),
        }
    }

    /// Flag bits of this header.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.compressed {
            byte |= COMPRESSION_FLAG;
        }
        if self.infinity {
            byte |= INFINITY_FLAG;
        }
        if self.sign {
            byte |= SIGN_FLAG;
        }
        byte
    }
}

impl<C> AffinePoint<C>
where
    C: CurveParams,
{
    /// Serialize this point in compressed form.
    pub fn to_compressed(&self) -> CompressedPoint<C> {
        let is_identity = self.is_identity();
        let x = C::FieldElement::conditional_select(&self.x, &C::FieldElement::ZERO, is_identity);

        let mut bytes = CompressedPoint::<C>::default();
        x.write_be_slice(&mut bytes);

        bytes[0] |= COMPRESSION_FLAG;
        bytes[0] |= u8::conditional_select(&0, &INFINITY_FLAG, is_identity);
        bytes[0] |= u8::conditional_select(
            &0,
            &SIGN_FLAG,
            !is_identity & self.y.is_lexicographically_largest(),
        );
        bytes
    }

    /// Serialize this point in uncompressed form: `y ‖ x`.
    pub fn to_uncompressed(&self) -> UncompressedPoint<C> {
        let is_identity = self.is_identity();
        let x = C::FieldElement::conditional_select(&self.x, &C::FieldElement::ZERO, is_identity);
        let y = C::FieldElement::conditional_select(&self.y, &C::FieldElement::ZERO, is_identity);

        let n = C::FieldElement::ENCODED_SIZE;
        let mut bytes = UncompressedPoint::<C>::default();
        y.write_be_slice(&mut bytes[..n]);
        x.write_be_slice(&mut bytes[n..]);

        bytes[0] |= u8::conditional_select(&0, &INFINITY_FLAG, is_identity);
        bytes
    }

    /// Deserialize a compressed point.
    ///
    /// The point is checked to be on the curve but not to be in the
    /// prime-order subgroup; see [`AffinePoint::is_torsion_free`].
    pub fn from_compressed(bytes: &CompressedPoint<C>) -> Result<Self> {
        let header = Header::parse(bytes[0])?;
        if !header.compressed {
            return Err(Error::MalformedHeader);
        }

        let mut bytes = bytes.clone();
        bytes[0] &= !FLAGS_MASK;

        if header.infinity {
            return decode_identity(&bytes);
        }

        let x = Option::<C::FieldElement>::from(C::FieldElement::from_be_slice(&bytes))
            .ok_or(Error::NotWellFormed)?;

        let y2 = x.square() * x + C::EQUATION_B;
        if !bool::from(CurveField::is_square(&y2)) {
            return Err(Error::NonSquareDiscriminant);
        }
        let y = Option::<C::FieldElement>::from(y2.sqrt()).ok_or(Error::NonSquareDiscriminant)?;

        let flip = y.is_lexicographically_largest() ^ Choice::from(u8::from(header.sign));
        let y = C::FieldElement::conditional_select(&y, &-y, flip);

        Self::validate(Self { x, y, infinity: 0 })
    }

    /// Deserialize an uncompressed point.
    ///
    /// The point is checked to be on the curve but not to be in the
    /// prime-order subgroup; see [`AffinePoint::is_torsion_free`].
    pub fn from_uncompressed(bytes: &UncompressedPoint<C>) -> Result<Self> {
        let header = Header::parse(bytes[0])?;
        if header.compressed {
            return Err(Error::MalformedHeader);
        }

        let mut bytes = bytes.clone();
        bytes[0] &= !FLAGS_MASK;

        if header.infinity {
            return decode_identity(&bytes);
        }

        let n = C::FieldElement::ENCODED_SIZE;
        let y = Option::<C::FieldElement>::from(C::FieldElement::from_be_slice(&bytes[..n]))
            .ok_or(Error::NotWellFormed)?;
        let x = Option::<C::FieldElement>::from(C::FieldElement::from_be_slice(&bytes[n..]))
            .ok_or(Error::NotWellFormed)?;

        Self::validate(Self { x, y, infinity: 0 })
    }

    fn validate(point: Self) -> Result<Self> {
        if bool::from(point.is_well_formed()) {
            Ok(point)
        } else {
            Err(Error::NotWellFormed)
        }
    }
}

/// The identity, provided every byte after the cleared flags is zero.
fn decode_identity<C: CurveParams>(bytes: &[u8]) -> Result<AffinePoint<C>> {
    if bytes.iter().all(|&b| b == 0) {
        Ok(AffinePoint::IDENTITY)
    } else {
        Err(Error::InvalidInfinityEncoding)
    }
}

impl<C> ProjectivePoint<C>
where
    C: CurveParams,
{
    /// Serialize this point in compressed form.
    pub fn to_compressed(&self) -> CompressedPoint<C> {
        self.to_affine().to_compressed()
    }

    /// Serialize this point in uncompressed form.
    pub fn to_uncompressed(&self) -> UncompressedPoint<C> {
        self.to_affine().to_uncompressed()
    }

    /// Deserialize a compressed point.
    pub fn from_compressed(bytes: &CompressedPoint<C>) -> Result<Self> {
        AffinePoint::from_compressed(bytes).map(Self::from)
    }

    /// Deserialize an uncompressed point.
    pub fn from_uncompressed(bytes: &UncompressedPoint<C>) -> Result<Self> {
        AffinePoint::from_uncompressed(bytes).map(Self::from)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C> Serialize for AffinePoint<C>
where
    C: CurveParams,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_compressed(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> Deserialize<'de> for AffinePoint<C>
where
    C: CurveParams,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = CompressedPoint::<C>::default();
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Self::from_compressed(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<C> Serialize for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.to_affine().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> Deserialize<'de> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        AffinePoint::<C>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::{CompressedPoint, Header, UncompressedPoint};
    use crate::{Error, G1, G1Affine, G2, G2Affine};
    use hex_literal::hex;

    const G1_COMPRESSED: [u8; 48] = hex!(
        "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
    );

    #[test]
    fn header_parse() {
        assert_eq!(
            Header::parse(0xa0),
            Ok(Header {
                compressed: true,
                infinity: false,
                sign: true
            })
        );
        assert_eq!(Header::parse(0x1f), Ok(Header::default()));
        for byte in [0x20, 0x3f, 0x60, 0x7f, 0xe0, 0xff] {
            assert_eq!(Header::parse(byte), Err(Error::MalformedHeader));
        }
    }

    #[test]
    fn header_to_byte() {
        for byte in [0x00, 0x40, 0x80, 0xa0, 0xc0] {
            assert_eq!(Header::parse(byte).unwrap().to_byte(), byte);
        }
    }

    #[test]
    fn identity_encodings() {
        let compressed = G1Affine::IDENTITY.to_compressed();
        assert_eq!(compressed[0], 0xc0);
        assert!(compressed[1..].iter().all(|&b| b == 0));
        assert_eq!(G1Affine::from_compressed(&compressed), Ok(G1Affine::IDENTITY));

        let uncompressed = G2Affine::IDENTITY.to_uncompressed();
        assert_eq!(uncompressed.len(), 192);
        assert_eq!(uncompressed[0], 0x40);
        assert!(uncompressed[1..].iter().all(|&b| b == 0));
        assert_eq!(G2Affine::from_uncompressed(&uncompressed), Ok(G2Affine::IDENTITY));
    }

    #[test]
    fn infinity_with_coordinates_is_rejected() {
        let mut bytes = G1Affine::IDENTITY.to_compressed();
        bytes[47] = 1;
        assert_eq!(
            G1Affine::from_compressed(&bytes),
            Err(Error::InvalidInfinityEncoding)
        );

        let mut bytes = G1Affine::IDENTITY.to_uncompressed();
        bytes[0] |= 0x01;
        assert_eq!(
            G1Affine::from_uncompressed(&bytes),
            Err(Error::InvalidInfinityEncoding)
        );
    }

    #[test]
    fn compression_flag_must_match_format() {
        let mut bytes = CompressedPoint::<G1>::clone_from_slice(&G1_COMPRESSED);
        bytes[0] &= 0x7f;
        assert_eq!(G1Affine::from_compressed(&bytes), Err(Error::MalformedHeader));

        let mut bytes = G2Affine::GENERATOR.to_uncompressed();
        bytes[0] |= 0x80;
        assert_eq!(G2Affine::from_uncompressed(&bytes), Err(Error::MalformedHeader));
    }

    #[test]
    fn generator_compressed() {
        let bytes = G1Affine::GENERATOR.to_compressed();
        assert_eq!(bytes.as_slice(), &G1_COMPRESSED);
        assert_eq!(G1Affine::from_compressed(&bytes), Ok(G1Affine::GENERATOR));
    }

    #[test]
    fn sign_flag_selects_root() {
        let g = G1Affine::GENERATOR;
        let bytes = (-g).to_compressed();
        assert_eq!(bytes[0] & 0xe0, 0xa0);
        assert_eq!(G1Affine::from_compressed(&bytes), Ok(-g));
    }

    #[test]
    fn non_square_discriminant() {
        // 1 + 4 is not a square in Fp
        let mut bytes = CompressedPoint::<G1>::default();
        bytes[0] = 0x80;
        bytes[47] = 1;
        assert_eq!(
            G1Affine::from_compressed(&bytes),
            Err(Error::NonSquareDiscriminant)
        );

        // 4 + 4u is not a square in Fp2
        let mut bytes = CompressedPoint::<G2>::default();
        bytes[0] = 0x80;
        assert_eq!(
            G2Affine::from_compressed(&bytes),
            Err(Error::NonSquareDiscriminant)
        );
    }

    #[test]
    fn non_canonical_coordinate() {
        // x = p
        let mut bytes = CompressedPoint::<G1>::clone_from_slice(&hex!(
            "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"
        ));
        bytes[0] |= 0x80;
        assert_eq!(G1Affine::from_compressed(&bytes), Err(Error::NotWellFormed));
    }

    #[test]
    fn off_curve_uncompressed() {
        let mut bytes = G1Affine::GENERATOR.to_uncompressed();
        bytes[47] ^= 1;
        assert_eq!(G1Affine::from_uncompressed(&bytes), Err(Error::NotWellFormed));

        let mut bytes = UncompressedPoint::<G2>::default();
        bytes[191] = 1;
        assert_eq!(G2Affine::from_uncompressed(&bytes), Err(Error::NotWellFormed));
    }
}
