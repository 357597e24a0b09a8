//! `G1` point encoding tests.

use bls12_381::{
    CompressedPoint, Error, G1, G1Affine, G1Projective, UncompressedPoint,
    encoding::{COMPRESSION_FLAG, INFINITY_FLAG, SIGN_FLAG},
};
use hex_literal::hex;
use proptest::prelude::*;

const COMPRESSED_GENERATOR: [u8; 48] = hex!(
    "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
);

// y ‖ x
const UNCOMPRESSED_GENERATOR: [u8; 96] = hex!(
    "08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
    "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
);

const COMPRESSED_NEG_GENERATOR: [u8; 48] = hex!(
    "b7f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
);

const COMPRESSED_DOUBLE_GENERATOR: [u8; 48] = hex!(
    "a572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e"
);

const UNCOMPRESSED_SEVEN_GENERATOR: [u8; 96] = hex!(
    "108dadbaa4b636445639d5ae3089b3c43a8a1d47818edd1839d7383959a41c10fdc66849cfa1b08c5a11ec7e28981a1c"
    "1928f3beb93519eecf0145da903b40a4c97dca00b21f12ac0df3be9116ef2ef27b2ae6bcd4c5bc2d54ef5a70627efcb7"
);

fn compressed(bytes: &[u8]) -> CompressedPoint<G1> {
    CompressedPoint::<G1>::clone_from_slice(bytes)
}

fn uncompressed(bytes: &[u8]) -> UncompressedPoint<G1> {
    UncompressedPoint::<G1>::clone_from_slice(bytes)
}

#[test]
fn generator_round_trip() {
    let g = G1Affine::GENERATOR;
    assert_eq!(g.to_compressed().as_slice(), &COMPRESSED_GENERATOR);
    assert_eq!(g.to_uncompressed().as_slice(), &UNCOMPRESSED_GENERATOR);
    assert_eq!(G1Affine::from_compressed(&compressed(&COMPRESSED_GENERATOR)), Ok(g));
    assert_eq!(
        G1Affine::from_uncompressed(&uncompressed(&UNCOMPRESSED_GENERATOR)),
        Ok(g)
    );
}

#[test]
fn negated_generator_sets_sign() {
    let neg = -G1Affine::GENERATOR;
    assert_eq!(neg.to_compressed().as_slice(), &COMPRESSED_NEG_GENERATOR);
    assert_eq!(
        G1Affine::from_compressed(&compressed(&COMPRESSED_NEG_GENERATOR)),
        Ok(neg)
    );
}

#[test]
fn multiples_of_generator() {
    let g = G1Projective::GENERATOR;
    assert_eq!(
        g.double().to_compressed().as_slice(),
        &COMPRESSED_DOUBLE_GENERATOR
    );
    assert_eq!(
        G1Projective::from_compressed(&compressed(&COMPRESSED_DOUBLE_GENERATOR)),
        Ok(g + g)
    );

    let seven = g.mul_vartime(&[7]);
    assert_eq!(
        seven.to_uncompressed().as_slice(),
        &UNCOMPRESSED_SEVEN_GENERATOR
    );
    assert_eq!(
        G1Projective::from_uncompressed(&uncompressed(&UNCOMPRESSED_SEVEN_GENERATOR)),
        Ok(seven)
    );
}

#[test]
fn identity_round_trip() {
    let id = G1Projective::IDENTITY;

    let bytes = id.to_compressed();
    assert_eq!(bytes[0], COMPRESSION_FLAG | INFINITY_FLAG);
    assert!(bytes[1..].iter().all(|&b| b == 0));
    assert_eq!(G1Projective::from_compressed(&bytes), Ok(id));

    let bytes = id.to_uncompressed();
    assert_eq!(bytes[0], INFINITY_FLAG);
    assert!(bytes[1..].iter().all(|&b| b == 0));
    assert_eq!(G1Projective::from_uncompressed(&bytes), Ok(id));
}

#[test]
fn reserved_headers_are_rejected() {
    for flags in [0x20, 0x60, 0xe0] {
        let mut bytes = compressed(&COMPRESSED_GENERATOR);
        bytes[0] = (bytes[0] & 0x1f) | flags;
        assert_eq!(G1Affine::from_compressed(&bytes), Err(Error::MalformedHeader));

        let mut bytes = uncompressed(&UNCOMPRESSED_GENERATOR);
        bytes[0] = (bytes[0] & 0x1f) | flags;
        assert_eq!(
            G1Affine::from_uncompressed(&bytes),
            Err(Error::MalformedHeader)
        );
    }
}

#[test]
fn x_without_curve_point() {
    // x = 1: 1 + 4 has no square root
    let mut bytes = CompressedPoint::<G1>::default();
    bytes[0] = COMPRESSION_FLAG;
    bytes[47] = 1;
    assert_eq!(
        G1Affine::from_compressed(&bytes),
        Err(Error::NonSquareDiscriminant)
    );

    bytes[0] |= SIGN_FLAG;
    assert_eq!(
        G1Affine::from_compressed(&bytes),
        Err(Error::NonSquareDiscriminant)
    );
}

#[test]
fn swapped_coordinates_are_rejected() {
    // x ‖ y instead of y ‖ x
    let mut bytes = uncompressed(&UNCOMPRESSED_GENERATOR);
    bytes.rotate_left(48);
    assert_eq!(
        G1Affine::from_uncompressed(&bytes),
        Err(Error::NotWellFormed)
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let g = G1Affine::GENERATOR;
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(
        json,
        "\"97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb\""
    );
    assert_eq!(serde_json::from_str::<G1Affine>(&json).unwrap(), g);

    let p = G1Projective::GENERATOR.double();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(serde_json::from_str::<G1Projective>(&json).unwrap(), p);

    // compression flag cleared
    let json = "\"17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb\"";
    assert!(serde_json::from_str::<G1Affine>(json).is_err());
}

proptest! {
    #[test]
    fn compressed_round_trip(k in 1u64..) {
        let p = G1Projective::GENERATOR.mul_vartime(&[k]).to_affine();
        let bytes = p.to_compressed();
        let flags = bytes[0] & 0xe0;
        prop_assert!(flags == COMPRESSION_FLAG || flags == COMPRESSION_FLAG | SIGN_FLAG);
        prop_assert_eq!(G1Affine::from_compressed(&bytes), Ok(p));

        // the other root decodes to the negation
        let mut flipped = bytes;
        flipped[0] ^= SIGN_FLAG;
        prop_assert_eq!(G1Affine::from_compressed(&flipped), Ok(-p));
    }

    #[test]
    fn uncompressed_round_trip(k in 1u64..) {
        let p = G1Projective::GENERATOR.mul_vartime(&[k]);
        let bytes = p.to_uncompressed();
        prop_assert_eq!(bytes[0] & 0xe0, 0);
        prop_assert_eq!(G1Projective::from_uncompressed(&bytes), Ok(p));
    }
}
