//! Hashing to `G1` and `G2` as specified by RFC 9380 with the
//! `BLS12381G1_XMD:SHA-256_SSWU_RO_` family of suites.

use super::{CurveParams, Fp, Fp2, ProjectivePoint};
use crate::Result;
use elliptic_curve::{
    consts::{U64, U128},
    generic_array::GenericArray,
    hash2curve::{ExpandMsg, FromOkm, hash_to_field},
};

impl FromOkm for Fp {
    type Length = U64;

    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(data);
        Fp::from_wide_bytes(&wide)
    }
}

impl FromOkm for Fp2 {
    type Length = U128;

    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self {
        let mut c0 = [0u8; 64];
        let mut c1 = [0u8; 64];
        c0.copy_from_slice(&data[..64]);
        c1.copy_from_slice(&data[64..]);
        Fp2::new(Fp::from_wide_bytes(&c0), Fp::from_wide_bytes(&c1))
    }
}

/// Hashing arbitrary byte strings to points of a BLS12-381 group.
pub trait HashToCurve: CurveParams
where
    Self::FieldElement: FromOkm,
{
    /// Computes the `hash_to_curve` routine: a uniform encoding whose output
    /// is indistinguishable from a random point of the prime-order subgroup.
    ///
    /// # Errors
    /// See implementors of [`ExpandMsg`] for errors, e.g. an empty domain
    /// separation tag for [`ExpandMsgXmd`].
    ///
    /// [`ExpandMsgXmd`]: elliptic_curve::hash2curve::ExpandMsgXmd
    fn hash_from_bytes<'a, X: ExpandMsg<'a>>(
        msgs: &[&[u8]],
        dsts: &'a [&'a [u8]],
    ) -> Result<ProjectivePoint<Self>> {
        let mut u = [Self::FieldElement::default(); 2];
        hash_to_field::<X, _>(msgs, dsts, &mut u)?;
        let q0 = ProjectivePoint::<Self>::map_to_curve(&u[0]);
        let q1 = ProjectivePoint::<Self>::map_to_curve(&u[1]);
        Ok((q0 + q1).clear_cofactor())
    }

    /// Computes the `encode_to_curve` routine: a non-uniform encoding that
    /// costs a single map to the curve.
    ///
    /// # Errors
    /// See implementors of [`ExpandMsg`] for errors.
    fn encode_from_bytes<'a, X: ExpandMsg<'a>>(
        msgs: &[&[u8]],
        dsts: &'a [&'a [u8]],
    ) -> Result<ProjectivePoint<Self>> {
        let mut u = [Self::FieldElement::default()];
        hash_to_field::<X, _>(msgs, dsts, &mut u)?;
        Ok(ProjectivePoint::<Self>::map_to_curve(&u[0]).clear_cofactor())
    }
}

impl<C> HashToCurve for C
where
    C: CurveParams,
    C::FieldElement: FromOkm,
{
}

#[cfg(test)]
mod tests {
    use crate::arithmetic::{Fp, Fp2, G1Projective, G2Projective};
    use elliptic_curve::{
        generic_array::GenericArray,
        hash2curve::{ExpandMsgXmd, FromOkm, hash_to_field},
    };
    use hex_literal::hex;
    use sha2::Sha256;

    #[test]
    fn from_okm_fp_reduces_wide_input() {
        let okm = GenericArray::clone_from_slice(&[0xff; 64]);
        assert_eq!(
            Fp::from_okm(&okm).to_bytes(),
            hex!("02cb5d3a884e56c4fab7cd07ee4e16bc15efebb5d396d7cf82383087033108464532383fa8eaff4e967d3988a62b6c9c")
        );
    }

    #[test]
    fn from_okm_fp2_component_order() {
        let mut bytes = [0u8; 128];
        bytes[63] = 1;
        bytes[127] = 2;
        let okm = GenericArray::clone_from_slice(&bytes);
        assert_eq!(Fp2::from_okm(&okm), Fp2::new(Fp::from_u64(1), Fp::from_u64(2)));
    }

    #[test]
    fn hash_to_field_fp() {
        const DST: &[u8] = b"QUUX-V01-CS02-with-BLS12381G1_XMD:SHA-256_SSWU_RO_";
        let mut u = [Fp::ZERO; 2];
        hash_to_field::<ExpandMsgXmd<Sha256>, _>(&[b""], &[DST], &mut u).unwrap();
        assert_eq!(
            u[0].to_bytes(),
            hex!("0ba14bd907ad64a016293ee7c2d276b8eae71f25a4b941eece7b0d89f17f75cb3ae5438a614fb61d6835ad59f29c564f")
        );
        assert_eq!(
            u[1].to_bytes(),
            hex!("019b9bd7979f12657976de2884c7cce192b82c177c80e0ec604436a7f538d231552f0d96d9f7babe5fa3b19b3ff25ac9")
        );
    }

    #[test]
    fn empty_dst_is_rejected() {
        use crate::{Error, G1, hash2curve::HashToCurve};
        assert_eq!(
            G1::hash_from_bytes::<ExpandMsgXmd<Sha256>>(&[b"abc"], &[]),
            Err(Error::HashToField)
        );
    }

    #[test]
    fn encode_is_in_subgroup() {
        use crate::{G1, G2, hash2curve::HashToCurve};
        const DST: &[u8] = b"bls12_381-tests";

        let p: G1Projective =
            G1::encode_from_bytes::<ExpandMsgXmd<Sha256>>(&[b"message"], &[DST]).unwrap();
        assert!(bool::from(p.to_affine().is_torsion_free()));

        let q: G2Projective =
            G2::encode_from_bytes::<ExpandMsgXmd<Sha256>>(&[b"message"], &[DST]).unwrap();
        assert!(bool::from(q.to_affine().is_torsion_free()));
    }
}
