//! Pure Rust implementation of the BLS12-381 `G1` and `G2` groups: the ZCash
//! point serialization format and hashing to the curve with the RFC 9380
//! simplified SWU map and isogenies.
//!
//! # Usage
//! ```
//! use bls12_381::{G1Affine, G2Projective};
//!
//! let g = G1Affine::GENERATOR;
//! let bytes = g.to_compressed();
//! assert_eq!(bytes.len(), 48);
//! assert_eq!(bytes[0] & 0xe0, 0x80);
//! assert_eq!(G1Affine::from_compressed(&bytes), Ok(g));
//!
//! let h = G2Projective::GENERATOR.double();
//! assert_eq!(G2Projective::from_uncompressed(&h.to_uncompressed()), Ok(h));
//! ```
//!
//! With the `hash2curve` feature (on by default):
//! ```
//! # #[cfg(feature = "hash2curve")]
//! # {
//! use bls12_381::{G1, elliptic_curve::hash2curve::ExpandMsgXmd, hash2curve::HashToCurve};
//! use sha2::Sha256;
//!
//! let dst: &[u8] = b"QUUX-V01-CS02-with-BLS12381G1_XMD:SHA-256_SSWU_RO_";
//! let p = G1::hash_from_bytes::<ExpandMsgXmd<Sha256>>(&[b"abc"], &[dst]).unwrap();
//! assert!(bool::from(p.to_affine().is_torsion_free()));
//! # }
//! ```
//!
//! Decoding only checks that a point is on the curve. Callers that need
//! prime-order subgroup membership must check
//! [`AffinePoint::is_torsion_free`] themselves.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

#[macro_use]
mod macros;

#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod encoding;

mod error;

pub use crate::{
    arithmetic::{
        AffinePoint, CurveField, CurveParams, Fp, Fp2, G1Affine, G1Projective, G2Affine,
        G2Projective, GroupId, ProjectivePoint,
    },
    encoding::{CompressedPoint, UncompressedPoint},
    error::{Error, Result},
};
pub use elliptic_curve;

#[cfg(feature = "hash2curve")]
#[cfg_attr(docsrs, doc(cfg(feature = "hash2curve")))]
pub use crate::arithmetic::hash2curve;

/// The BLS12-381 group `G1`: points of `y² = x³ + 4` over `Fp`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct G1;

/// The BLS12-381 group `G2`: points of `y² = x³ + 4(1 + u)` over `Fp2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct G2;
