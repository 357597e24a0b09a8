//! Error types.

use core::fmt::{self, Display};

/// Result type with the `bls12_381` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Point decoding and hashing errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The flag bits of the first byte hold a reserved combination, or the
    /// compression flag does not match the format being decoded.
    MalformedHeader,

    /// The infinity flag is set but the coordinate bytes are not all zero.
    InvalidInfinityEncoding,

    /// `x^3 + b` has no square root, so no point with this `x` exists.
    NonSquareDiscriminant,

    /// The coordinates are not canonical field elements or do not satisfy
    /// the curve equation.
    NotWellFormed,

    /// `expand_message` rejected its inputs (empty domain separation tag or
    /// an unsupported output length).
    HashToField,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::MalformedHeader => "malformed point encoding header",
            Error::InvalidInfinityEncoding => "point at infinity has non-zero coordinate bytes",
            Error::NonSquareDiscriminant => "x-coordinate is not on the curve",
            Error::NotWellFormed => "point is not on the curve",
            Error::HashToField => "hash to field failed",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "hash2curve")]
impl From<elliptic_curve::Error> for Error {
    fn from(_: elliptic_curve::Error) -> Error {
        Error::HashToField
    }
}
