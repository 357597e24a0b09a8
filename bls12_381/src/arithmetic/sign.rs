//! Sign conventions for field elements.
//!
//! Two different notions of "sign" are in use for BLS12-381:
//!
//! - [`LexicographicSign`] is the flag carried by the ZCash point encoding,
//!   telling the two square roots `y` and `-y` apart.
//! - [`Sgn0`] is the parity-based `sgn0` of RFC 9380, used by the
//!   simplified SWU map.

use elliptic_curve::subtle::Choice;

/// Sign bit of the ZCash serialization format.
///
/// For `Fp` an element is "largest" when it is greater than `(p - 1) / 2`.
/// For `Fp2 = c0 + c1 * u` the sign of `c1` decides, falling back to `c0`
/// when `c1` is zero. Zero is never largest, and for any non-zero `v`
/// exactly one of `v` and `-v` is largest.
pub trait LexicographicSign {
    /// Is this element the lexicographically larger of `{self, -self}`?
    fn is_lexicographically_largest(&self) -> Choice;
}

/// Parity of a field element as defined in RFC 9380 section 4.1.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-the-sgn0-function>
pub trait Sgn0 {
    /// Return the parity of the field element:
    /// 1 == negative, 0 == non-negative.
    fn sgn0(&self) -> Choice;
}
