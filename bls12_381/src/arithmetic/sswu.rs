//! Simplified Shallue-van de Woestijne-Ulas map onto the curves isogenous to
//! `G1` and `G2`.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-shallue-van-de-w>

use super::{CurveField, Fp, Fp2};
use elliptic_curve::subtle::ConditionallySelectable;

/// Parameters of the isogenous curve `y² = x³ + A'x + B'` and the
/// non-square `Z` used by the map.
#[derive(Clone, Copy, Debug)]
pub struct SswuParams<F> {
    /// Coefficient `A'` of the isogenous curve.
    pub a: F,
    /// Coefficient `B'` of the isogenous curve.
    pub b: F,
    /// Distinguished non-square `Z`.
    pub z: F,
}

/// `E1': y² = x³ + A'x + B'` with `Z = 11`.
pub(crate) const G1_SSWU: SswuParams<Fp> = SswuParams {
    a: Fp::from_be_hex(
        "00144698a3b8e9433d693a02c96d4982b0ea985383ee66a8d8e8981aefd881ac98936f8da0e0f97f5cf428082d584c1d",
    ),
    b: Fp::from_be_hex(
        "12e2908d11688030018b12e8753eee3b2016c1f0f24f4070a0b9c14fcef35ef55a23215a316ceaa5d1cc48e98e172be0",
    ),
    z: Fp::from_u64(11),
};

/// `E2': y² = x³ + 240u x + 1012(1 + u)` with `Z = -(2 + u)`.
pub(crate) const G2_SSWU: SswuParams<Fp2> = SswuParams {
    a: Fp2::new(Fp::ZERO, Fp::from_u64(240)),
    b: Fp2::new(Fp::from_u64(1012), Fp::from_u64(1012)),
    z: Fp2::new(Fp::neg(&Fp::from_u64(2)), Fp::neg(&Fp::ONE)),
};

impl<F: CurveField> SswuParams<F> {
    /// Map a field element onto the isogenous curve.
    ///
    /// This is `map_to_curve_simple_swu` from RFC 9380 section 6.6.2. The
    /// result is always an affine point of the isogenous curve, never the
    /// identity.
    pub fn map_to_isogenous(&self, u: &F) -> (F, F) {
        let u2 = u.square();
        let zu2 = self.z * u2;

        // tv1 = inv0(Z^2 u^4 + Z u^2)
        let tv1 = (zu2.square() + zu2).invert().unwrap_or(F::ZERO);

        // x1 = (-B / A) (1 + tv1), or B / (Z A) when tv1 = 0
        let a_inv = self.a.invert().unwrap_or(F::ZERO);
        let x1_generic = -self.b * a_inv * (F::ONE + tv1);
        let x1_exceptional = self.b * (self.z * self.a).invert().unwrap_or(F::ZERO);
        let x1 = F::conditional_select(&x1_generic, &x1_exceptional, tv1.is_zero());
        let gx1 = self.curve_rhs(&x1);

        let x2 = zu2 * x1;
        let gx2 = self.curve_rhs(&x2);

        // Exactly one of gx1 and gx2 is square
        let use_x1 = gx1.is_square();
        let x = F::conditional_select(&x2, &x1, use_x1);
        let gx = F::conditional_select(&gx2, &gx1, use_x1);
        let mut y = gx.sqrt().unwrap_or(F::ZERO);

        y.conditional_assign(&-y, u.sgn0() ^ y.sgn0());
        (x, y)
    }

    /// `x³ + A'x + B'`
    fn curve_rhs(&self, x: &F) -> F {
        (x.square() + self.a) * x + self.b
    }
}
