//! Rational maps from the isogenous curves used by the simplified SWU map
//! onto the BLS12-381 curves.
//!
//! See RFC 9380 appendix E.2 (11-isogeny onto `G1`) and E.3 (3-isogeny onto
//! `G2`): <https://www.rfc-editor.org/rfc/rfc9380.html#appendix-E.2>

pub(crate) mod g1;
pub(crate) mod g2;

use elliptic_curve::{ff::Field, subtle::Choice};

/// Number of powers `x^0 ..= x^15` needed by the largest map (the `G1`
/// 11-isogeny's y-coordinate polynomials).
pub(crate) const MAX_POWERS: usize = 16;

/// Coefficient tables of an isogeny map
///
/// ```text
/// x' = x_num(x) / x_den(x)
/// y' = y * y_num(x) / y_den(x)
/// ```
///
/// Every table is stored in ascending order of degree. Numerator tables hold
/// every coefficient. Denominators are monic, so their tables omit the
/// leading `1` and a table of length `n` stands for `x^n + sum(k_i * x^i)`.
#[derive(Debug)]
pub struct IsogenyMap<F: 'static> {
    /// Coefficients of the x numerator.
    pub xnum: &'static [F],
    /// Coefficients of the x denominator, without the leading `1`.
    pub xden: &'static [F],
    /// Coefficients of the y numerator.
    pub ynum: &'static [F],
    /// Coefficients of the y denominator, without the leading `1`.
    pub yden: &'static [F],
}

impl<F: 'static> IsogenyMap<F> {
    /// Highest power of `x` any of the four polynomials uses.
    pub const fn degree(&self) -> usize {
        let num = max(self.xnum.len(), self.ynum.len()).saturating_sub(1);
        max(num, max(self.xden.len(), self.yden.len()))
    }
}

impl<F: Field> IsogenyMap<F> {
    /// Evaluate the map at `(x, y)`.
    ///
    /// Returns the image coordinates together with a [`Choice`] which is set
    /// when a denominator vanishes. The map is undefined there and the
    /// coordinates are both zero, which the caller treats as the point at
    /// infinity.
    ///
    /// The input is not checked to lie on the isogenous curve.
    pub fn evaluate(&self, x: &F, y: &F) -> (F, F, Choice) {
        let mut powers = [F::ONE; MAX_POWERS];
        for i in 1..=self.degree() {
            powers[i] = powers[i - 1] * x;
        }

        let xnum = polynomial(self.xnum, &powers);
        let xden = monic_polynomial(self.xden, &powers);
        let ynum = polynomial(self.ynum, &powers);
        let yden = monic_polynomial(self.yden, &powers);

        // Invert both denominators at once.
        let inv = (xden * yden).invert();
        let is_undefined = inv.is_none();
        let inv = inv.unwrap_or(F::ZERO);

        let x_out = xnum * yden * inv;
        let y_out = *y * ynum * xden * inv;
        (x_out, y_out, is_undefined)
    }
}

/// `sum(coeffs[i] * x^i)`
fn polynomial<F: Field>(coeffs: &[F], powers: &[F]) -> F {
    coeffs
        .iter()
        .zip(powers)
        .fold(F::ZERO, |acc, (k, xi)| acc + *k * xi)
}

/// `x^n + sum(coeffs[i] * x^i)` where `n = coeffs.len()`.
fn monic_polynomial<F: Field>(coeffs: &[F], powers: &[F]) -> F {
    polynomial(coeffs, powers) + powers[coeffs.len()]
}

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::{IsogenyMap, MAX_POWERS};
    use crate::arithmetic::{CurveParams, Fp, Fp2};
    use crate::{G1, G2};
    use elliptic_curve::ff::Field;

    #[test]
    fn tables_fit_power_table() {
        assert_eq!(G1::ISOGENY.degree(), MAX_POWERS - 1);
        assert_eq!(G2::ISOGENY.degree(), 3);
        assert_eq!(G1::ISOGENY.xnum.len(), 12);
        assert_eq!(G1::ISOGENY.xden.len(), 10);
        assert_eq!(G1::ISOGENY.ynum.len(), 16);
        assert_eq!(G1::ISOGENY.yden.len(), 15);
        assert_eq!(G2::ISOGENY.xnum.len(), 4);
        assert_eq!(G2::ISOGENY.xden.len(), 2);
        assert_eq!(G2::ISOGENY.ynum.len(), 4);
        assert_eq!(G2::ISOGENY.yden.len(), 3);
    }

    // x' = (x + 2) / (x - 1), y' = y * x / (x + 3)
    const TOY: IsogenyMap<Fp> = IsogenyMap {
        xnum: &[Fp::from_u64(2), Fp::ONE],
        xden: &[Fp::neg(&Fp::ONE)],
        ynum: &[Fp::ZERO, Fp::ONE],
        yden: &[Fp::from_u64(3)],
    };

    #[test]
    fn toy_map() {
        let (x, y, undefined) = TOY.evaluate(&Fp::from_u64(3), &Fp::from_u64(6));
        assert!(!bool::from(undefined));
        // (3 + 2) / (3 - 1) = 5/2, 6 * 3 / (3 + 3) = 3
        assert_eq!(x * Fp::from_u64(2), Fp::from_u64(5));
        assert_eq!(y, Fp::from_u64(3));
    }

    #[test]
    fn toy_map_x_denominator_root() {
        let (x, y, undefined) = TOY.evaluate(&Fp::ONE, &Fp::from_u64(6));
        assert!(bool::from(undefined));
        assert_eq!((x, y), (Fp::ZERO, Fp::ZERO));
    }

    #[test]
    fn toy_map_y_denominator_root() {
        let (_, _, undefined) = TOY.evaluate(&-Fp::from_u64(3), &Fp::ONE);
        assert!(bool::from(undefined));
    }

    #[test]
    fn g2_x_denominator_roots() {
        // x_den(x) = x^2 + (12 - 12u) x - 72u
        let c1 = Fp2::new(Fp::from_u64(12), -Fp::from_u64(12));
        let c0 = Fp2::new(Fp::ZERO, -Fp::from_u64(72));
        let disc = c1.square() - c0.double().double();
        let root = (-c1 + disc.sqrt().unwrap()) * Fp2::from(2u64).invert().unwrap();
        assert_eq!(root.square() + c1 * root + c0, Fp2::ZERO);

        let (x, y, undefined) = G2::ISOGENY.evaluate(&root, &Fp2::ONE);
        assert!(bool::from(undefined));
        assert_eq!((x, y), (Fp2::ZERO, Fp2::ZERO));
    }
}
