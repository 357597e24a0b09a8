//! Projective curve points.

#![allow(clippy::op_ref)]

use super::{AffinePoint, CurveParams};
use core::{
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::{
    ff::Field,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::DefaultIsZeroes,
};

/// Point on a BLS12-381 group in homogeneous projective coordinates.
///
/// `(X : Y : Z)` represents the affine point `(X / Z, Y / Z)`; `Z = 0` is
/// the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C> ProjectivePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
        z: C::FieldElement::ZERO,
    };

    /// Base point of the group.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: C::FieldElement::ONE,
    };

    /// Create a point from raw projective coordinates without any checks.
    ///
    /// Use [`ProjectivePoint::is_well_formed`] to validate the result.
    pub const fn from_xyz_unchecked(
        x: C::FieldElement,
        y: C::FieldElement,
        z: C::FieldElement,
    ) -> Self {
        Self { x, y, z }
    }

    /// Map a field element to a point of this group's curve: the simplified
    /// SWU map onto the isogenous curve followed by the isogeny.
    ///
    /// The result is not in the prime-order subgroup until
    /// [`ProjectivePoint::clear_cofactor`] is applied.
    pub fn map_to_curve(u: &C::FieldElement) -> Self {
        let (x, y) = C::SSWU.map_to_isogenous(u);
        AffinePoint::<C>::from_isogenous(&x, &y).into()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * zinv,
                y: self.y * zinv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Is this point the identity or a solution of `Y²Z = X³ + bZ³`?
    pub fn is_well_formed(&self) -> Choice {
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x + self.z.square() * self.z * C::EQUATION_B;
        self.is_identity() | lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// for `a = 0` (Algorithm 7). The comments after each line indicate which
    /// algorithm steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn add(&self, other: &Self) -> Self {
        let t0 = self.x * other.x; // 1
        let t1 = self.y * other.y; // 2
        let t2 = self.z * other.z; // 3
        let t3 = self.x + self.y; // 4
        let t4 = other.x + other.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = t0 + t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = self.y + self.z; // 9
        let x3 = other.y + other.z; // 10
        let t4 = t4 * x3; // 11
        let x3 = t1 + t2; // 12
        let t4 = t4 - x3; // 13
        let x3 = self.x + self.z; // 14
        let y3 = other.x + other.z; // 15
        let x3 = x3 * y3; // 16
        let y3 = t0 + t2; // 17
        let y3 = x3 - y3; // 18
        let x3 = t0 + t0; // 19
        let t0 = x3 + t0; // 20
        let t2 = C::EQUATION_B3 * t2; // 21
        let z3 = t1 + t2; // 22
        let t1 = t1 - t2; // 23
        let y3 = C::EQUATION_B3 * y3; // 24
        let x3 = t4 * y3; // 25
        let t2 = t3 * t1; // 26
        let x3 = t2 - x3; // 27
        let y3 = y3 * t0; // 28
        let t1 = t1 * z3; // 29
        let y3 = t1 + y3; // 30
        let t0 = t0 * t3; // 31
        let z3 = z3 * t4; // 32
        let z3 = z3 + t0; // 33

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the complete mixed addition formula from
    /// [Renes-Costello-Batina 2015] for `a = 0` (Algorithm 8).
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        let t0 = self.x * other.x; // 1
        let t1 = self.y * other.y; // 2
        let t3 = other.x + other.y; // 3
        let t4 = self.x + self.y; // 4
        let t3 = t3 * t4; // 5
        let t4 = t0 + t1; // 6
        let t3 = t3 - t4; // 7
        let t4 = other.y * self.z; // 8
        let t4 = t4 + self.y; // 9
        let y3 = other.x * self.z; // 10
        let y3 = y3 + self.x; // 11
        let x3 = t0 + t0; // 12
        let t0 = x3 + t0; // 13
        let t2 = C::EQUATION_B3 * self.z; // 14
        let z3 = t1 + t2; // 15
        let t1 = t1 - t2; // 16
        let y3 = C::EQUATION_B3 * y3; // 17
        let x3 = t4 * y3; // 18
        let t2 = t3 * t1; // 19
        let x3 = t2 - x3; // 20
        let y3 = y3 * t0; // 21
        let t1 = t1 * z3; // 22
        let y3 = t1 + y3; // 23
        let t0 = t0 * t3; // 24
        let z3 = z3 * t4; // 25
        let z3 = z3 + t0; // 26

        let ret = Self {
            x: x3,
            y: y3,
            z: z3,
        };

        // The affine identity has no projective counterpart in the formula.
        Self::conditional_select(&ret, self, other.is_identity())
    }

    /// Returns `self + self`.
    ///
    /// Implements the exception-free point doubling formula from
    /// [Renes-Costello-Batina 2015] for `a = 0` (Algorithm 9).
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn double(&self) -> Self {
        let t0 = self.y.square(); // 1
        let z3 = t0 + t0; // 2
        let z3 = z3 + z3; // 3
        let z3 = z3 + z3; // 4
        let t1 = self.y * self.z; // 5
        let t2 = self.z.square(); // 6
        let t2 = C::EQUATION_B3 * t2; // 7
        let x3 = t2 * z3; // 8
        let y3 = t0 + t2; // 9
        let z3 = t1 * z3; // 10
        let t1 = t2 + t2; // 11
        let t2 = t1 + t2; // 12
        let t0 = t0 - t2; // 13
        let y3 = t0 * y3; // 14
        let y3 = x3 + y3; // 15
        let t1 = self.x * self.y; // 16
        let x3 = t0 * t1; // 17
        let x3 = x3 + x3; // 18

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self - other`.
    fn sub_mixed(&self, other: &AffinePoint<C>) -> Self {
        self.add_mixed(&-other)
    }

    /// Returns `[k] self` for a scalar given as little-endian `u64` limbs.
    ///
    /// Double-and-add, variable time in `k`: only use with public scalars.
    pub fn mul_vartime(&self, k: &[u64]) -> Self {
        let mut acc = Self::IDENTITY;

        for limb in k.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if (limb >> i) & 1 == 1 {
                    acc = acc.add(self);
                }
            }
        }

        acc
    }

    /// Multiply by the effective cofactor `h_eff`, mapping any point of the
    /// curve into the prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_vartime(C::H_EFF)
    }
}

impl<C> ConditionallySelectable for ProjectivePoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C> ConstantTimeEq for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1 : Y1 : Z1) = (X2 : Y2 : Z2) iff X1 Z2 = X2 Z1 and Y1 Z2 = Y2 Z1,
        // unless exactly one of them is the identity.
        let x_eq = (self.x * other.z).ct_eq(&(other.x * self.z));
        let y_eq = (self.y * other.z).ct_eq(&(other.y * self.z));
        let both_identity = self.is_identity() & other.is_identity();
        let neither_identity = !self.is_identity() & !other.is_identity();
        both_identity | (neither_identity & x_eq & y_eq)
    }
}

impl<C> Default for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for ProjectivePoint<C> where C: CurveParams {}

impl<C> Eq for ProjectivePoint<C> where C: CurveParams {}

impl<C> PartialEq for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn from(p: AffinePoint<C>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: C::FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C> From<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn from(p: &AffinePoint<C>) -> Self {
        Self::from(*p)
    }
}

//
// Arithmetic trait impls
//

impl<C> Add<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, other)
    }
}

impl<C> AddAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C> Add<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl<C> Add<&AffinePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl<C> Add<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl<C> AddAssign<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::add_mixed(self, &rhs);
    }
}

impl<C> Sum for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a, C> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl<C> Sub<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(self, other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<C> SubAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C> SubAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<C> Sub<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(&self, &other)
    }
}

impl<C> Sub<&AffinePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(self, other)
    }
}

impl<C> Sub<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(&self, other)
    }
}

impl<C> Neg for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(&self)
    }
}

impl<'a, C> Neg for &'a ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}
