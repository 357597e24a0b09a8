//! Affine curve points.

use super::{CurveParams, GROUP_ORDER, ProjectivePoint};
use core::ops::Neg;
use elliptic_curve::{
    ff::Field,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

/// Point on a BLS12-381 group in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: CurveParams> {
    /// x-coordinate
    pub(crate) x: C::FieldElement,

    /// y-coordinate
    pub(crate) y: C::FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C> AffinePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the group.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Create a point from its coordinates.
    ///
    /// Returns `None` if `(x, y)` does not satisfy the curve equation.
    pub fn new(x: C::FieldElement, y: C::FieldElement) -> CtOption<Self> {
        let point = Self { x, y, infinity: 0 };
        CtOption::new(point, point.is_well_formed())
    }

    /// Map a point of the isogenous curve onto this group's curve.
    ///
    /// Inputs at which the isogeny is undefined map to the identity.
    pub fn from_isogenous(x: &C::FieldElement, y: &C::FieldElement) -> Self {
        let (x, y, is_identity) = C::ISOGENY.evaluate(x, y);
        Self {
            x,
            y,
            infinity: is_identity.unwrap_u8(),
        }
    }

    /// The x-coordinate, or zero for the identity.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// The y-coordinate, or zero for the identity.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Is this point the identity or a solution of `y² = x³ + b`?
    pub fn is_well_formed(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.x.square() * self.x + C::EQUATION_B;
        self.is_identity() | lhs.ct_eq(&rhs)
    }

    /// Is this point in the prime-order subgroup?
    ///
    /// Checked by multiplying with the group order `r`. The multiplication
    /// only branches on the bits of `r`, which is public.
    pub fn is_torsion_free(&self) -> Choice {
        ProjectivePoint::from(*self)
            .mul_vartime(&GROUP_ORDER)
            .is_identity()
    }
}

impl<C> ConditionallySelectable for AffinePoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C> ConstantTimeEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity() & other.is_identity();
        let neither_identity = !self.is_identity() & !other.is_identity();
        both_identity | (neither_identity & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl<C> Default for AffinePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for AffinePoint<C> where C: CurveParams {}

impl<C> Eq for AffinePoint<C> where C: CurveParams {}

impl<C> PartialEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<ProjectivePoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> From<&ProjectivePoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: CurveParams,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: CurveParams,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}
