//! Internal macros.

/// Implement the `core::ops` arithmetic traits (and `Sum`/`Product`) for a
/// field element type in terms of its inherent `add`, `sub`, `mul` and `neg`
/// methods, covering every owned/borrowed operand combination required by
/// [`ff::Field`](elliptic_curve::ff::Field).
macro_rules! impl_field_ops {
    ($fe:ty) => {
        impl_field_op!($fe, Add, add, AddAssign, add_assign);
        impl_field_op!($fe, Sub, sub, SubAssign, sub_assign);
        impl_field_op!($fe, Mul, mul, MulAssign, mul_assign);

        impl ::core::ops::Neg for $fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(&self)
            }
        }

        impl ::core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(self)
            }
        }

        impl ::core::iter::Sum for $fe {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<$fe>::ZERO, |acc, x| <$fe>::add(&acc, &x))
            }
        }

        impl<'a> ::core::iter::Sum<&'a $fe> for $fe {
            fn sum<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl ::core::iter::Product for $fe {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<$fe>::ONE, |acc, x| <$fe>::mul(&acc, &x))
            }
        }

        impl<'a> ::core::iter::Product<&'a $fe> for $fe {
            fn product<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().product()
            }
        }
    };
}

/// Implement a single binary operator and its assigning form for every
/// owned/borrowed operand combination.
macro_rules! impl_field_op {
    ($fe:ty, $op:ident, $op_fn:ident, $op_assign:ident, $op_assign_fn:ident) => {
        impl ::core::ops::$op<$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $op_fn(self, rhs: $fe) -> $fe {
                <$fe>::$op_fn(&self, &rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $op_fn(self, rhs: &$fe) -> $fe {
                <$fe>::$op_fn(&self, rhs)
            }
        }

        impl ::core::ops::$op<$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $op_fn(self, rhs: $fe) -> $fe {
                <$fe>::$op_fn(self, &rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $op_fn(self, rhs: &$fe) -> $fe {
                <$fe>::$op_fn(self, rhs)
            }
        }

        impl ::core::ops::$op_assign<$fe> for $fe {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: $fe) {
                *self = <$fe>::$op_fn(self, &rhs);
            }
        }

        impl ::core::ops::$op_assign<&$fe> for $fe {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: &$fe) {
                *self = <$fe>::$op_fn(self, rhs);
            }
        }
    };
}
