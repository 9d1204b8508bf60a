use std::sync::Arc;

use num_bigint::BigUint;

use crate::Curve;

/// Group law shared by the affine and Jacobian representations.
pub trait Group: Sized + Clone {
    fn identity(curve: &Arc<Curve>) -> Self;
    fn curve(&self) -> &Arc<Curve>;
    fn is_identity(&self) -> bool;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;
    fn add_point(&self, other: &Self) -> Self;

    /// Binary double-and-add, most significant bit first.
    ///
    /// `k` is used as given; callers reduce it modulo the group order.
    fn scalar_mul(&self, k: &BigUint) -> Self {
        let mut result = Self::identity(self.curve());

        for i in (0..k.bits()).rev() {
            result = result.double();
            if k.bit(i) {
                result = result.add_point(self);
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        self.scalar_mul(&BigUint::from(n))
    }
}

/// Operator sugar over [`Group`] for a point type.
macro_rules! impl_group_ops {
    ($point:ty) => {
        impl core::ops::Add<&$point> for &$point {
            type Output = $point;

            #[inline]
            fn add(self, other: &$point) -> $point {
                $crate::Group::add_point(self, other)
            }
        }

        impl core::ops::Add for $point {
            type Output = $point;

            #[inline]
            fn add(self, other: $point) -> $point {
                $crate::Group::add_point(&self, &other)
            }
        }

        impl core::ops::AddAssign<&$point> for $point {
            #[inline]
            fn add_assign(&mut self, other: &$point) {
                *self = $crate::Group::add_point(self, other);
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl core::ops::Sub<&$point> for &$point {
            type Output = $point;

            #[inline]
            fn sub(self, other: &$point) -> $point {
                $crate::Group::add_point(self, &$crate::Group::negate(other))
            }
        }

        impl core::ops::Neg for &$point {
            type Output = $point;

            #[inline]
            fn neg(self) -> $point {
                $crate::Group::negate(self)
            }
        }

        impl core::ops::Neg for $point {
            type Output = $point;

            #[inline]
            fn neg(self) -> $point {
                $crate::Group::negate(&self)
            }
        }

        impl core::ops::Mul<&num_bigint::BigUint> for &$point {
            type Output = $point;

            #[inline]
            fn mul(self, k: &num_bigint::BigUint) -> $point {
                $crate::Group::scalar_mul(self, k)
            }
        }

        impl core::ops::Mul<&$point> for &num_bigint::BigUint {
            type Output = $point;

            #[inline]
            fn mul(self, point: &$point) -> $point {
                $crate::Group::scalar_mul(point, self)
            }
        }

        impl core::ops::Mul<&$point> for u64 {
            type Output = $point;

            #[inline]
            fn mul(self, point: &$point) -> $point {
                $crate::Group::mul_u64(point, self)
            }
        }
    };
}

pub(crate) use impl_group_ops;
