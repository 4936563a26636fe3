//! Scalar type bounds for the managed kernels.

use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign};

use num_complex::Complex;
use num_traits::Float;

use crate::element_op::ElementOpApply;

/// Arithmetic bounds shared by every element type a kernel touches.
pub trait ScalarBase:
    Copy
    + Send
    + Sync
    + std::ops::Mul<Output = Self>
    + std::ops::Add<Output = Self>
    + num_traits::Zero
    + num_traits::One
    + PartialEq
{
}

impl<T> ScalarBase for T where
    T: Copy
        + Send
        + Sync
        + std::ops::Mul<Output = T>
        + std::ops::Add<Output = T>
        + num_traits::Zero
        + num_traits::One
        + PartialEq
{
}

/// Element types accepted by the BLAS kernels: `f32`, `f64` and their
/// complex counterparts.
///
/// `Real` is the underlying real field. Hermitian kernels read only the real
/// part of diagonal entries through [`BlasScalar::re`], and the `*dscal`
/// family scales by a real factor through [`BlasScalar::scale_real`].
pub trait BlasScalar:
    ScalarBase + ElementOpApply + AddAssign + MulAssign + Default + Debug + 'static
{
    type Real: Float + Debug + Send + Sync + 'static;

    /// Real part (the value itself for real types).
    fn re(self) -> Self::Real;

    /// Embed a real value.
    fn from_real(re: Self::Real) -> Self;

    /// Multiply by a real factor.
    fn scale_real(self, factor: Self::Real) -> Self;
}

macro_rules! impl_blas_scalar_real {
    ($($t:ty),*) => {
        $(
            impl BlasScalar for $t {
                type Real = $t;

                #[inline(always)]
                fn re(self) -> $t {
                    self
                }

                #[inline(always)]
                fn from_real(re: $t) -> Self {
                    re
                }

                #[inline(always)]
                fn scale_real(self, factor: $t) -> Self {
                    self * factor
                }
            }
        )*
    };
}

macro_rules! impl_blas_scalar_complex {
    ($($t:ty),*) => {
        $(
            impl BlasScalar for Complex<$t> {
                type Real = $t;

                #[inline(always)]
                fn re(self) -> $t {
                    self.re
                }

                #[inline(always)]
                fn from_real(re: $t) -> Self {
                    Complex::new(re, 0.0)
                }

                #[inline(always)]
                fn scale_real(self, factor: $t) -> Self {
                    Complex::new(self.re * factor, self.im * factor)
                }
            }
        )*
    };
}

impl_blas_scalar_real!(f32, f64);
impl_blas_scalar_complex!(f32, f64);
