//! Element-wise operations applied lazily to stored matrix entries.
//!
//! Structured kernels read one triangle of a matrix and reconstruct the
//! other one. Whether the reconstruction conjugates (Hermitian storage,
//! conjugate-transpose products) or not (symmetric storage, plain transpose)
//! is encoded as a zero-sized marker type:
//!
//! - [`Identity`]: `f(x) = x`
//! - [`Conj`]: `f(x) = conj(x)`
//!
//! The kernel entry point matches on the runtime selector once and then
//! calls a loop body generic over `Op: ElementOp<T>`, so the choice costs
//! nothing inside the loop.

use num_complex::Complex;
use num_traits::Num;

// ---------------------------------------------------------------------------
// ElementOpApply: trait for types that support conjugation
// ---------------------------------------------------------------------------

/// Trait for types that support complex conjugation.
///
/// The default implementation returns `self` unchanged, so real-valued types
/// can simply write:
/// ```ignore
/// impl ElementOpApply for MyType {}
/// ```
pub trait ElementOpApply: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_element_op_apply_real {
    ($($t:ty),*) => {
        $(impl ElementOpApply for $t {})*
    };
}

impl_element_op_apply_real!(f32, f64);

impl<T: Num + Copy + Clone + std::ops::Neg<Output = T>> ElementOpApply for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

// ---------------------------------------------------------------------------
// Marker types
// ---------------------------------------------------------------------------

/// Identity operation: f(x) = x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Complex conjugate operation: f(x) = conj(x)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conj;

/// An element operation applied to every value read through it.
pub trait ElementOp<T>: Copy + Default + 'static {
    /// Whether this operation is the identity (no-op).
    const IS_IDENTITY: bool = false;

    /// Apply the operation to a value.
    fn apply(value: T) -> T;
}

impl<T: Copy> ElementOp<T> for Identity {
    const IS_IDENTITY: bool = true;

    #[inline(always)]
    fn apply(value: T) -> T {
        value
    }
}

impl<T: ElementOpApply> ElementOp<T> for Conj {
    #[inline(always)]
    fn apply(value: T) -> T {
        value.conj()
    }
}
