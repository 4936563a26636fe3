//! Managed fallback BLAS kernels.
//!
//! Pure Rust, unoptimized implementations of a handful of BLAS primitives
//! operating on caller-owned, column-major buffers with explicit strides.
//! They are the path of last resort when no native BLAS is configured, so
//! the priority is exact reference semantics rather than throughput.
//!
//! # Kernels
//!
//! - **Level 1** ([`level1`]): [`scal`], [`scal_real`], [`copy`]
//! - **Level 2** ([`level2`]): [`tbmv`], triangular band matrix times vector
//!   in place
//! - **Level 3** ([`level3`]): [`hemm`], Hermitian (or symmetric) matrix
//!   times dense matrix with scaling and accumulation
//! - **Transposition** ([`transpose`]): [`transpose_in_place`] and its
//!   workspace query [`transpose_in_place_query`]
//!
//! Element types are anything implementing [`BlasScalar`]: `f32`, `f64`,
//! `Complex<f32>` and `Complex<f64>`.
//!
//! # Example
//!
//! ```rust
//! use managed_blas::{tbmv, BandMatrixView, Diag, MatrixKind, Transpose, VectorViewMut};
//!
//! // Unit upper triangular [[1, 2, 0], [0, 1, 3], [0, 0, 1]] in band storage
//! // with one super-diagonal: band row 0 holds the super-diagonal, row 1 the
//! // diagonal.
//! let band = vec![0.0, 1.0, 2.0, 1.0, 3.0, 1.0];
//! let a = BandMatrixView::new(&band, 3, 1, 2).unwrap();
//!
//! let mut x = vec![1.0, 1.0, 1.0];
//! let mut xv = VectorViewMut::contiguous(&mut x);
//! tbmv(MatrixKind::UpperTriangular(Diag::Unit), Transpose::NoTrans, &a, &mut xv).unwrap();
//! assert_eq!(x, vec![3.0, 4.0, 1.0]);
//! ```
//!
//! # Aliasing and concurrency
//!
//! Every kernel is a synchronous, stateless procedure. In-place updates (of
//! `x` in [`tbmv`], of `C` in [`hemm`], of the whole buffer in
//! [`transpose_in_place`]) are part of the contract; the borrow checker
//! guarantees that concurrent calls never share a mutable buffer.

pub mod layout;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod transpose;
pub mod view;

pub use blas_traits::{BlasScalar, Conj, ElementOp, ElementOpApply, Identity, ScalarBase};
pub use layout::{Diag, MatrixKind, Side, Transpose, Uplo};
pub use level1::{copy, scal, scal_real};
pub use level2::tbmv;
pub use level3::hemm;
pub use transpose::{transpose_in_place, transpose_in_place_query};
pub use view::{BandMatrixView, MatrixView, MatrixViewMut, VectorView, VectorViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the kernels and view constructors.
///
/// All of them are programmer errors detected before any element is touched;
/// the caller's buffers are left unmodified when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum BlasError {
    /// A vector view was given an increment of zero.
    #[error("vector increment must be non-zero")]
    ZeroIncrement,

    /// Leading dimension below the required minimum.
    #[error("leading dimension {ld} is below the required minimum {min}")]
    LeadingDimension { ld: usize, min: usize },

    /// The buffer is too short for the requested view.
    #[error("buffer of length {len} is too short, {required} elements required")]
    OutOfBounds { required: usize, len: usize },

    /// Integer overflow while computing a buffer offset.
    #[error("offset overflow while computing buffer extent")]
    OffsetOverflow,

    /// Operand shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// Matrix is not square when a square matrix was required.
    #[error("non-square matrix: rows={rows}, cols={cols}")]
    NonSquare { rows: usize, cols: usize },

    /// The routine does not implement this matrix structure.
    #[error("{op} does not support {kind} matrices")]
    UnsupportedKind { op: &'static str, kind: MatrixKind },

    /// A selector argument carries a value no routine understands.
    #[error("invalid value {value:?} for argument `{name}`")]
    InvalidArgument { name: &'static str, value: String },
}

impl BlasError {
    pub(crate) fn invalid_argument(name: &'static str, value: impl ToString) -> Self {
        BlasError::InvalidArgument {
            name,
            value: value.to_string(),
        }
    }
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, BlasError>;
