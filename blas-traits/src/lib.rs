//! Shared traits for the managed-blas kernels.
//!
//! This crate holds the scalar bounds every kernel is generic over and the
//! type-level element operations used to pick conjugation once per call,
//! so that inner loops are monomorphised rather than branching per element.

pub mod element_op;
pub mod scalar;

pub use element_op::{Conj, ElementOp, ElementOpApply, Identity};
pub use scalar::{BlasScalar, ScalarBase};
