//! BLAS Level 3: Hermitian / symmetric matrix-matrix product.
//!
//! `hemm` computes
//!
//! ```text
//! C := alpha*A*B + beta*C    (Side::Left,  A is m x m)
//! C := alpha*B*A + beta*C    (Side::Right, A is n x n)
//! ```
//!
//! where only one triangle of `A` is stored. The missing triangle is
//! reconstructed as `A[j,i] = conj(A[i,j])` for Hermitian storage and
//! `A[j,i] = A[i,j]` for symmetric storage. For Hermitian storage only the
//! real part of the diagonal is ever read.

use blas_traits::{Conj, ElementOp, Identity};
use tracing::trace;

use crate::layout::{MatrixKind, Side, Uplo};
use crate::view::{MatrixView, MatrixViewMut};
use crate::{BlasError, BlasScalar, Result};

/// Read-only operands and scalars of one product, unpacked from the views.
struct Operands<'a, T> {
    alpha: T,
    beta: T,
    a: &'a [T],
    lda: usize,
    b: &'a [T],
    ldb: usize,
}

/// Multiply `v` by the diagonal entry `d` of `A`.
///
/// Hermitian storage (`Op = Conj`) uses only `re(d)`; symmetric storage
/// uses `d` itself.
#[inline(always)]
fn scale_by_diagonal<T: BlasScalar, Op: ElementOp<T>>(d: T, v: T) -> T {
    if Op::IS_IDENTITY {
        d * v
    } else {
        v.scale_real(d.re())
    }
}

/// Hermitian (or symmetric) matrix-matrix product, accumulating into `C`.
///
/// `kind` must be [`MatrixKind::Hermitian`] or [`MatrixKind::Symmetric`]; the
/// carried [`Uplo`] names the stored triangle. `C` is `m x n`, `B` must be
/// `m x n` and `A` square of order `m` (left) or `n` (right).
///
/// Returns immediately, touching no buffer, when `m == 0`, `n == 0`, or
/// `alpha == 0 && beta == 1`.
///
/// # Errors
///
/// - [`BlasError::UnsupportedKind`] for any other matrix kind
/// - [`BlasError::NonSquare`] / [`BlasError::ShapeMismatch`] for operands
///   whose dimensions do not fit `C`
pub fn hemm<T: BlasScalar>(
    side: Side,
    kind: MatrixKind,
    alpha: T,
    a: &MatrixView<'_, T>,
    b: &MatrixView<'_, T>,
    beta: T,
    c: &mut MatrixViewMut<'_, T>,
) -> Result<()> {
    let (uplo, hermitian) = match kind {
        MatrixKind::Hermitian(uplo) => (uplo, true),
        MatrixKind::Symmetric(uplo) => (uplo, false),
        _ => return Err(BlasError::UnsupportedKind { op: "hemm", kind }),
    };

    let (m, n) = (c.rows(), c.cols());
    if a.rows() != a.cols() {
        return Err(BlasError::NonSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let ka = match side {
        Side::Left => m,
        Side::Right => n,
    };
    if a.rows() != ka {
        return Err(BlasError::ShapeMismatch(
            vec![ka, ka],
            vec![a.rows(), a.cols()],
        ));
    }
    if b.rows() != m || b.cols() != n {
        return Err(BlasError::ShapeMismatch(vec![m, n], vec![b.rows(), b.cols()]));
    }

    if m == 0 || n == 0 || (alpha.is_zero() && beta.is_one()) {
        trace!(m, n, "hemm: quick return");
        return Ok(());
    }

    let ops = Operands {
        alpha,
        beta,
        a: a.data(),
        lda: a.ld(),
        b: b.data(),
        ldb: b.ld(),
    };
    let ldc = c.ld();
    let cs = c.data_mut();

    if hermitian {
        product::<T, Conj>(side, uplo, m, n, &ops, cs, ldc);
    } else {
        product::<T, Identity>(side, uplo, m, n, &ops, cs, ldc);
    }
    Ok(())
}

fn product<T: BlasScalar, Op: ElementOp<T>>(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    p: &Operands<'_, T>,
    c: &mut [T],
    ldc: usize,
) {
    match (side, uplo) {
        (Side::Left, Uplo::Upper) => left_upper::<T, Op>(m, n, p, c, ldc),
        (Side::Left, Uplo::Lower) => left_lower::<T, Op>(m, n, p, c, ldc),
        (Side::Right, _) => right::<T, Op>(uplo, m, n, p, c, ldc),
    }
}

/// C := alpha*A*B + beta*C, upper triangle stored; rows ascending.
///
/// Row `i` of `B` scatters into the rows of `C` above `i` through column `i`
/// of `A`, and gathers the mirrored contribution of row `i` of `A` into
/// `temp2`. Rows above `i` have already been scaled by `beta`.
fn left_upper<T: BlasScalar, Op: ElementOp<T>>(
    m: usize,
    n: usize,
    p: &Operands<'_, T>,
    c: &mut [T],
    ldc: usize,
) {
    let (a, lda, b, ldb) = (p.a, p.lda, p.b, p.ldb);
    for j in 0..n {
        for i in 0..m {
            let temp1 = p.alpha * b[i + j * ldb];
            let mut temp2 = T::zero();
            for k in 0..i {
                let aki = a[k + i * lda];
                c[k + j * ldc] += temp1 * aki;
                temp2 += b[k + j * ldb] * Op::apply(aki);
            }
            let cij = i + j * ldc;
            c[cij] = p.beta * c[cij]
                + scale_by_diagonal::<T, Op>(a[i + i * lda], temp1)
                + p.alpha * temp2;
        }
    }
}

/// C := alpha*A*B + beta*C, lower triangle stored; rows descending.
fn left_lower<T: BlasScalar, Op: ElementOp<T>>(
    m: usize,
    n: usize,
    p: &Operands<'_, T>,
    c: &mut [T],
    ldc: usize,
) {
    let (a, lda, b, ldb) = (p.a, p.lda, p.b, p.ldb);
    for j in 0..n {
        for i in (0..m).rev() {
            let temp1 = p.alpha * b[i + j * ldb];
            let mut temp2 = T::zero();
            for k in i + 1..m {
                let aki = a[k + i * lda];
                c[k + j * ldc] += temp1 * aki;
                temp2 += b[k + j * ldb] * Op::apply(aki);
            }
            let cij = i + j * ldc;
            c[cij] = p.beta * c[cij]
                + p.alpha * temp2
                + scale_by_diagonal::<T, Op>(a[i + i * lda], temp1);
        }
    }
}

/// C := alpha*B*A + beta*C.
///
/// Column `j` of `C` is first set to `beta*C[:,j] + alpha*A[j,j]*B[:,j]`,
/// then every other column `k` of `B` adds a rank-1 contribution weighted by
/// the logical entry `A[k,j]`.
fn right<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    m: usize,
    n: usize,
    p: &Operands<'_, T>,
    c: &mut [T],
    ldc: usize,
) {
    let (a, lda, b, ldb) = (p.a, p.lda, p.b, p.ldb);
    for j in 0..n {
        let temp = scale_by_diagonal::<T, Op>(a[j + j * lda], p.alpha);
        for i in 0..m {
            let cij = i + j * ldc;
            c[cij] = p.beta * c[cij] + temp * b[i + j * ldb];
        }

        for k in 0..j {
            let akj = match uplo {
                Uplo::Upper => a[k + j * lda],
                Uplo::Lower => Op::apply(a[j + k * lda]),
            };
            let temp = p.alpha * akj;
            for i in 0..m {
                c[i + j * ldc] += temp * b[i + k * ldb];
            }
        }
        for k in j + 1..n {
            let akj = match uplo {
                Uplo::Upper => Op::apply(a[j + k * lda]),
                Uplo::Lower => a[k + j * lda],
            };
            let temp = p.alpha * akj;
            for i in 0..m {
                c[i + j * ldc] += temp * b[i + k * ldb];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Diag;
    use num_complex::Complex64;

    #[test]
    fn test_symm_left_upper_real() {
        // A = [[1, 2], [2, 3]], lower slot holds garbage.
        let a_data = vec![1.0, 99.0, 2.0, 3.0];
        let b_data = vec![1.0, 1.0];
        let mut c_data = vec![0.0, 0.0];
        let a = MatrixView::col_major(&a_data, 2, 2).unwrap();
        let b = MatrixView::col_major(&b_data, 2, 1).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 2, 1).unwrap();

        hemm(
            Side::Left,
            MatrixKind::Symmetric(Uplo::Upper),
            1.0,
            &a,
            &b,
            0.0,
            &mut c,
        )
        .unwrap();
        assert_eq!(c_data, vec![3.0, 5.0]);
    }

    #[test]
    fn test_hemm_left_lower_with_beta() {
        // A = [[2, 1], [1, 4]] stored lower; B = I; C = ones.
        let a_data = vec![2.0, 1.0, -7.0, 4.0];
        let b_data = vec![1.0, 0.0, 0.0, 1.0];
        let mut c_data = vec![1.0; 4];
        let a = MatrixView::col_major(&a_data, 2, 2).unwrap();
        let b = MatrixView::col_major(&b_data, 2, 2).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 2, 2).unwrap();

        hemm(
            Side::Left,
            MatrixKind::Hermitian(Uplo::Lower),
            2.0,
            &a,
            &b,
            3.0,
            &mut c,
        )
        .unwrap();
        // 2*A + 3*ones
        assert_eq!(c_data, vec![7.0, 5.0, 5.0, 11.0]);
    }

    #[test]
    fn test_hemm_right_lower_complex_ignores_diagonal_imaginary() {
        let z = Complex64::new(1.0, 1.0);
        let junk = Complex64::new(42.0, -42.0);
        // A = [[2, conj(z)], [z, 5]] stored lower, with imaginary noise on
        // the diagonal.
        let a_data = vec![
            Complex64::new(2.0, 7.0),
            z,
            junk,
            Complex64::new(5.0, -3.0),
        ];
        let b_data = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
        let mut c_data = vec![Complex64::new(0.0, 0.0); 2];
        let a = MatrixView::col_major(&a_data, 2, 2).unwrap();
        let b = MatrixView::col_major(&b_data, 1, 2).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 1, 2).unwrap();

        hemm(
            Side::Right,
            MatrixKind::Hermitian(Uplo::Lower),
            Complex64::new(1.0, 0.0),
            &a,
            &b,
            Complex64::new(0.0, 0.0),
            &mut c,
        )
        .unwrap();
        assert_eq!(
            c_data,
            vec![Complex64::new(1.0, 1.0), Complex64::new(1.0, 4.0)]
        );
    }

    #[test]
    fn test_quick_return_leaves_c_untouched() {
        let a_data = vec![1.0, 2.0, 3.0, 4.0];
        let b_data = vec![1.0, 1.0, 1.0, 1.0];
        let mut c_data = vec![f64::NAN, -0.0, 1.5, f64::INFINITY];
        let before: Vec<u64> = c_data.iter().map(|v| v.to_bits()).collect();
        let a = MatrixView::col_major(&a_data, 2, 2).unwrap();
        let b = MatrixView::col_major(&b_data, 2, 2).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 2, 2).unwrap();

        hemm(
            Side::Right,
            MatrixKind::Hermitian(Uplo::Upper),
            0.0,
            &a,
            &b,
            1.0,
            &mut c,
        )
        .unwrap();
        let after: Vec<u64> = c_data.iter().map(|v| v.to_bits()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_hemm_rejects_triangular_kind() {
        let a_data = vec![1.0; 4];
        let b_data = vec![1.0; 4];
        let mut c_data = vec![0.0; 4];
        let a = MatrixView::col_major(&a_data, 2, 2).unwrap();
        let b = MatrixView::col_major(&b_data, 2, 2).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 2, 2).unwrap();

        let err = hemm(
            Side::Left,
            MatrixKind::UpperTriangular(Diag::NonUnit),
            1.0,
            &a,
            &b,
            0.0,
            &mut c,
        )
        .unwrap_err();
        assert!(matches!(err, BlasError::UnsupportedKind { op: "hemm", .. }));
        assert_eq!(c_data, vec![0.0; 4]);
    }

    #[test]
    fn test_hemm_shape_checks() {
        let a_data = vec![1.0; 9];
        let b_data = vec![1.0; 6];
        let mut c_data = vec![0.0; 6];
        let a = MatrixView::col_major(&a_data, 3, 3).unwrap();
        let b = MatrixView::col_major(&b_data, 2, 3).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 2, 3).unwrap();
        let kind = MatrixKind::Hermitian(Uplo::Upper);

        // Left needs A of order m = 2.
        assert!(matches!(
            hemm(Side::Left, kind, 1.0, &a, &b, 0.0, &mut c),
            Err(BlasError::ShapeMismatch(_, _))
        ));
        // Right needs A of order n = 3.
        hemm(Side::Right, kind, 1.0, &a, &b, 0.0, &mut c).unwrap();

        let rect = MatrixView::col_major(&a_data, 3, 2).unwrap();
        assert!(matches!(
            hemm(Side::Right, kind, 1.0, &rect, &b, 0.0, &mut c),
            Err(BlasError::NonSquare { rows: 3, cols: 2 })
        ));
        assert_eq!(c_data, vec![3.0; 6]);
    }

    #[test]
    fn test_empty_output_is_quick_return() {
        let kind = MatrixKind::Hermitian(Uplo::Lower);

        // m = 0: A is read for n = 3 on the right but must not be.
        let a_data = vec![f64::NAN; 9];
        let b_data: Vec<f64> = vec![];
        let mut c_data = vec![7.0, 7.0];
        let a = MatrixView::col_major(&a_data, 3, 3).unwrap();
        let b = MatrixView::col_major(&b_data, 0, 3).unwrap();
        let mut c = MatrixViewMut::new(&mut c_data, 0, 3, 1).unwrap();
        hemm(Side::Right, kind, 2.0, &a, &b, 0.0, &mut c).unwrap();
        assert_eq!(c_data, vec![7.0, 7.0]);

        // n = 0 on the left.
        let a_data = vec![f64::NAN; 4];
        let b_data = vec![f64::NAN; 2];
        let mut c_data = vec![5.0, 5.0];
        let a = MatrixView::col_major(&a_data, 2, 2).unwrap();
        let b = MatrixView::col_major(&b_data, 2, 0).unwrap();
        let mut c = MatrixViewMut::col_major(&mut c_data, 2, 0).unwrap();
        hemm(Side::Left, kind, 2.0, &a, &b, 0.0, &mut c).unwrap();
        assert_eq!(c_data, vec![5.0, 5.0]);
    }
}
