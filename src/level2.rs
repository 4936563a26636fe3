//! BLAS Level 2: triangular band matrix-vector product.
//!
//! `tbmv` computes `x := op(A) * x` in place, where `A` is an `n x n`
//! triangular band matrix with `k` stored off-diagonals. The four traversal
//! orders (no-transpose / transpose times upper / lower) are not
//! interchangeable: each reads entries of `x` that earlier iterations of the
//! same pass have already overwritten, and relies on that.

use blas_traits::{Conj, ElementOp, Identity};
use tracing::trace;

use crate::layout::{MatrixKind, Transpose, Uplo};
use crate::view::{BandMatrixView, VectorViewMut};
use crate::{BlasError, BlasScalar, Result};

/// Band storage plus the diagonal convention, unpacked once per call.
struct Band<'a, T> {
    data: &'a [T],
    k: usize,
    ld: usize,
    nounit: bool,
}

impl<T: Copy> Band<'_, T> {
    /// Entry stored in band row `row` of column `j`.
    #[inline(always)]
    fn get(&self, row: usize, j: usize) -> T {
        self.data[row + j * self.ld]
    }
}

/// Triangular band matrix-vector product: `x := op(A) * x`.
///
/// `kind` must be [`MatrixKind::UpperTriangular`] or
/// [`MatrixKind::LowerTriangular`]; its [`Diag`](crate::Diag) decides whether
/// the stored diagonal is read. `trans` selects `op(A) = A`, `A^T`, or `A^H`
/// (for real scalars the last two coincide).
///
/// `x` may have any non-zero increment. A negative increment walks the
/// buffer from its far end exactly as the reference BLAS does.
///
/// # Errors
///
/// - [`BlasError::UnsupportedKind`] for non-triangular kinds
/// - [`BlasError::ShapeMismatch`] when `x.len()` differs from the order of `A`
pub fn tbmv<T: BlasScalar>(
    kind: MatrixKind,
    trans: Transpose,
    a: &BandMatrixView<'_, T>,
    x: &mut VectorViewMut<'_, T>,
) -> Result<()> {
    let (uplo, diag) = kind
        .triangular()
        .ok_or(BlasError::UnsupportedKind { op: "tbmv", kind })?;
    let n = a.order();
    if x.len() != n {
        return Err(BlasError::ShapeMismatch(vec![n, n], vec![x.len()]));
    }
    if n == 0 {
        trace!("tbmv: empty matrix");
        return Ok(());
    }

    let band = Band {
        data: a.data(),
        k: a.bandwidth(),
        ld: a.ld(),
        nounit: !diag.is_unit(),
    };
    let inc = x.inc();
    let kx = x.start();
    let xs = x.data_mut();

    match (trans, uplo) {
        (Transpose::NoTrans, Uplo::Upper) => notrans_upper(n, &band, xs, kx, inc),
        (Transpose::NoTrans, Uplo::Lower) => notrans_lower(n, &band, xs, kx, inc),
        (Transpose::Trans, Uplo::Upper) => trans_upper::<T, Identity>(n, &band, xs, kx, inc),
        (Transpose::Trans, Uplo::Lower) => trans_lower::<T, Identity>(n, &band, xs, kx, inc),
        (Transpose::ConjTrans, Uplo::Upper) => trans_upper::<T, Conj>(n, &band, xs, kx, inc),
        (Transpose::ConjTrans, Uplo::Lower) => trans_lower::<T, Conj>(n, &band, xs, kx, inc),
    }
    Ok(())
}

// `kx` is the buffer position of the first element of `x` still to be
// updated by the inner loop, `jx` the position of element `j`. Both are
// signed so that negative increments may step past the start of the buffer
// after the last iteration without ever being dereferenced there.

/// x := A*x, A upper: columns ascending, diagonal applied after the column.
fn notrans_upper<T: BlasScalar>(n: usize, a: &Band<'_, T>, x: &mut [T], mut kx: isize, inc: isize) {
    let k = a.k;
    let mut jx = kx;
    for j in 0..n {
        let temp = x[jx as usize];
        let mut ix = kx;
        for i in j.saturating_sub(k)..j {
            x[ix as usize] += temp * a.get(k + i - j, j);
            ix += inc;
        }
        if a.nounit {
            x[jx as usize] *= a.get(k, j);
        }
        jx += inc;
        if j >= k {
            kx += inc;
        }
    }
}

/// x := A*x, A lower: columns descending, rows bottom-up.
fn notrans_lower<T: BlasScalar>(n: usize, a: &Band<'_, T>, x: &mut [T], kx: isize, inc: isize) {
    let k = a.k;
    let mut kx = kx + (n as isize - 1) * inc;
    let mut jx = kx;
    for j in (0..n).rev() {
        let temp = x[jx as usize];
        let mut ix = kx;
        for i in (j + 1..(j + k + 1).min(n)).rev() {
            x[ix as usize] += temp * a.get(i - j, j);
            ix -= inc;
        }
        if a.nounit {
            x[jx as usize] *= a.get(0, j);
        }
        jx -= inc;
        if n - 1 - j >= k {
            kx -= inc;
        }
    }
}

/// x := op(A)^T*x, A upper: columns descending, diagonal applied first.
fn trans_upper<T: BlasScalar, Op: ElementOp<T>>(
    n: usize,
    a: &Band<'_, T>,
    x: &mut [T],
    kx: isize,
    inc: isize,
) {
    let k = a.k;
    let mut kx = kx + (n as isize - 1) * inc;
    let mut jx = kx;
    for j in (0..n).rev() {
        let mut temp = x[jx as usize];
        kx -= inc;
        let mut ix = kx;
        if a.nounit {
            temp *= Op::apply(a.get(k, j));
        }
        for i in (j.saturating_sub(k)..j).rev() {
            temp += Op::apply(a.get(k + i - j, j)) * x[ix as usize];
            ix -= inc;
        }
        x[jx as usize] = temp;
        jx -= inc;
    }
}

/// x := op(A)^T*x, A lower: columns ascending, diagonal applied first.
fn trans_lower<T: BlasScalar, Op: ElementOp<T>>(
    n: usize,
    a: &Band<'_, T>,
    x: &mut [T],
    mut kx: isize,
    inc: isize,
) {
    let k = a.k;
    let mut jx = kx;
    for j in 0..n {
        let mut temp = x[jx as usize];
        kx += inc;
        let mut ix = kx;
        if a.nounit {
            temp *= Op::apply(a.get(0, j));
        }
        for i in j + 1..(j + k + 1).min(n) {
            temp += Op::apply(a.get(i - j, j)) * x[ix as usize];
            ix += inc;
        }
        x[jx as usize] = temp;
        jx += inc;
    }
}
