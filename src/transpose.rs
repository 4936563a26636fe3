//! In-place transposition of a non-square column-major matrix.
//!
//! Uses the decomposition of Catanzaro, Keller and Garland, "A Decomposition
//! for In-place Matrix Transposition" (PPoPP 2014): the transpose is split
//! into an optional column rotation, a row shuffle, and a column shuffle.
//! Each pass moves one row or column at a time through an auxiliary buffer
//! of `max(rows, cols)` elements, so no second `rows * cols` buffer is ever
//! allocated.

use tracing::{debug, trace};

use crate::{BlasError, Result};

/// Workspace length required by [`transpose_in_place`].
#[inline]
pub fn transpose_in_place_query(rows: usize, cols: usize) -> usize {
    rows.max(cols)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Transpose the `rows x cols` column-major matrix in `a` in place.
///
/// On return `a` holds the `cols x rows` column-major transpose. Only the
/// first `rows * cols` elements are touched; updating any shape metadata is
/// left to the caller.
///
/// `work` is an optional scratch vector reused across calls. If it is shorter
/// than [`transpose_in_place_query`] it is grown, so later calls with the
/// same vector do not allocate. Without one, a temporary buffer is allocated.
///
/// # Errors
///
/// [`BlasError::OutOfBounds`] when `a` holds fewer than `rows * cols`
/// elements.
///
/// # Example
///
/// ```rust
/// use managed_blas::transpose_in_place;
///
/// // 2 x 3, column-major
/// let mut a = vec![1, 2, 3, 4, 5, 6];
/// transpose_in_place(2, 3, &mut a, None).unwrap();
/// // 3 x 2, column-major
/// assert_eq!(a, vec![1, 3, 5, 2, 4, 6]);
/// ```
pub fn transpose_in_place<T: Copy + Default>(
    rows: usize,
    cols: usize,
    a: &mut [T],
    work: Option<&mut Vec<T>>,
) -> Result<()> {
    let len = rows.checked_mul(cols).ok_or(BlasError::OffsetOverflow)?;
    if a.len() < len {
        return Err(BlasError::OutOfBounds {
            required: len,
            len: a.len(),
        });
    }
    if len == 0 {
        trace!(rows, cols, "transpose_in_place: empty matrix");
        return Ok(());
    }

    let lwork = transpose_in_place_query(rows, cols);
    let mut local = Vec::new();
    let work: &mut [T] = match work {
        Some(w) => {
            if w.len() < lwork {
                debug!(have = w.len(), need = lwork, "growing transpose workspace");
                w.resize(lwork, T::default());
            }
            &mut w[..lwork]
        }
        None => {
            debug!(need = lwork, "allocating transpose workspace");
            local.resize(lwork, T::default());
            &mut local[..]
        }
    };

    permute(rows, cols, &mut a[..len], work);
    Ok(())
}

/// The three passes. The matrix is addressed as `a[i + m*j]` with `m = cols`
/// and `n = rows`, i.e. as the row-major `rows x cols` image of the input.
fn permute<T: Copy>(rows: usize, cols: usize, a: &mut [T], work: &mut [T]) {
    let m = cols;
    let n = rows;
    let c = gcd(m, n);
    let b = n / c;
    let e = m / c;

    // Column rotation, only needed when the dimensions share a factor.
    if c > 1 {
        for j in 0..n {
            let col = &mut a[m * j..m * (j + 1)];
            for i in 0..m {
                work[i] = col[(i + j / b) % m];
            }
            col.copy_from_slice(&work[..m]);
        }
    }

    // Row shuffle: scatter row i (stride m) into work, then gather back.
    for i in 0..m {
        for j in 0..n {
            let d = ((i + j / b) % m + j * m) % n;
            work[d] = a[i + m * j];
        }
        for j in 0..n {
            a[i + m * j] = work[j];
        }
    }

    // Column shuffle.
    for j in 0..n {
        let col = &mut a[m * j..m * (j + 1)];
        for i in 0..m {
            let s = (j + i * n - i / e) % m;
            work[i] = col[s];
        }
        col.copy_from_slice(&work[..m]);
    }
}
