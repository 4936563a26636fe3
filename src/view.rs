//! Caller-owned strided views handed to the kernels.
//!
//! - [`VectorView`] / [`VectorViewMut`]: `n` elements spaced `inc` apart
//! - [`MatrixView`] / [`MatrixViewMut`]: column-major dense matrix with a
//!   leading dimension
//! - [`BandMatrixView`]: triangular band storage (`k` off-diagonals plus the
//!   main diagonal per column)
//!
//! Construction validates the cheaply checkable invariants (non-zero
//! increment, leading-dimension minima, buffer long enough for every touched
//! element), so the kernels index the borrowed slices without re-checking.
//!
//! Vector views follow the BLAS convention for negative increments: `offset`
//! is the lowest buffer index the view touches and a negative `inc` walks the
//! logical elements backwards from the far end.

use crate::{BlasError, Result};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that a vector of `len` elements spaced `inc` apart starting at
/// `offset` fits in a buffer of `buf_len` elements.
fn validate_vector(buf_len: usize, len: usize, inc: isize, offset: usize) -> Result<()> {
    if inc == 0 {
        return Err(BlasError::ZeroIncrement);
    }
    if len == 0 {
        return Ok(());
    }
    let span = (len - 1)
        .checked_mul(inc.unsigned_abs())
        .ok_or(BlasError::OffsetOverflow)?;
    let last = offset.checked_add(span).ok_or(BlasError::OffsetOverflow)?;
    if last >= buf_len {
        return Err(BlasError::OutOfBounds {
            required: last + 1,
            len: buf_len,
        });
    }
    Ok(())
}

/// Validate a column-major `rows x cols` matrix with leading dimension `ld`.
fn validate_matrix(buf_len: usize, rows: usize, cols: usize, ld: usize) -> Result<()> {
    let min = rows.max(1);
    if ld < min {
        return Err(BlasError::LeadingDimension { ld, min });
    }
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let required = ld
        .checked_mul(cols - 1)
        .and_then(|v| v.checked_add(rows))
        .ok_or(BlasError::OffsetOverflow)?;
    if required > buf_len {
        return Err(BlasError::OutOfBounds {
            required,
            len: buf_len,
        });
    }
    Ok(())
}

/// Buffer position of logical element 0.
#[inline]
fn first_position(len: usize, inc: isize, offset: usize) -> isize {
    if inc < 0 && len > 0 {
        offset as isize - (len as isize - 1) * inc
    } else {
        offset as isize
    }
}

// ============================================================================
// VectorView
// ============================================================================

/// Immutable strided vector view.
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    len: usize,
    inc: isize,
    offset: usize,
}

impl<'a, T> VectorView<'a, T> {
    /// Create a view of `len` elements spaced `inc` apart.
    pub fn new(data: &'a [T], len: usize, inc: isize, offset: usize) -> Result<Self> {
        validate_vector(data.len(), len, inc, offset)?;
        Ok(Self {
            data,
            len,
            inc,
            offset,
        })
    }

    /// Unit-stride view over the whole slice.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            len: data.len(),
            inc: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Buffer position of logical element 0.
    #[inline]
    pub(crate) fn start(&self) -> isize {
        first_position(self.len, self.inc, self.offset)
    }
}

impl<T: Copy> VectorView<'_, T> {
    /// Logical element `i`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        assert!(i < self.len, "index {i} out of range for length {}", self.len);
        self.data[(self.start() + i as isize * self.inc) as usize]
    }

    /// Gather the logical elements into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len).map(|i| self.get(i)).collect()
    }
}

// ============================================================================
// VectorViewMut
// ============================================================================

/// Mutable strided vector view. Kernels update it in place.
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    inc: isize,
    offset: usize,
}

impl<'a, T> VectorViewMut<'a, T> {
    /// Create a mutable view of `len` elements spaced `inc` apart.
    pub fn new(data: &'a mut [T], len: usize, inc: isize, offset: usize) -> Result<Self> {
        validate_vector(data.len(), len, inc, offset)?;
        Ok(Self {
            data,
            len,
            inc,
            offset,
        })
    }

    /// Unit-stride view over the whole slice.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            len,
            inc: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView {
            data: &*self.data,
            len: self.len,
            inc: self.inc,
            offset: self.offset,
        }
    }

    #[inline]
    pub(crate) fn start(&self) -> isize {
        first_position(self.len, self.inc, self.offset)
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T: Copy> VectorViewMut<'_, T> {
    /// Logical element `i`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.as_view().get(i)
    }

    /// Overwrite logical element `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        assert!(i < self.len, "index {i} out of range for length {}", self.len);
        let pos = self.start() + i as isize * self.inc;
        self.data[pos as usize] = value;
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_view().to_vec()
    }
}

// ============================================================================
// MatrixView / MatrixViewMut
// ============================================================================

/// Immutable column-major matrix view. Element `(i, j)` is `data[i + j*ld]`.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view; requires `ld >= max(1, rows)`.
    pub fn new(data: &'a [T], rows: usize, cols: usize, ld: usize) -> Result<Self> {
        validate_matrix(data.len(), rows, cols, ld)?;
        Ok(Self {
            data,
            rows,
            cols,
            ld,
        })
    }

    /// Tightly packed column-major view (`ld = max(1, rows)`).
    pub fn col_major(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, rows, cols, rows.max(1))
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn ld(&self) -> usize {
        self.ld
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }
}

#[inline]
fn check_index(i: usize, j: usize, rows: usize, cols: usize) {
    assert!(
        i < rows && j < cols,
        "index ({i}, {j}) out of range for {rows}x{cols} matrix"
    );
}

impl<T: Copy> MatrixView<'_, T> {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        check_index(i, j, self.rows, self.cols);
        self.data[i + j * self.ld]
    }
}

/// Mutable column-major matrix view.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, ld: usize) -> Result<Self> {
        validate_matrix(data.len(), rows, cols, ld)?;
        Ok(Self {
            data,
            rows,
            cols,
            ld,
        })
    }

    pub fn col_major(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, rows, cols, rows.max(1))
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn ld(&self) -> usize {
        self.ld
    }

    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
            ld: self.ld,
        }
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        check_index(i, j, self.rows, self.cols);
        self.data[i + j * self.ld]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        check_index(i, j, self.rows, self.cols);
        self.data[i + j * self.ld] = value;
    }
}

// ============================================================================
// BandMatrixView
// ============================================================================

/// Triangular band matrix of order `n` with `k` super- (upper storage) or
/// sub-diagonals (lower storage), stored column by column.
///
/// Upper storage keeps the diagonal in band row `k`: logical `(i, j)` with
/// `j - k <= i <= j` lives at `k + i - j + j*ld`. Lower storage keeps the
/// diagonal in band row 0: `(i, j)` with `j <= i <= j + k` lives at
/// `i - j + j*ld`.
#[derive(Debug, Clone, Copy)]
pub struct BandMatrixView<'a, T> {
    data: &'a [T],
    n: usize,
    k: usize,
    ld: usize,
}

impl<'a, T> BandMatrixView<'a, T> {
    /// Create a band view; requires `ld >= k + 1`.
    pub fn new(data: &'a [T], n: usize, k: usize, ld: usize) -> Result<Self> {
        let min = k.checked_add(1).ok_or(BlasError::OffsetOverflow)?;
        if ld < min {
            return Err(BlasError::LeadingDimension { ld, min });
        }
        if n > 0 {
            let required = ld
                .checked_mul(n - 1)
                .and_then(|v| v.checked_add(min))
                .ok_or(BlasError::OffsetOverflow)?;
            if required > data.len() {
                return Err(BlasError::OutOfBounds {
                    required,
                    len: data.len(),
                });
            }
        }
        Ok(Self { data, n, k, ld })
    }

    /// Order of the (square) matrix.
    #[inline]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Number of stored off-diagonals.
    #[inline]
    pub fn bandwidth(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn ld(&self) -> usize {
        self.ld
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }
}
