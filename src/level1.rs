//! BLAS Level 1: vector scaling and copying on strided views.

use tracing::trace;

use crate::view::{VectorView, VectorViewMut};
use crate::{BlasError, BlasScalar, Result};

/// `x := alpha * x`, in place.
///
/// Every logical element of the view is multiplied once; with a negative
/// increment the traversal starts at the far end of the buffer. Elements
/// between strided positions are never touched.
pub fn scal<T: BlasScalar>(alpha: T, x: &mut VectorViewMut<'_, T>) {
    let n = x.len();
    if n == 0 {
        trace!("scal: empty vector");
        return;
    }
    let inc = x.inc();
    let mut ix = x.start();
    let data = x.data_mut();
    for _ in 0..n {
        data[ix as usize] *= alpha;
        ix += inc;
    }
}

/// `x := alpha * x` with a real factor (the `zdscal` / `csscal` case for
/// complex vectors).
pub fn scal_real<T: BlasScalar>(alpha: T::Real, x: &mut VectorViewMut<'_, T>) {
    let n = x.len();
    if n == 0 {
        trace!("scal_real: empty vector");
        return;
    }
    let inc = x.inc();
    let mut ix = x.start();
    let data = x.data_mut();
    for _ in 0..n {
        let pos = ix as usize;
        data[pos] = data[pos].scale_real(alpha);
        ix += inc;
    }
}

/// `y := x`, element by element in logical order.
///
/// Increments of `x` and `y` are independent, so copying between views of
/// opposite sign reverses the element order in the buffer.
pub fn copy<T: BlasScalar>(x: &VectorView<'_, T>, y: &mut VectorViewMut<'_, T>) -> Result<()> {
    let n = x.len();
    if n != y.len() {
        return Err(BlasError::ShapeMismatch(vec![n], vec![y.len()]));
    }
    if n == 0 {
        trace!("copy: empty vector");
        return Ok(());
    }
    let (incx, incy) = (x.inc(), y.inc());
    let mut ix = x.start();
    let mut iy = y.start();
    let src = x.data();
    let dst = y.data_mut();
    for _ in 0..n {
        dst[iy as usize] = src[ix as usize];
        ix += incx;
        iy += incy;
    }
    Ok(())
}
