//! Element-wise operation dispatch.
//!
//! One exported operation: [`add`]. Dispatch is driven by the runtime
//! element-type tags of the two operands; validation is fail-fast, so
//! nothing is allocated when a precondition is violated.

use crate::accel;
use crate::buffer::Buffer;
use crate::error::{Error, Result};

/// Add two buffers element-wise, returning a newly allocated buffer of
/// the common element type and length.
///
/// The inputs are never mutated and the output is freshly allocated per
/// call. Mixed `f32`/`f64` operands are rejected rather than promoted.
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if the operands' lengths differ.
/// - [`Error::UnsupportedType`] if the operands' element types differ.
///
/// # Example
///
/// ```
/// use sumar::{add, Buffer};
///
/// let a = Buffer::from(vec![1.0_f32, 2.0, 3.0]);
/// let b = Buffer::from(vec![10.0_f32, 20.0, 30.0]);
/// let sum = add(&a, &b).unwrap();
/// assert_eq!(sum.as_f32(), Some(&[11.0, 22.0, 33.0][..]));
/// ```
pub fn add(a: &Buffer, b: &Buffer) -> Result<Buffer> {
    if a.len() != b.len() {
        return Err(Error::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    match (a, b) {
        (Buffer::F32(x), Buffer::F32(y)) => {
            let mut out = vec![0.0_f32; x.len()];
            accel::vadd_f32(x, y, &mut out);
            Ok(Buffer::F32(out))
        }
        (Buffer::F64(x), Buffer::F64(y)) => {
            let mut out = vec![0.0_f64; x.len()];
            accel::vadd_f64(x, y, &mut out);
            Ok(Buffer::F64(out))
        }
        _ => Err(Error::UnsupportedType(format!(
            "add supports f32 and f64 operands of one common type, got {} and {}",
            a.dtype(),
            b.dtype()
        ))),
    }
}
