//! Contiguous one-dimensional float buffers and their element-type tags.
//!
//! A [`Buffer`] is the unit the [`add`](crate::add) dispatcher operates on:
//! a flat, contiguous, native-byte-order run of elements of a single
//! supported float width. The variant tag doubles as the runtime element
//! type used for kernel dispatch.

use std::fmt;

use crate::error::{Error, Result};

/// Element type of a [`Buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE-754 float.
    F32,
    /// 64-bit IEEE-754 float.
    F64,
}

impl DType {
    /// Size of one element in bytes.
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Classify an element width reported by an embedding layer.
    ///
    /// Any width other than the two supported float widths is rejected
    /// here, before it can reach a kernel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for any item size other than
    /// 4 or 8 bytes.
    pub fn from_item_size(bytes: usize) -> Result<Self> {
        match bytes {
            4 => Ok(Self::F32),
            8 => Ok(Self::F64),
            other => Err(Error::UnsupportedType(format!(
                "element width of {other} bytes is not a supported float width"
            ))),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

/// A contiguous, native-byte-order, one-dimensional float buffer.
///
/// Construction is the coercion boundary: once a `Buffer` exists it is by
/// definition contiguous and width-tagged, so the kernels never re-check
/// layout. Inputs are never mutated by any operation in this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    /// 32-bit IEEE-754 float elements.
    F32(Vec<f32>),
    /// 64-bit IEEE-754 float elements.
    F64(Vec<f64>),
}

impl Buffer {
    /// Number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Whether the buffer holds zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type tag of the buffer.
    #[must_use]
    pub const fn dtype(&self) -> DType {
        match self {
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
        }
    }

    /// View the elements as an `f32` slice, if that is the element type.
    #[must_use]
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::F32(v) => Some(v),
            Self::F64(_) => None,
        }
    }

    /// View the elements as an `f64` slice, if that is the element type.
    #[must_use]
    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Self::F64(v) => Some(v),
            Self::F32(_) => None,
        }
    }
}

impl From<Vec<f32>> for Buffer {
    fn from(v: Vec<f32>) -> Self {
        Self::F32(v)
    }
}

impl From<Vec<f64>> for Buffer {
    fn from(v: Vec<f64>) -> Self {
        Self::F64(v)
    }
}

impl From<&[f32]> for Buffer {
    fn from(v: &[f32]) -> Self {
        Self::F32(v.to_vec())
    }
}

impl From<&[f64]> for Buffer {
    fn from(v: &[f64]) -> Self {
        Self::F64(v.to_vec())
    }
}
