//! # Sumar
//!
//! SIMD-accelerated element-wise addition for `f32`/`f64` buffers.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library,
//! sumar exposes a single operation: [`add`], which sums two equal-length,
//! contiguous, one-dimensional float buffers into a newly allocated buffer
//! of the same element type and length. The element type used for the
//! vectorized kernel is selected at runtime from the operands' type tags;
//! mixed-width operands are rejected, never promoted.
//!
//! The kernel itself is pure, stateless, and reentrant — it takes no lock
//! and assumes none exists. An embedding layer (for example a scripting
//! runtime binding against the `cdylib` build) is free to release its own
//! interpreter lock around the call.
//!
//! ## Quick Start
//!
//! ```
//! use sumar::{add, Buffer};
//!
//! let a = Buffer::from(vec![1.0_f32, 2.0, 3.0]);
//! let b = Buffer::from(vec![10.0_f32, 20.0, 30.0]);
//!
//! let sum = add(&a, &b)?;
//! assert_eq!(sum.as_f32(), Some(&[11.0, 22.0, 33.0][..]));
//! # Ok::<(), sumar::Error>(())
//! ```
//!
//! ## Hardware Acceleration
//!
//! The `f32` path runs on trueno's automatically selected backend
//! (SSE2/AVX2/AVX512/NEON); the `f64` path uses AVX on x86_64 (detected at
//! runtime) or NEON on AArch64, falling back to a scalar loop on other
//! hosts. Either way each output element is a single IEEE-754 sum, so the
//! accelerated result is bitwise identical to a scalar loop's.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// SIMD acceleration layer.
pub mod accel;

/// Float buffers and element-type tags.
pub mod buffer;

/// Error types.
pub mod error;

/// Element-wise operation dispatch.
pub mod ops;

pub use buffer::{Buffer, DType};
pub use error::{Error, Result};
pub use ops::add;
