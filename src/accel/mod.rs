//! SIMD acceleration layer.
//!
//! Width-specialized add kernels behind a common calling convention:
//! both operands and the output slice have equal lengths (the dispatcher
//! validates this before any kernel runs), and each output element is a
//! single two-operand IEEE-754 sum, so the vectorized and scalar paths
//! produce bitwise-identical results.
//!
//! The `f32` kernel delegates to trueno's backend selection system
//! (SSE2/AVX2/AVX512/NEON). The `f64` kernel is explicitly vectorized
//! with AVX on x86_64 (behind runtime feature detection) and NEON on
//! AArch64, with a scalar loop elsewhere.

use trueno::{Backend, Vector};

/// Get the SIMD backend trueno selected for this host.
#[must_use]
pub fn backend() -> Backend {
    Backend::select_best()
}

/// `out[i] = a[i] + b[i]` over `f32` lanes.
///
/// Caller guarantees `a`, `b`, and `out` share one length.
pub(crate) fn vadd_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    if let Ok(sum) = Vector::from_vec(a.to_vec()).add(&Vector::from_vec(b.to_vec())) {
        out.copy_from_slice(sum.as_slice());
    } else {
        // Unreachable with equal lengths; scalar path keeps the kernel total.
        for i in 0..a.len() {
            out[i] = a[i] + b[i];
        }
    }
}

/// `out[i] = a[i] + b[i]` over `f64` lanes.
///
/// Caller guarantees `a`, `b`, and `out` share one length.
pub(crate) fn vadd_f64(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx") {
        // SAFETY: AVX presence verified at runtime.
        unsafe { vadd_f64_avx(a, b, out) };
        return;
    }

    #[cfg(target_arch = "aarch64")]
    // SAFETY: NEON is baseline on AArch64.
    return unsafe { vadd_f64_neon(a, b, out) };

    #[cfg(not(target_arch = "aarch64"))]
    vadd_f64_scalar(a, b, out);
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
unsafe fn vadd_f64_avx(a: &[f64], b: &[f64], out: &mut [f64]) {
    use std::arch::x86_64::{_mm256_add_pd, _mm256_loadu_pd, _mm256_storeu_pd};

    let len = a.len();
    let out_ptr = out.as_mut_ptr();
    let mut i = 0usize;
    while i + 4 <= len {
        let va = _mm256_loadu_pd(a.as_ptr().add(i));
        let vb = _mm256_loadu_pd(b.as_ptr().add(i));
        _mm256_storeu_pd(out_ptr.add(i), _mm256_add_pd(va, vb));
        i += 4;
    }
    while i < len {
        *out_ptr.add(i) = a[i] + b[i];
        i += 1;
    }
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn vadd_f64_neon(a: &[f64], b: &[f64], out: &mut [f64]) {
    use std::arch::aarch64::{vaddq_f64, vld1q_f64, vst1q_f64};

    let len = a.len();
    let out_ptr = out.as_mut_ptr();
    let mut i = 0usize;
    while i + 2 <= len {
        let va = vld1q_f64(a.as_ptr().add(i));
        let vb = vld1q_f64(b.as_ptr().add(i));
        vst1q_f64(out_ptr.add(i), vaddq_f64(va, vb));
        i += 2;
    }
    while i < len {
        *out_ptr.add(i) = a[i] + b[i];
        i += 1;
    }
}

#[cfg_attr(target_arch = "aarch64", allow(dead_code))]
fn vadd_f64_scalar(a: &[f64], b: &[f64], out: &mut [f64]) {
    for i in 0..out.len() {
        out[i] = a[i] + b[i];
    }
}
