// SPDX-License-Identifier: Apache-2.0

//! Lane vectors
//!
//! `I32x8` is the single vector value used across the crate: eight 32-bit
//! signed lanes, aligned for a 256-bit register. Kernels come in three
//! flavours (scalar, AVX2, NEON); pick one through the [`crate::dispatch`]
//! layer rather than calling the `unsafe` variants directly.
//!
//! Masks are vectors whose lanes are either all-ones (`-1`) or all-zero.
//! Every select kernel relies on that: AVX2 `blendv` looks at the top bit of
//! each byte, NEON `bsl` and the scalar path select bit by bit, and the three
//! only agree when no lane holds a partial mask.

// Some clippy lints are noisy for low-level SIMD code; we opt out at the module level.
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::needless_range_loop)]

use std::fmt;

use crate::constants::LANES;

#[cfg(target_arch = "x86_64")]
use super::constants::LANES_AVX2_U32;

#[cfg(target_arch = "aarch64")]
use super::constants::LANES_NEON_U32;

// =============================================================================
// X86_64 SIMD IMPORTS
// =============================================================================

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{
    __m256i, _mm256_add_epi32, _mm256_blendv_epi8, _mm256_loadu_si256, _mm256_storeu_si256,
};

// =============================================================================
// ARM NEON IMPORTS
// =============================================================================

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::{vaddq_s32, vbslq_s32, vld1q_s32, vld1q_u32, vst1q_s32};

// =============================================================================
// VECTOR VALUE
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C, align(32))]
pub struct I32x8([i32; LANES]);

impl I32x8 {
    pub const ZERO: Self = Self([0; LANES]);

    /// Every lane set; the "select" value for a mask lane.
    pub const ALL_ONES: Self = Self([-1; LANES]);

    #[inline]
    pub const fn from_array(lanes: [i32; LANES]) -> Self {
        Self(lanes)
    }

    /// Broadcast one value to every lane.
    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self([value; LANES])
    }

    /// `start, start + 1, ..., start + 7`.
    #[inline]
    pub const fn iota(start: i32) -> Self {
        let mut lanes = [0; LANES];
        let mut i = 0;
        while i < LANES {
            lanes[i] = start.wrapping_add(i as i32);
            i += 1;
        }
        Self(lanes)
    }

    #[inline]
    pub const fn to_array(self) -> [i32; LANES] {
        self.0
    }

    #[inline]
    pub fn as_array(&self) -> &[i32; LANES] {
        &self.0
    }

    #[inline]
    pub fn lane(&self, index: usize) -> i32 {
        self.0[index]
    }

    #[inline]
    pub fn and(self, other: Self) -> Self {
        let mut out = self.0;
        for i in 0..LANES {
            out[i] &= other.0[i];
        }
        Self(out)
    }

    #[inline]
    pub fn or(self, other: Self) -> Self {
        let mut out = self.0;
        for i in 0..LANES {
            out[i] |= other.0[i];
        }
        Self(out)
    }

    /// True when every lane is exactly all-ones or all-zero.
    pub fn is_lane_mask(&self) -> bool {
        self.0.iter().all(|&lane| lane == 0 || lane == -1)
    }

    /// Collapse a lane mask back to its bit pattern (bit i = lane i active).
    pub fn mask_bits(&self) -> u8 {
        let mut bits = 0u8;
        for i in 0..LANES {
            if self.0[i] != 0 {
                bits |= 1 << i;
            }
        }
        bits
    }
}

impl fmt::Debug for I32x8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I32x8({:?})", self.0)
    }
}

impl From<[i32; LANES]> for I32x8 {
    #[inline]
    fn from(lanes: [i32; LANES]) -> Self {
        Self(lanes)
    }
}

// =============================================================================
// LANE-MASK GENERATOR
// =============================================================================

/// Spread an 8-bit pattern over a full vector: lane i is all-ones when bit i
/// is set, all-zero otherwise.
#[inline]
pub const fn spread_mask(bits: u8) -> I32x8 {
    let mut lanes = [0; LANES];
    let mut i = 0;
    while i < LANES {
        lanes[i] = -(((bits >> i) & 1) as i32);
        i += 1;
    }
    I32x8(lanes)
}

// =============================================================================
// SCALAR KERNELS
// =============================================================================

/// Lane-wise select: `replacement` where `mask` is set, `base` elsewhere.
#[inline]
pub fn blend_i32x8_scalar(base: &I32x8, replacement: &I32x8, mask: &I32x8) -> I32x8 {
    let mut out = [0; LANES];
    for i in 0..LANES {
        out[i] = (base.0[i] & !mask.0[i]) | (replacement.0[i] & mask.0[i]);
    }
    I32x8(out)
}

#[inline]
pub fn add_i32x8_scalar(a: &I32x8, b: &I32x8) -> I32x8 {
    let mut out = [0; LANES];
    for i in 0..LANES {
        out[i] = a.0[i].wrapping_add(b.0[i]);
    }
    I32x8(out)
}

// =============================================================================
// AVX2 KERNELS
// =============================================================================

// AVX2 lane select.
//
// `_mm256_blendv_epi8` wants its mask spread over every byte rather than an
// imm8, which is exactly what a lane mask provides.
//
// # Safety
// Requires AVX2 support. Use an AVX2-enabled target before calling.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn blend_i32x8_avx2(base: &I32x8, replacement: &I32x8, mask: &I32x8) -> I32x8 {
    debug_assert_eq!(LANES_AVX2_U32, LANES);
    let a = _mm256_loadu_si256(base.0.as_ptr() as *const __m256i);
    let b = _mm256_loadu_si256(replacement.0.as_ptr() as *const __m256i);
    let m = _mm256_loadu_si256(mask.0.as_ptr() as *const __m256i);

    let mut out = I32x8::ZERO;
    _mm256_storeu_si256(
        out.0.as_mut_ptr() as *mut __m256i,
        _mm256_blendv_epi8(a, b, m),
    );
    out
}

// AVX2 lane-wise wrapping add.
//
// # Safety
// Requires AVX2 support. Use an AVX2-enabled target before calling.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn add_i32x8_avx2(a: &I32x8, b: &I32x8) -> I32x8 {
    let va = _mm256_loadu_si256(a.0.as_ptr() as *const __m256i);
    let vb = _mm256_loadu_si256(b.0.as_ptr() as *const __m256i);

    let mut out = I32x8::ZERO;
    _mm256_storeu_si256(out.0.as_mut_ptr() as *mut __m256i, _mm256_add_epi32(va, vb));
    out
}

// =============================================================================
// NEON KERNELS
// =============================================================================

// NEON lane select over two 128-bit halves.
//
// # Safety
// Requires NEON support. Use a NEON-enabled target before calling.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn blend_i32x8_neon(base: &I32x8, replacement: &I32x8, mask: &I32x8) -> I32x8 {
    const HALF: usize = LANES_NEON_U32;
    let mut out = I32x8::ZERO;

    let mut i = 0;
    while i < LANES {
        let a = vld1q_s32(base.0.as_ptr().add(i));
        let b = vld1q_s32(replacement.0.as_ptr().add(i));
        let m = vld1q_u32(mask.0.as_ptr().add(i) as *const u32);
        vst1q_s32(out.0.as_mut_ptr().add(i), vbslq_s32(m, b, a));
        i += HALF;
    }
    out
}

// NEON lane-wise wrapping add over two 128-bit halves.
//
// # Safety
// Requires NEON support. Use a NEON-enabled target before calling.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn add_i32x8_neon(a: &I32x8, b: &I32x8) -> I32x8 {
    const HALF: usize = LANES_NEON_U32;
    let mut out = I32x8::ZERO;

    let mut i = 0;
    while i < LANES {
        let va = vld1q_s32(a.0.as_ptr().add(i));
        let vb = vld1q_s32(b.0.as_ptr().add(i));
        vst1q_s32(out.0.as_mut_ptr().add(i), vaddq_s32(va, vb));
        i += HALF;
    }
    out
}
