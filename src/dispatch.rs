// SPDX-License-Identifier: Apache-2.0

//! # Dispatch
//!
//! Chooses between the scalar lane-array kernels and the hardware backends
//! (AVX2 on x86_64, NEON on aarch64) based on what the running CPU offers.
//! All backends produce bit-identical results; the `disable-simd` feature
//! pins everything to the scalar path.

use log::trace;

#[cfg(all(target_arch = "aarch64", not(feature = "disable-simd")))]
use std::arch::is_aarch64_feature_detected;

use crate::lanes::{self, I32x8};

// =============================================================================
//  HARDWARE DETECTION & SIMD CAPABILITIES
// =============================================================================

/// Hardware capability detection used by the dispatch layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareCapabilities {
    pub has_avx2: bool,
    pub has_neon: bool,
}

impl HardwareCapabilities {
    #[inline]
    pub fn detect() -> Self {
        HardwareCapabilities {
            has_avx2: Self::detect_avx2(),
            has_neon: Self::detect_neon(),
        }
    }

    fn detect_avx2() -> bool {
        #[allow(unused_mut)]
        let mut detected_avx2 = false;

        #[cfg(target_arch = "x86_64")]
        #[cfg(not(feature = "disable-simd"))]
        if is_x86_feature_detected!("avx2") {
            detected_avx2 = true;
        }

        detected_avx2
    }

    fn detect_neon() -> bool {
        #[allow(unused_mut)]
        let mut detected_neon = false;

        #[cfg(target_arch = "aarch64")]
        #[cfg(not(feature = "disable-simd"))]
        if is_aarch64_feature_detected!("neon") {
            detected_neon = true;
        }

        detected_neon
    }

    /// Name of the backend the dispatch functions will pick.
    pub fn backend_name(&self) -> &'static str {
        if self.has_avx2 {
            "avx2"
        } else if self.has_neon {
            "neon"
        } else {
            "scalar"
        }
    }
}

/// Get information about available SIMD capabilities
#[inline]
pub fn get_hw_capabilities() -> HardwareCapabilities {
    HardwareCapabilities::detect()
}

// =============================================================================
//  LANE OPERATIONS
// =============================================================================

/// Select `replacement` in every lane where `mask` is all-ones, `base` elsewhere.
///
/// `mask` must be a lane mask (see [`I32x8::is_lane_mask`]).
#[inline]
pub fn blend_i32x8(base: &I32x8, replacement: &I32x8, mask: &I32x8) -> I32x8 {
    debug_assert!(mask.is_lane_mask(), "partial lane mask: {:?}", mask);

    #[cfg(target_arch = "x86_64")]
    {
        if get_hw_capabilities().has_avx2 {
            trace!("blend_i32x8 DISPATCH: avx2");
            return unsafe { lanes::blend_i32x8_avx2(base, replacement, mask) };
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if get_hw_capabilities().has_neon {
            trace!("blend_i32x8 DISPATCH: neon");
            return unsafe { lanes::blend_i32x8_neon(base, replacement, mask) };
        }
    }

    trace!("blend_i32x8 DISPATCH: scalar");
    lanes::blend_i32x8_scalar(base, replacement, mask)
}

/// Lane-wise wrapping add.
#[inline]
pub fn add_i32x8(a: &I32x8, b: &I32x8) -> I32x8 {
    #[cfg(target_arch = "x86_64")]
    {
        if get_hw_capabilities().has_avx2 {
            trace!("add_i32x8 DISPATCH: avx2");
            return unsafe { lanes::add_i32x8_avx2(a, b) };
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if get_hw_capabilities().has_neon {
            trace!("add_i32x8 DISPATCH: neon");
            return unsafe { lanes::add_i32x8_neon(a, b) };
        }
    }

    trace!("add_i32x8 DISPATCH: scalar");
    lanes::add_i32x8_scalar(a, b)
}
