// SPDX-License-Identifier: Apache-2.0

//! Common constants used across implementations
//!
//! Lane counts, cycle geometry, sentinel codes and the static phase tables
//! consumed by the cycle table builder.

// =============================================================================
// VECTOR GEOMETRY
// =============================================================================

/// Lanes per vector value (8 x i32 = 256 bits).
pub const LANES: usize = 8;

/// lcm(3, 5): number of chunks before the fizz/buzz pattern repeats.
pub const CYCLE_LEN: usize = 15;

/// Chunks produced by the standard run.
pub const CHUNK_COUNT: usize = 32;

/// Lines produced by the standard run.
pub const SEQUENCE_LEN: usize = LANES * CHUNK_COUNT;

/// Largest chunk count whose final lane still fits in an i32.
pub const MAX_CHUNKS: usize = (i32::MAX as usize) / LANES;

// =============================================================================
// SENTINEL CODES
// =============================================================================
// The counting sequence only holds positive integers, so negative codes are free.

pub const FIZZ: i32 = -1;
pub const BUZZ: i32 = -2;
pub const FIZZBUZZ: i32 = -3;

// =============================================================================
// PHASE TABLES
// =============================================================================
// Read right to left: bit i marks lane i of the chunk as a multiple.
// Chunk c covers 8c+1 ..= 8c+8, so the 3-table is indexed by c mod 3 and
// the 5-table by c mod 5.

pub const THREE_PHASES: [u8; 3] = [0b0010_0100, 0b0100_1001, 0b1001_0010];

pub const FIVE_PHASES: [u8; 5] = [
    0b0001_0000,
    0b0100_0010,
    0b0000_1000,
    0b0010_0001,
    0b1000_0100,
];

// =============================================================================
// SIMD Lane Counts by Architecture
// =============================================================================

#[cfg(target_arch = "x86_64")]
pub use x86_constants::*;
#[cfg(target_arch = "x86_64")]
mod x86_constants {
    // AVX2 (256-bit registers)
    pub const LANES_AVX2_U32: usize = 8; // 256/32 = 8 i32 elements
}

#[cfg(target_arch = "aarch64")]
pub use neon_constants::*;
#[cfg(target_arch = "aarch64")]
mod neon_constants {
    pub const LANES_NEON_U32: usize = 4; // 128/32 = 4 i32 elements
}
