// SPDX-License-Identifier: Apache-2.0

//! Cycle table
//!
//! Fifteen chunks of eight lanes cover one full lcm(3, 5) period of the
//! fizz/buzz pattern. For each position in that period the table holds a
//! selection mask (lanes needing any substitution) and a replacement vector
//! (the sentinel each such lane should become).
//!
//! Example: chunk 0 counts `1..=8`. Its replacement vector is
//! `(0, 0, -1, 0, -2, -1, 0, 0)` and its mask `(0, 0, -1, 0, -1, -1, 0, 0)`,
//! so blending yields `(1, 2, -1, 4, -2, -1, 7, 8)`.

use log::debug;

use crate::constants::{BUZZ, CYCLE_LEN, FIVE_PHASES, FIZZ, FIZZBUZZ, LANES, THREE_PHASES};
use crate::dispatch::blend_i32x8;
use crate::lanes::{spread_mask, I32x8};

/// Derive the phase bit pattern for `modulus` arithmetically: bit i is set
/// when lane i of chunk `phase` (values `8 * phase + 1 ..= 8 * phase + 8`)
/// is a multiple of `modulus`.
///
/// The builder reads the hand-written tables in `constants`; this exists so
/// they can be checked, and so other width/modulus pairs can be tabled at
/// compile time.
///
/// # Panics
/// Panics when `modulus` is zero.
pub const fn phase_pattern(modulus: u32, phase: u32) -> u8 {
    assert!(modulus > 0, "phase_pattern: modulus must be non-zero");
    let mut bits = 0u8;
    let mut lane = 0;
    while lane < LANES {
        let value = phase * LANES as u32 + lane as u32 + 1;
        if value % modulus == 0 {
            bits |= 1 << lane;
        }
        lane += 1;
    }
    bits
}

/// Apply `(mask, value)` layers over `base` in order; later layers win.
pub fn layered_select(base: I32x8, layers: &[(I32x8, I32x8)]) -> I32x8 {
    layers
        .iter()
        .fold(base, |acc, (mask, value)| blend_i32x8(&acc, value, mask))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleEntry {
    /// All-ones in lanes that take a sentinel.
    pub mask: I32x8,
    /// Sentinel per lane; zero where `mask` is clear.
    pub replacement: I32x8,
}

impl CycleEntry {
    fn for_position(position: usize, threes: &[I32x8; 3], fives: &[I32x8; 5]) -> Self {
        let three_mask = threes[position % 3];
        let five_mask = fives[position % 5];
        let both_mask = three_mask.and(five_mask);

        // fizzbuzz over buzz over fizz
        let replacement = layered_select(
            I32x8::ZERO,
            &[
                (three_mask, I32x8::splat(FIZZ)),
                (five_mask, I32x8::splat(BUZZ)),
                (both_mask, I32x8::splat(FIZZBUZZ)),
            ],
        );

        Self {
            mask: three_mask.or(five_mask),
            replacement,
        }
    }
}

/// Precomputed masks and replacements for one full fizz/buzz period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTable {
    entries: [CycleEntry; CYCLE_LEN],
}

impl CycleTable {
    pub fn build() -> Self {
        let threes = THREE_PHASES.map(spread_mask);
        let fives = FIVE_PHASES.map(spread_mask);

        let entries =
            std::array::from_fn(|position| CycleEntry::for_position(position, &threes, &fives));

        debug!("cycle table built: {} entries of {} lanes", CYCLE_LEN, LANES);
        Self { entries }
    }

    #[inline]
    pub fn entry(&self, position: usize) -> &CycleEntry {
        &self.entries[position]
    }

    #[inline]
    pub fn entries(&self) -> &[CycleEntry; CYCLE_LEN] {
        &self.entries
    }
}

impl Default for CycleTable {
    fn default() -> Self {
        Self::build()
    }
}
