// SPDX-License-Identifier: Apache-2.0

//! Vectorized sequence generator
//!
//! Keeps eight consecutive integers in a counting vector, blends each chunk
//! against the cycle table entry for its position, then steps the counter by
//! eight. The cycle position wraps by compare-and-reset, never by remainder.

use log::debug;

use crate::constants::{CHUNK_COUNT, CYCLE_LEN, LANES, MAX_CHUNKS};
use crate::cycle::CycleTable;
use crate::dispatch::{add_i32x8, blend_i32x8, get_hw_capabilities};
use crate::lanes::I32x8;
use crate::types::{FizzError, Result};

/// One blended chunk of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// 0-based chunk number; covers values `8 * index + 1 ..= 8 * index + 8`.
    pub index: usize,
    /// Cycle table entry that produced this chunk.
    pub cycle_index: usize,
    pub lanes: I32x8,
}

#[derive(Debug, Clone)]
pub struct FizzSequence {
    table: CycleTable,
    count: I32x8,
    step: I32x8,
    cycle_index: usize,
    produced: usize,
    chunks: usize,
}

impl FizzSequence {
    /// The standard run: 32 chunks, values 1..=256.
    pub fn new() -> Self {
        Self::build(CHUNK_COUNT)
    }

    /// A run of `chunks` whole chunks.
    ///
    /// # Errors
    /// `FizzError::Internal` when the last value would not fit in an i32.
    pub fn with_chunks(chunks: usize) -> Result<Self> {
        if chunks > MAX_CHUNKS {
            return Err(FizzError::Internal(format!(
                "chunk count {} exceeds i32 lane range (max {})",
                chunks, MAX_CHUNKS
            )));
        }
        Ok(Self::build(chunks))
    }

    fn build(chunks: usize) -> Self {
        debug!(
            "sequence: {} chunks x {} lanes, backend={}",
            chunks,
            LANES,
            get_hw_capabilities().backend_name()
        );
        Self {
            table: CycleTable::build(),
            count: I32x8::iota(1),
            step: I32x8::splat(LANES as i32),
            cycle_index: 0,
            produced: 0,
            chunks,
        }
    }

    #[inline]
    pub fn table(&self) -> &CycleTable {
        &self.table
    }

    /// Cycle table entry the next chunk will use.
    #[inline]
    pub fn cycle_index(&self) -> usize {
        self.cycle_index
    }

    /// Chunks still to come.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.chunks - self.produced
    }

    pub fn next_chunk(&mut self) -> Option<Chunk> {
        if self.produced == self.chunks {
            return None;
        }

        let entry = self.table.entry(self.cycle_index);
        let chunk = Chunk {
            index: self.produced,
            cycle_index: self.cycle_index,
            lanes: blend_i32x8(&self.count, &entry.replacement, &entry.mask),
        };

        self.count = add_i32x8(&self.count, &self.step);
        self.produced += 1;

        self.cycle_index += 1;
        if self.cycle_index == CYCLE_LEN {
            self.cycle_index = 0;
        }

        Some(chunk)
    }
}

impl Default for FizzSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FizzSequence {
    type Item = Chunk;

    #[inline]
    fn next(&mut self) -> Option<Chunk> {
        self.next_chunk()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FizzSequence {}
