// SPDX-License-Identifier: Apache-2.0

//! Lane emitter
//!
//! One line per lane, lanes in order, written straight to the sink.

use std::io::Write;

use log::debug;

use crate::lanes::I32x8;
use crate::sequence::FizzSequence;
use crate::types::{Result, Token};

#[inline]
pub fn emit_lane<W: Write>(out: &mut W, value: i32) -> Result<()> {
    writeln!(out, "{}", Token::from_lane(value))?;
    Ok(())
}

pub fn emit_chunk<W: Write>(out: &mut W, chunk: &I32x8) -> Result<()> {
    for &value in chunk.as_array() {
        emit_lane(out, value)?;
    }
    Ok(())
}

/// Drain `sequence` into `out`; returns the number of lines written.
pub fn emit_sequence<W: Write>(out: &mut W, sequence: FizzSequence) -> Result<usize> {
    let mut lines = 0;
    for chunk in sequence {
        emit_chunk(out, &chunk.lanes)?;
        lines += chunk.lanes.as_array().len();
    }
    Ok(lines)
}

/// Write the standard 256-line run.
pub fn run<W: Write>(out: &mut W) -> Result<usize> {
    let lines = emit_sequence(out, FizzSequence::new())?;
    debug!("run complete: {} lines", lines);
    Ok(lines)
}
