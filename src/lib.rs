// SPDX-License-Identifier: Apache-2.0

//! fizzvec
//!
//! FizzBuzz computed eight lanes at a time. Instead of a modulo per element,
//! a 15-entry cycle table of lane masks and sentinel vectors is built once,
//! and every chunk of eight consecutive integers is produced by a single
//! masked select against the table entry for its position.
//!
//! ## Hardware support
//! - **AVX2** on x86_64 and **NEON** on aarch64, detected at runtime
//! - Scalar lane-array kernels everywhere else, or with the `disable-simd` feature
//!
//! ## Usage
//!
//! ```rust
//! use fizzvec::{FizzSequence, Token};
//!
//! let first = FizzSequence::new().next().unwrap();
//! let tokens: Vec<String> = first
//!     .lanes
//!     .as_array()
//!     .iter()
//!     .map(|&v| Token::from_lane(v).to_string())
//!     .collect();
//! assert_eq!(tokens, ["1", "2", "fizz", "4", "buzz", "fizz", "7", "8"]);
//!
//! let mut out = Vec::new();
//! let lines = fizzvec::run(&mut out)?;
//! assert_eq!(lines, 256);
//! # Ok::<(), fizzvec::FizzError>(())
//! ```

pub mod constants;
pub mod cycle;
pub mod dispatch;
pub mod emit;
pub mod lanes;
pub mod sequence;
pub mod types;

pub use cycle::{CycleEntry, CycleTable};
pub use dispatch::*;
pub use emit::run;
pub use lanes::I32x8;
pub use sequence::{Chunk, FizzSequence};
pub use types::*;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
#[path = "tests/cycle_tests.rs"]
mod cycle_tests;
#[cfg(test)]
#[path = "tests/emit_tests.rs"]
mod emit_tests;
#[cfg(test)]
#[path = "tests/lanes_tests.rs"]
mod lanes_tests;
#[cfg(test)]
#[path = "tests/sequence_tests.rs"]
mod sequence_tests;
