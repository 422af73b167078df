// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the vectorized sequence.
//!
//! Every emitted line must agree with the plain modulo definition, and the
//! cycle table position of chunk i must be i mod 15 however long the run.

use std::sync::OnceLock;

use fizzvec::constants::{CYCLE_LEN, SEQUENCE_LEN};
use fizzvec::{FizzSequence, Token};
use proptest::prelude::*;

/// The standard run, rendered once and shared by every case.
fn standard_lines() -> &'static [String] {
    static LINES: OnceLock<Vec<String>> = OnceLock::new();
    LINES.get_or_init(|| {
        let mut out = Vec::new();
        let written = fizzvec::run(&mut out).unwrap();
        assert_eq!(written, SEQUENCE_LEN);
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    })
}

fn expected_token(n: i32) -> Token {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => Token::FizzBuzz,
        (true, false) => Token::Fizz,
        (false, true) => Token::Buzz,
        (false, false) => Token::Number(n),
    }
}

proptest! {
    /// Line n of the standard run classifies n the same way modulo does.
    #[test]
    fn prop_line_matches_modulo(n in 1usize..=SEQUENCE_LEN) {
        let lines = standard_lines();
        prop_assert_eq!(lines.len(), SEQUENCE_LEN);
        prop_assert_eq!(&lines[n - 1], &expected_token(n as i32).to_string(), "line {}", n);
    }

    /// Chunk i of any run uses cycle entry i mod 15 and classifies its lanes correctly.
    #[test]
    fn prop_cycle_index_wraps(chunks in 1usize..400) {
        for chunk in FizzSequence::with_chunks(chunks).unwrap() {
            prop_assert_eq!(chunk.cycle_index, chunk.index % CYCLE_LEN);

            for (lane, &value) in chunk.lanes.as_array().iter().enumerate() {
                let n = (chunk.index * 8 + lane + 1) as i32;
                prop_assert_eq!(Token::from_lane(value), expected_token(n), "value {}", n);
            }
        }
    }
}
