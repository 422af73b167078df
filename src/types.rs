// SPDX-License-Identifier: Apache-2.0

// types.rs for fizzvec
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{BUZZ, FIZZ, FIZZBUZZ};

#[derive(Debug, Error)]
pub enum FizzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FizzError>;

/// Printable form of a single lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Token {
    Number(i32),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Token {
    /// Classify a lane value produced by the sequence generator.
    #[inline]
    pub fn from_lane(value: i32) -> Self {
        match value {
            FIZZ => Token::Fizz,
            BUZZ => Token::Buzz,
            FIZZBUZZ => Token::FizzBuzz,
            n => Token::Number(n),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Fizz => f.write_str("fizz"),
            Token::Buzz => f.write_str("buzz"),
            Token::FizzBuzz => f.write_str("fizzbuzz"),
        }
    }
}
