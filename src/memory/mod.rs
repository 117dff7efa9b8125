//! Memory model for the Brainfuck interpreter
//!
//! This module provides the tape abstraction:
//! - [`tape`]: the fixed-length circular cell array and its data pointer
//!
//! # Wraparound
//!
//! Every index and value computation that can leave its range goes through
//! [`wrap`], so the wraparound semantics live in exactly one place:
//! - the pointer wraps modulo [`TAPE_LEN`] in both directions
//! - cell values wrap modulo [`CELL_MODULUS`] on increment/decrement
//!
//! [`wrap`] uses the Euclidean remainder, so values that went negative
//! (possible after an unclamped input store) come back into range on the
//! next arithmetic instruction.

pub mod tape;

pub use tape::Tape;

/// Number of cells on the tape.
pub const TAPE_LEN: usize = 300;

/// Modulus for cell arithmetic; cells hold one byte's worth of states.
pub const CELL_MODULUS: i64 = 256;

/// Wrap a value into [0, modulus) using the Euclidean remainder.
pub fn wrap(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_positive() {
        assert_eq!(wrap(0, 256), 0);
        assert_eq!(wrap(255, 256), 255);
        assert_eq!(wrap(256, 256), 0);
        assert_eq!(wrap(1000, 256), 232);
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1, 256), 255);
        assert_eq!(wrap(-256, 256), 0);
        assert_eq!(wrap(-300, 256), 212);
    }
}
