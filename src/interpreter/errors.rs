//! Runtime error types for the Brainfuck interpreter
//!
//! The execution core itself has no failure path: pointer and cell
//! arithmetic are closed by construction, unbalanced brackets degrade to
//! no-op jumps, and malformed input lines are re-prompted. What remains is
//! the edges of the system: an input source that closes for good, and
//! history navigation past either end of the recorded run.

use std::fmt;

/// Errors that can surface from an interpreter run or history navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The input source closed before supplying a value for `,`.
    ///
    /// Malformed lines re-prompt forever; this fires only when no further
    /// line can ever arrive (stdin EOF, scripted input exhausted).
    InputClosed,

    /// Tried to step backward while already at the first snapshot.
    AtHistoryStart,

    /// Tried to step forward while already at the last snapshot.
    AtHistoryEnd,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::InputClosed => {
                write!(f, "Input source closed while waiting for a value")
            }
            RuntimeError::AtHistoryStart => {
                write!(f, "Already at the start of execution history")
            }
            RuntimeError::AtHistoryEnd => {
                write!(f, "Already at the end of execution history")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RuntimeError::InputClosed.to_string(),
            "Input source closed while waiting for a value"
        );
        assert!(RuntimeError::AtHistoryEnd.to_string().contains("end"));
    }
}
