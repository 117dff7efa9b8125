//! Input collaborator for the `,` instruction
//!
//! The interpreter never touches stdin directly; it asks an [`IntegerInput`]
//! for one value per input instruction. [`StdinInput`] is the interactive
//! implementation (prompt, read a line, retry on anything that does not
//! parse as a base-10 integer); [`ScriptedInput`] feeds queued values so
//! tests never block.
//!
//! Values are delivered as raw `i64` and stored on the tape without
//! clamping; out-of-range values are a deliberate part of the semantics.

use crate::interpreter::errors::RuntimeError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Source of integer values for the input instruction.
pub trait IntegerInput {
    /// Block until one integer is available.
    ///
    /// Implementations retry on malformed input and return
    /// [`RuntimeError::InputClosed`] only when no further value can arrive.
    fn read_integer(&mut self) -> Result<i64, RuntimeError>;
}

/// Interactive input: prompts on stdout, reads lines from stdin.
///
/// Re-prompts in a loop (not by recursion) until a line parses as a
/// base-10 integer. EOF on stdin is the one unrecoverable case.
pub struct StdinInput;

impl IntegerInput for StdinInput {
    fn read_integer(&mut self) -> Result<i64, RuntimeError> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            print!("Input value (integer): ");
            let _ = stdout.flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Err(RuntimeError::InputClosed),
                Ok(_) => {}
            }

            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Invalid input. Please enter an integer."),
            }
        }
    }
}

/// Scripted input for tests and non-interactive runs: pops values from a
/// queue, erroring once the queue is exhausted.
pub struct ScriptedInput {
    values: VecDeque<i64>,
}

impl ScriptedInput {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        ScriptedInput {
            values: values.into_iter().collect(),
        }
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl IntegerInput for ScriptedInput {
    fn read_integer(&mut self) -> Result<i64, RuntimeError> {
        self.values.pop_front().ok_or(RuntimeError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_pops_in_order() {
        let mut input = ScriptedInput::new([5, -300, 1000]);
        assert_eq!(input.read_integer(), Ok(5));
        assert_eq!(input.read_integer(), Ok(-300));
        assert_eq!(input.read_integer(), Ok(1000));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_exhaustion_is_input_closed() {
        let mut input = ScriptedInput::new([]);
        assert_eq!(input.read_integer(), Err(RuntimeError::InputClosed));
    }
}
