//! Instruction definitions for the Brainfuck virtual machine
//!
//! Brainfuck has exactly eight instructions, each written as a single
//! character. [`Instruction`] is the closed set of variants the tokenizer
//! can emit; anything outside the eight-symbol table is a comment.

use std::fmt;

/// All instruction variants recognized by the tokenizer.
///
/// Variants map one-to-one onto the eight Brainfuck symbols. The mapping is
/// fixed: source characters outside this table never produce an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    // Pointer movement (wrapping)
    MovePointerForward,  // >
    MovePointerBackward, // <

    // Cell arithmetic (modulo 256)
    IncrementCell, // +
    DecrementCell, // -

    // I/O
    OutputCell, // .
    InputCell,  // ,

    // Loop brackets, matched by nesting depth
    LoopStart, // [
    LoopEnd,   // ]
}

impl Instruction {
    /// Look up the instruction for a source character.
    ///
    /// Returns `None` for every character outside the eight-symbol table;
    /// the tokenizer treats those as comments.
    pub fn from_symbol(ch: char) -> Option<Instruction> {
        match ch {
            '>' => Some(Instruction::MovePointerForward),
            '<' => Some(Instruction::MovePointerBackward),
            '+' => Some(Instruction::IncrementCell),
            '-' => Some(Instruction::DecrementCell),
            '.' => Some(Instruction::OutputCell),
            ',' => Some(Instruction::InputCell),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// The source character this instruction is written as.
    pub fn symbol(&self) -> char {
        match self {
            Instruction::MovePointerForward => '>',
            Instruction::MovePointerBackward => '<',
            Instruction::IncrementCell => '+',
            Instruction::DecrementCell => '-',
            Instruction::OutputCell => '.',
            Instruction::InputCell => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }

    /// Human-readable action label used by the step trace and the status bar.
    pub fn action(&self) -> &'static str {
        match self {
            Instruction::MovePointerForward => "Increment pointer",
            Instruction::MovePointerBackward => "Decrement pointer",
            Instruction::IncrementCell => "Increment value",
            Instruction::DecrementCell => "Decrement value",
            Instruction::OutputCell => "Output value",
            Instruction::InputCell => "Input value",
            Instruction::LoopStart => "Start loop",
            Instruction::LoopEnd => "End loop",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
