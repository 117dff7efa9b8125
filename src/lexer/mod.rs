//! Brainfuck source tokenization
//!
//! This module transforms source text into a flat instruction sequence:
//! - [`instruction`]: the eight-variant [`Instruction`] enum and symbol table
//! - [`tokenizer`]: the left-to-right scanner
//!
//! Brainfuck has no grammar above the token level, so there is no parser or
//! AST stage: the tokenizer's output is the executable program.
//!
//! [`Instruction`]: instruction::Instruction

pub mod instruction;
pub mod tokenizer;

pub use instruction::Instruction;
pub use tokenizer::tokenize;
