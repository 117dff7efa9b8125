//! Brainfuck execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the fetch-decode-execute loop, snapshot capture, and
//!   history navigation
//! - [`jumps`]: structural loop-bracket matching
//! - [`input`]: the input collaborator for `,` instructions
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! The interpreter executes one instruction per step. After each step a
//! snapshot is taken to enable time-travel debugging. Loop brackets carry
//! no precomputed jump targets; every taken jump scans for its partner by
//! nesting depth, and unbalanced brackets degrade to no-ops.

pub mod engine;
pub mod errors;
pub mod input;
pub mod jumps;

pub use engine::Interpreter;
pub use errors::RuntimeError;
pub use input::{IntegerInput, ScriptedInput, StdinInput};
