//! # Introduction
//!
//! braintty executes Brainfuck programs on a fixed 300-cell circular tape,
//! capturing a snapshot of the full interpreter state after each step. The
//! snapshot history is then navigated forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Tokenizer → Instructions → Interpreter → Snapshots → TUI
//! ```
//!
//! 1. [`lexer`] — tokenizes the source (eight symbols, everything else is
//!    a comment) into a flat instruction sequence.
//! 2. [`interpreter`] — the fetch-decode-execute loop: tape mutation,
//!    nesting-depth loop matching, input collaborator, snapshot capture.
//! 3. [`memory`] — the circular [`memory::Tape`] and its data pointer;
//!    all wraparound arithmetic lives here.
//! 4. [`snapshot`] — snapshot history with a configurable memory limit.
//! 5. [`trace`] — pluggable per-step reporting, including the slow-motion
//!    console trace.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Language semantics
//!
//! Cells wrap modulo 256 on `+`/`-`; the pointer wraps modulo 300 in both
//! directions. `,` stores an operator-supplied integer without clamping.
//! Unbalanced loop brackets are not an error: an unmatched bracket's jump
//! degrades to a no-op and execution continues.

pub mod interpreter;
pub mod lexer;
pub mod memory;
pub mod snapshot;
pub mod trace;
pub mod ui;
