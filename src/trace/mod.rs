//! Step tracing as a pluggable side channel
//!
//! The engine notifies a [`StepReporter`] once per executed step, after the
//! state mutation and before the trailing cursor advance. Reporting is
//! purely observational; it must not affect engine state or the final
//! output.
//!
//! [`ConsoleReporter`] reproduces the classic slow-motion console trace:
//! a fixed delay per step, then the action label, the full tape with the
//! active cell bracketed, and the output accumulated so far.
//! [`NullReporter`] is the default and does nothing, so automated tests
//! carry no real time delay.

use crate::memory::Tape;
use std::time::Duration;

/// Delay inserted before each traced step by [`ConsoleReporter`].
pub const STEP_DELAY: Duration = Duration::from_millis(200);

/// Per-step observer for the execution engine.
pub trait StepReporter {
    /// Called once per executed step with the action label, the tape after
    /// the mutation, and the output buffer so far.
    fn step(&mut self, action: &str, tape: &Tape, output: &[u8]);

    /// Called once when the run terminates, with the complete output.
    fn finished(&mut self, output: &[u8]);
}

/// Reporter that does nothing. The engine's default.
pub struct NullReporter;

impl StepReporter for NullReporter {
    fn step(&mut self, _action: &str, _tape: &Tape, _output: &[u8]) {}

    fn finished(&mut self, _output: &[u8]) {}
}

/// Reporter that prints every step to stdout at human speed.
pub struct ConsoleReporter {
    delay: Duration,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter { delay: STEP_DELAY }
    }

    /// Override the per-step delay (zero disables the sleep).
    pub fn with_delay(delay: Duration) -> Self {
        ConsoleReporter { delay }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepReporter for ConsoleReporter {
    fn step(&mut self, action: &str, tape: &Tape, output: &[u8]) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        println!("Action: {}", action);
        println!("Tape: {}", tape.render());
        println!("Output: {}", String::from_utf8_lossy(output));
    }

    fn finished(&mut self, output: &[u8]) {
        println!("Final Output:\n{}", String::from_utf8_lossy(output));
    }
}
