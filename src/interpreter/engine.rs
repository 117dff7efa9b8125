// Execution engine for the Brainfuck interpreter

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::input::{IntegerInput, StdinInput};
use crate::interpreter::jumps::{find_matching_loop_end, find_matching_loop_start};
use crate::lexer::{tokenize, Instruction};
use crate::memory::Tape;
use crate::snapshot::{Snapshot, SnapshotManager};
use crate::trace::{NullReporter, StepReporter};
use rustc_hash::FxHashSet;

/// Default cap on recorded snapshot history (256 MB).
pub const DEFAULT_SNAPSHOT_MEMORY: usize = 256 * 1024 * 1024;

/// The main interpreter that executes a Brainfuck program.
///
/// Owns all run state exclusively: the instruction sequence, the tape and
/// its pointer, the execution cursor, the output buffer, and the snapshot
/// history used for time travel. Loading a new program resets the cursor,
/// output, and history; the tape persists across loads until
/// [`reset_tape`](Interpreter::reset_tape) is called.
pub struct Interpreter {
    /// Tokenized program; immutable between loads.
    program: Vec<Instruction>,

    /// The circular memory tape and its data pointer.
    tape: Tape,

    /// Index of the next instruction to execute.
    cursor: usize,

    /// Bytes emitted by `.` instructions, in order.
    output: Vec<u8>,

    /// Loop-start cursor positions known to never run their body again.
    ///
    /// Consulted at the top of the run loop to skip straight past the
    /// matching `]`. Nothing in the engine populates it; it exists as a
    /// memoization cache honored when present.
    dead_loops: FxHashSet<usize>,

    /// Collaborator supplying values for `,` instructions.
    input: Box<dyn IntegerInput>,

    /// Per-step observer; `NullReporter` unless tracing is wanted.
    reporter: Box<dyn StepReporter>,

    /// Snapshot history for reverse execution.
    snapshot_manager: SnapshotManager,

    /// Whether new snapshots are still being recorded. Cleared when the
    /// memory cap is hit; execution itself continues.
    recording: bool,

    /// Current position in execution history (for stepping backward/forward).
    history_position: usize,

    /// Whether the last run reached the end of the program.
    finished: bool,
}

impl Interpreter {
    /// Create an interpreter with an empty program, a zeroed tape,
    /// interactive stdin input, and no tracing.
    pub fn new() -> Self {
        Self::with_snapshot_limit(DEFAULT_SNAPSHOT_MEMORY)
    }

    /// Create an interpreter with a specific snapshot memory cap.
    pub fn with_snapshot_limit(snapshot_memory_limit: usize) -> Self {
        Interpreter {
            program: Vec::new(),
            tape: Tape::new(),
            cursor: 0,
            output: Vec::new(),
            dead_loops: FxHashSet::default(),
            input: Box::new(StdinInput),
            reporter: Box::new(NullReporter),
            snapshot_manager: SnapshotManager::new(snapshot_memory_limit),
            recording: true,
            history_position: 0,
            finished: false,
        }
    }

    /// Tokenize `source` and make it the current program.
    ///
    /// Resets the cursor, output buffer, snapshot history, and dead-loop
    /// set. The tape and pointer deliberately persist across loads.
    pub fn load(&mut self, source: &str) {
        self.program = tokenize(source);
        self.cursor = 0;
        self.output.clear();
        self.dead_loops.clear();
        self.snapshot_manager.clear();
        self.recording = true;
        self.history_position = 0;
        self.finished = false;
    }

    /// Zero the tape and return the pointer to cell 0.
    pub fn reset_tape(&mut self) {
        self.tape.reset();
    }

    /// Replace the input collaborator.
    pub fn set_input(&mut self, input: Box<dyn IntegerInput>) {
        self.input = input;
    }

    /// Replace the step reporter. Pass a `ConsoleReporter` to enable the
    /// slow-motion trace, or `NullReporter` to disable it.
    pub fn set_reporter(&mut self, reporter: Box<dyn StepReporter>) {
        self.reporter = reporter;
    }

    /// Run from the current cursor until it passes the end of the program.
    ///
    /// The only error is [`RuntimeError::InputClosed`] from the input
    /// collaborator; everything else, unbalanced brackets included,
    /// degrades to a no-op and execution continues.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.take_snapshot("Ready");

        while self.cursor < self.program.len() {
            if self.dead_loops.contains(&self.cursor) {
                self.cursor = find_matching_loop_end(&self.program, self.cursor) + 1;
            } else {
                self.execute_step()?;
            }
        }

        self.finished = true;
        self.history_position = self.snapshot_manager.len().saturating_sub(1);
        self.reporter.finished(&self.output);
        Ok(())
    }

    /// Execute the single instruction at the cursor.
    ///
    /// Order per step: mutate state, notify the reporter, advance the
    /// cursor, record a snapshot. A taken loop jump repositions the cursor
    /// inside the match arm, so the trailing advance lands one past a
    /// matched `]` (forward jump) or on the first body instruction
    /// (backward jump, without re-checking the `[` condition).
    fn execute_step(&mut self) -> Result<(), RuntimeError> {
        let instruction = self.program[self.cursor];
        let mut action = instruction.action().to_string();

        match instruction {
            Instruction::MovePointerForward => self.tape.move_forward(),
            Instruction::MovePointerBackward => self.tape.move_backward(),
            Instruction::IncrementCell => self.tape.increment(),
            Instruction::DecrementCell => self.tape.decrement(),
            Instruction::OutputCell => {
                self.output.push(self.tape.current() as u8);
            }
            Instruction::InputCell => {
                let value = self.input.read_integer()?;
                self.tape.store(value);
                action = format!("Input value: {}", value);
            }
            Instruction::LoopStart => {
                if self.tape.current() == 0 {
                    self.cursor = find_matching_loop_end(&self.program, self.cursor);
                }
            }
            Instruction::LoopEnd => {
                if self.tape.current() != 0 {
                    self.cursor = find_matching_loop_start(&self.program, self.cursor);
                }
            }
        }

        self.reporter.step(&action, &self.tape, &self.output);
        self.cursor += 1;
        self.take_snapshot(&action);
        Ok(())
    }

    /// Record the current state into history, if recording is still on.
    fn take_snapshot(&mut self, action: &str) {
        if !self.recording {
            return;
        }
        let snapshot = Snapshot {
            tape: self.tape.clone(),
            cursor: self.cursor,
            output: self.output.clone(),
            action: action.to_string(),
        };
        if !self.snapshot_manager.push(snapshot) {
            // Cap reached: stop recording, keep executing.
            self.recording = false;
        }
    }

    /// Restore the snapshot at `index` into live state.
    fn restore(&mut self, index: usize) {
        if let Some(snapshot) = self.snapshot_manager.get(index) {
            self.tape = snapshot.tape.clone();
            self.cursor = snapshot.cursor;
            self.output = snapshot.output.clone();
            self.history_position = index;
        }
    }

    /// Step backward one snapshot in the recorded history.
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(RuntimeError::AtHistoryStart);
        }
        self.restore(self.history_position - 1);
        Ok(())
    }

    /// Step forward one snapshot in the recorded history.
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(RuntimeError::AtHistoryEnd);
        }
        self.restore(self.history_position + 1);
        Ok(())
    }

    /// Jump back to the first recorded snapshot.
    pub fn rewind_to_start(&mut self) {
        if !self.snapshot_manager.is_empty() {
            self.restore(0);
        }
    }

    /// The tokenized program.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// The tape in its current (or currently restored) state.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Index of the next instruction to execute.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The output buffer as raw bytes.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// The output buffer decoded as text (lossy).
    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Action label of the snapshot currently shown, if any.
    pub fn current_action(&self) -> Option<&str> {
        self.snapshot_manager
            .get(self.history_position)
            .map(|s| s.action.as_str())
    }

    /// Current position in execution history.
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Total number of recorded snapshots.
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// Whether the last run reached the end of the program.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::input::ScriptedInput;
    use crate::memory::TAPE_LEN;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn run_program(source: &str) -> Interpreter {
        let mut interpreter = Interpreter::new();
        interpreter.load(source);
        interpreter.run().unwrap();
        interpreter
    }

    #[test]
    fn test_increment_and_output() {
        let interpreter = run_program("+++.");
        assert_eq!(interpreter.output(), &[3]);
        assert_eq!(interpreter.tape().pointer(), 0);
        assert_eq!(interpreter.tape().cell(0), 3);
    }

    #[test]
    fn test_simple_loop_clears_cell() {
        let interpreter = run_program("+[-]");
        assert_eq!(interpreter.tape().cell(0), 0);
        assert!(interpreter.output().is_empty());
        assert!(interpreter.is_finished());
    }

    #[test]
    fn test_pointer_moves_and_returns() {
        let interpreter = run_program(">+<");
        assert_eq!(interpreter.tape().cell(0), 0);
        assert_eq!(interpreter.tape().cell(1), 1);
        assert_eq!(interpreter.tape().pointer(), 0);
    }

    #[test]
    fn test_pointer_wraps_backward_from_zero() {
        let interpreter = run_program("<");
        assert_eq!(interpreter.tape().pointer(), TAPE_LEN - 1);
    }

    #[test]
    fn test_zero_iteration_loop_is_skipped() {
        // Cell 0 is already 0, so the body must never run.
        let interpreter = run_program("[>+++<]");
        assert!(interpreter.tape().cells().iter().all(|c| *c == 0));
        assert!(interpreter.output().is_empty());
        assert!(interpreter.is_finished());
    }

    #[test]
    fn test_unbalanced_open_bracket_is_a_noop() {
        // `[` finds no match, falls through, `+` still executes.
        let interpreter = run_program("[+");
        assert_eq!(interpreter.tape().cell(0), 1);
        assert!(interpreter.is_finished());
    }

    #[test]
    fn test_unbalanced_close_bracket_is_a_noop() {
        let interpreter = run_program("+]+");
        // `]` with a nonzero cell scans backward, finds no `[`, falls through.
        assert_eq!(interpreter.tape().cell(0), 2);
        assert!(interpreter.is_finished());
    }

    #[test]
    fn test_nested_loop_multiplication() {
        // 2 * 3 into cell 1: classic loop idiom.
        let interpreter = run_program("++[>+++<-]");
        assert_eq!(interpreter.tape().cell(0), 0);
        assert_eq!(interpreter.tape().cell(1), 6);
    }

    #[test]
    fn test_loop_built_output() {
        // Builds 'A' (65) in cell 1, then prints it.
        let interpreter = run_program("+++++[>+++++++++++++<-]>.");
        assert_eq!(interpreter.output(), b"A");
    }

    #[test]
    fn test_tape_persists_across_load() {
        let mut interpreter = Interpreter::new();
        interpreter.load("+++");
        interpreter.run().unwrap();

        interpreter.load(".");
        assert!(interpreter.output().is_empty());
        interpreter.run().unwrap();
        // Cell 0 still holds 3 from the previous program.
        assert_eq!(interpreter.output(), &[3]);
    }

    #[test]
    fn test_reset_tape_clears_persisted_state() {
        let mut interpreter = Interpreter::new();
        interpreter.load("+++");
        interpreter.run().unwrap();

        interpreter.reset_tape();
        interpreter.load(".");
        interpreter.run().unwrap();
        assert_eq!(interpreter.output(), &[0]);
    }

    #[test]
    fn test_scripted_input_stores_unclamped() {
        let mut interpreter = Interpreter::new();
        interpreter.set_input(Box::new(ScriptedInput::new([299])));
        interpreter.load(",");
        interpreter.run().unwrap();
        assert_eq!(interpreter.tape().cell(0), 299);

        // A subsequent increment wraps the stored value back into range.
        interpreter.load("+");
        interpreter.run().unwrap();
        assert_eq!(interpreter.tape().cell(0), 44);
    }

    #[test]
    fn test_input_then_output_truncates_to_byte() {
        let mut interpreter = Interpreter::new();
        interpreter.set_input(Box::new(ScriptedInput::new([65])));
        interpreter.load(",.");
        interpreter.run().unwrap();
        assert_eq!(interpreter.output(), b"A");
    }

    #[test]
    fn test_exhausted_input_surfaces_as_error() {
        let mut interpreter = Interpreter::new();
        interpreter.set_input(Box::new(ScriptedInput::new([])));
        interpreter.load(",");
        assert_eq!(interpreter.run(), Err(RuntimeError::InputClosed));
    }

    #[test]
    fn test_dead_loop_is_skipped_past_matching_end() {
        let mut interpreter = Interpreter::new();
        // Leave a nonzero value in cell 0, then load a loop that would
        // otherwise never terminate.
        interpreter.load("+");
        interpreter.run().unwrap();

        interpreter.load("[]+");
        interpreter.dead_loops.insert(0);
        interpreter.run().unwrap();
        assert_eq!(interpreter.tape().cell(0), 2);
        assert!(interpreter.is_finished());
    }

    #[test]
    fn test_load_clears_dead_loops() {
        let mut interpreter = Interpreter::new();
        interpreter.load("+");
        interpreter.dead_loops.insert(0);
        interpreter.load("+");
        assert!(interpreter.dead_loops.is_empty());
    }

    #[test]
    fn test_snapshot_history_and_rewind() {
        let mut interpreter = run_program("+++.");
        // Initial "Ready" snapshot plus one per executed step.
        assert_eq!(interpreter.total_snapshots(), 5);
        assert_eq!(interpreter.history_position(), 4);

        interpreter.rewind_to_start();
        assert_eq!(interpreter.history_position(), 0);
        assert_eq!(interpreter.cursor(), 0);
        assert_eq!(interpreter.tape().cell(0), 0);
        assert!(interpreter.output().is_empty());
        assert_eq!(interpreter.current_action(), Some("Ready"));

        interpreter.step_forward().unwrap();
        assert_eq!(interpreter.tape().cell(0), 1);
        assert_eq!(interpreter.current_action(), Some("Increment value"));

        interpreter.step_backward().unwrap();
        assert_eq!(interpreter.tape().cell(0), 0);
        assert_eq!(
            interpreter.step_backward(),
            Err(RuntimeError::AtHistoryStart)
        );
    }

    #[test]
    fn test_step_forward_past_end_errors() {
        let mut interpreter = run_program("+");
        assert_eq!(interpreter.step_forward(), Err(RuntimeError::AtHistoryEnd));
    }

    #[test]
    fn test_snapshot_cap_degrades_without_aborting() {
        // Cap small enough for the initial snapshot only; the run must
        // still complete and produce output.
        let mut interpreter = Interpreter::with_snapshot_limit(TAPE_LEN * 8 + 64);
        interpreter.load("+++.");
        interpreter.run().unwrap();
        assert_eq!(interpreter.output(), &[3]);
        assert_eq!(interpreter.total_snapshots(), 1);
    }

    /// Reporter sharing its record with the test through `Rc<RefCell>`.
    struct SharedRecorder {
        steps: Rc<RefCell<Vec<String>>>,
        finished: Rc<RefCell<Option<Vec<u8>>>>,
    }

    impl crate::trace::StepReporter for SharedRecorder {
        fn step(&mut self, action: &str, _tape: &Tape, _output: &[u8]) {
            self.steps.borrow_mut().push(action.to_string());
        }

        fn finished(&mut self, output: &[u8]) {
            *self.finished.borrow_mut() = Some(output.to_vec());
        }
    }

    #[test]
    fn test_reporter_sees_every_step_and_final_output() {
        let steps = Rc::new(RefCell::new(Vec::new()));
        let finished = Rc::new(RefCell::new(None));

        let mut interpreter = Interpreter::new();
        interpreter.set_reporter(Box::new(SharedRecorder {
            steps: Rc::clone(&steps),
            finished: Rc::clone(&finished),
        }));
        interpreter.load(">+.");
        interpreter.run().unwrap();

        assert_eq!(
            *steps.borrow(),
            vec!["Increment pointer", "Increment value", "Output value"]
        );
        assert_eq!(finished.borrow().as_deref(), Some(&[1u8][..]));
    }
}
