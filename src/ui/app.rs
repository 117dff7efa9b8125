//! Main TUI application state and logic

use crate::interpreter::Interpreter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Program,
    Tape,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (program -> tape -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Program,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter holding the recorded execution history
    pub interpreter: Interpreter,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub program_scroll: usize,
    pub tape_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    /// Create a new app over an interpreter whose run has completed.
    pub fn new(interpreter: Interpreter) -> Self {
        App {
            interpreter,
            focused_pane: FocusedPane::Program,
            program_scroll: 0,
            tape_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(200) {
                if self.interpreter.step_forward().is_ok() {
                    self.refresh_status();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: program strip on top, tape in the middle, output below,
        // one-line status bar at the bottom.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(55),
                Constraint::Percentage(20),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_program_pane(
            frame,
            rows[0],
            self.interpreter.program(),
            self.interpreter.cursor(),
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        super::panes::render_tape_pane(
            frame,
            rows[1],
            self.interpreter.tape(),
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        let output = self.interpreter.output_string();
        super::panes::render_output_pane(
            frame,
            rows[2],
            &output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            self.interpreter.history_position(),
            self.interpreter.total_snapshots(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.interpreter.step_backward().is_ok() {
                    self.refresh_status();
                } else {
                    self.status_message = "At start of execution".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.interpreter.step_forward().is_ok() {
                    self.refresh_status();
                } else {
                    self.status_message = "At end of execution".to_string();
                }
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.interpreter.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now();
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                // Jump to the end of execution
                self.is_playing = false;
                while self.interpreter.step_forward().is_ok() {}
                self.refresh_status();
            }
            KeyCode::Backspace => {
                // Jump to the start of execution
                self.is_playing = false;
                self.interpreter.rewind_to_start();
                self.refresh_status();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Program => {
                    self.program_scroll = self.program_scroll.saturating_sub(1)
                }
                FocusedPane::Tape => self.tape_scroll = self.tape_scroll.saturating_sub(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Program => {
                    self.program_scroll = self.program_scroll.saturating_add(1)
                }
                FocusedPane::Tape => self.tape_scroll = self.tape_scroll.saturating_add(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_add(1),
            },
            _ => {}
        }
    }

    /// Show the restored snapshot's action label in the status bar.
    fn refresh_status(&mut self) {
        self.status_message = self
            .interpreter
            .current_action()
            .unwrap_or("Ready")
            .to_string();
    }
}
