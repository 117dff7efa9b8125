//! The circular memory tape and its data pointer
//!
//! [`Tape`] owns both the cell array and the pointer, so every piece of
//! wraparound arithmetic lives behind its methods. The cells are `i64`
//! rather than `u8` because the input instruction stores operator-supplied
//! integers without clamping; such values sit on the tape out of range
//! until the next increment or decrement pulls them back into [0, 255].

use super::{wrap, CELL_MODULUS, TAPE_LEN};

/// Fixed-length circular tape of integer cells plus the data pointer.
///
/// The pointer is always a valid index by construction: both movement
/// directions wrap modulo the tape length, so no bounds checks are needed
/// anywhere else in the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: [i64; TAPE_LEN],
    pointer: usize,
}

impl Tape {
    /// Create a tape with all cells zeroed and the pointer at cell 0.
    pub fn new() -> Self {
        Tape {
            cells: [0; TAPE_LEN],
            pointer: 0,
        }
    }

    /// Move the pointer one cell forward, wrapping past the end.
    pub fn move_forward(&mut self) {
        self.pointer = wrap(self.pointer as i64 + 1, TAPE_LEN as i64) as usize;
    }

    /// Move the pointer one cell backward, wrapping below zero.
    pub fn move_backward(&mut self) {
        self.pointer = wrap(self.pointer as i64 - 1, TAPE_LEN as i64) as usize;
    }

    /// Increment the current cell modulo 256.
    pub fn increment(&mut self) {
        self.cells[self.pointer] = wrap(self.cells[self.pointer] + 1, CELL_MODULUS);
    }

    /// Decrement the current cell modulo 256.
    pub fn decrement(&mut self) {
        self.cells[self.pointer] = wrap(self.cells[self.pointer] - 1, CELL_MODULUS);
    }

    /// Read the current cell.
    pub fn current(&self) -> i64 {
        self.cells[self.pointer]
    }

    /// Store a raw value into the current cell without clamping.
    ///
    /// Used by the input instruction: the operator's integer lands on the
    /// tape as-is and only re-enters [0, 255] on a later `+` or `-`.
    pub fn store(&mut self, value: i64) {
        self.cells[self.pointer] = value;
    }

    /// Current pointer position.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Read the cell at an absolute index.
    pub fn cell(&self, index: usize) -> i64 {
        self.cells[index]
    }

    /// All cells in tape order.
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Zero every cell and return the pointer to cell 0.
    pub fn reset(&mut self) {
        self.cells = [0; TAPE_LEN];
        self.pointer = 0;
    }

    /// Render the tape as one fixed-width field per cell, the active cell
    /// bracketed. This is the format the console step trace prints.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(TAPE_LEN * 7);
        for (i, cell) in self.cells.iter().enumerate() {
            if i == self.pointer {
                out.push_str(&format!("[{:5}]", cell));
            } else {
                out.push_str(&format!(" {:5} ", cell));
            }
        }
        out
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
