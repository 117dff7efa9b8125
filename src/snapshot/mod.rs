// Snapshot management for reverse execution

use crate::memory::{Tape, TAPE_LEN};

/// Snapshot of interpreter state after one executed step.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tape: Tape,
    pub cursor: usize,
    pub output: Vec<u8>,
    /// Human-readable label of the action that produced this state.
    pub action: String,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes.
    pub fn estimated_size(&self) -> usize {
        // Tape cells are i64; cursor and pointer are noise next to them.
        let tape_size = TAPE_LEN * std::mem::size_of::<i64>();
        tape_size + self.output.len() + self.action.len()
    }
}

/// Manages execution history for reverse execution.
///
/// History is capped by estimated bytes rather than snapshot count. When
/// the cap is reached, [`push`](SnapshotManager::push) starts refusing new
/// snapshots; the run itself is never interrupted, the recorded history
/// just ends early.
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history. Returns `false` (and drops the snapshot)
    /// once the memory cap would be exceeded.
    pub fn push(&mut self, snapshot: Snapshot) -> bool {
        let snapshot_size = snapshot.estimated_size();
        if self.current_memory + snapshot_size > self.max_memory {
            return false;
        }
        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        true
    }

    /// Get a snapshot by index.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots recorded.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current estimated memory usage.
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Configured memory cap.
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    /// Drop all recorded history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
    }
}
