//! Column height edits and rebuild revisions.
#![forbid(unsafe_code)]

use hashbrown::HashMap;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditJournalStats {
    pub edited_columns: usize,
    pub total_edits: u64,
    pub rev: u64,
    pub built_rev: u64,
}

/// Records the latest height written to each column and stamps every edit
/// with a monotonically increasing revision.
#[derive(Debug, Clone)]
pub struct EditJournal {
    size: i32,
    columns: HashMap<(i32, i32), ColumnEdit>,
    counter: u64,
    built: u64,
    total_edits: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnEdit {
    pub height: i32,
    pub rev: u64,
}

impl EditJournal {
    pub fn new(size: usize) -> Self {
        Self {
            size: size as i32,
            columns: HashMap::new(),
            counter: 0,
            built: 0,
            total_edits: 0,
        }
    }

    pub fn stats(&self) -> EditJournalStats {
        EditJournalStats {
            edited_columns: self.columns.len(),
            total_edits: self.total_edits,
            rev: self.counter,
            built_rev: self.built,
        }
    }

    /// Stores the edit and returns its revision stamp.
    pub fn record(&mut self, x: i32, z: i32, height: i32) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        self.total_edits += 1;
        let stamp = self.counter;
        self.columns.insert((x, z), ColumnEdit { height, rev: stamp });
        stamp
    }

    pub fn get(&self, x: i32, z: i32) -> Option<ColumnEdit> {
        self.columns.get(&(x, z)).copied()
    }

    /// Edited columns sorted by revision (oldest first).
    pub fn snapshot(&self) -> Vec<((i32, i32), ColumnEdit)> {
        let mut out: Vec<_> = self.columns.iter().map(|(k, v)| (*k, *v)).collect();
        out.sort_by_key(|(_, e)| e.rev);
        out
    }

    /// Columns whose cube faces can change when `(x, z)` changes height: the
    /// column itself plus its in-bounds lateral neighbors.
    pub fn affected_columns(&self, x: i32, z: i32) -> Vec<(i32, i32)> {
        let mut affected = Vec::with_capacity(5);
        for (dx, dz) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, nz) = (x + dx, z + dz);
            if nx >= 0 && nx < self.size && nz >= 0 && nz < self.size {
                affected.push((nx, nz));
            }
        }
        affected
    }

    #[inline]
    pub fn rev(&self) -> u64 {
        self.counter
    }

    pub fn mark_built(&mut self, rev: u64) {
        if rev > self.built {
            self.built = rev;
        }
    }

    #[inline]
    pub fn built_rev(&self) -> u64 {
        self.built
    }

    #[inline]
    pub fn needs_rebuild(&self) -> bool {
        self.counter > self.built
    }
}
