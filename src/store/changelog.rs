// =====================================================================
// File: store/changelog.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 15, 2026
//
//! The [`ChangeLog`] keeps a short, human-readable history of record
//! changes, newest first. It has a fixed depth; pushing past it drops
//! the oldest entry. There is no undo, the log is for display only.
// =====================================================================

use std::collections::VecDeque;
use std::fmt;

/// Kind of change an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
}


impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Added => "Added",
            ChangeKind::Removed => "Removed",
            ChangeKind::Updated => "Updated",
        };
        f.write_str(label)
    }
}


/// One change log line, displayed as `"{kind}: {summary}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    pub summary: String,
}


impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.summary)
    }
}


/// Bounded change history, most recent entry first.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: VecDeque<ChangeEntry>,
    depth: usize,
}


impl ChangeLog {
    /// Create an empty log holding at most `depth` entries.
    pub fn new(depth: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Record a change at the front, dropping the oldest beyond `depth`.
    ///
    /// # Example
    /// ```
    /// use recordstore::{ChangeKind, ChangeLog};
    /// let mut log = ChangeLog::new(2);
    /// log.push(ChangeKind::Added, "a");
    /// log.push(ChangeKind::Added, "b");
    /// log.push(ChangeKind::Removed, "a");
    ///
    /// let lines: Vec<String> = log.iter().map(|e| e.to_string()).collect();
    /// assert_eq!(lines, vec!["Removed: a", "Added: b"]);
    /// ```
    pub fn push(&mut self, kind: ChangeKind, summary: impl Into<String>) {
        if self.depth == 0 {
            return;
        }
        self.entries.push_front(ChangeEntry {
            kind,
            summary: summary.into(),
        });
        self.entries.truncate(self.depth);
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &ChangeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
