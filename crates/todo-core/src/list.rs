//! Ordered task collection with 1-based positional addressing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::task::zero_timestamp;
use crate::domain::{Task, TodoError};

/// The ordered, owned collection of tasks behind one storage file.
///
/// Design:
/// - Insertion order is the externally visible order; positions are derived
///   from it on every call, never stored on the tasks. Deleting a task
///   shifts every later position down by one.
/// - The public API speaks 1-based positions; the translation to `Vec`
///   indexing happens in [`TaskList::index_of`] and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    /// Append a new pending task. Descriptions are taken as-is, empty ones
    /// included.
    pub fn add(&mut self, description: impl Into<String>) {
        self.0.push(Task::new(description));
    }

    /// Mark the task at `position` done.
    ///
    /// Succeeds on an already-done task too, refreshing its completion
    /// stamp.
    pub fn complete(&mut self, position: usize) -> Result<(), TodoError> {
        let idx = self.index_of(position)?;
        self.0[idx].mark_done();
        Ok(())
    }

    /// Remove the task at `position`; every later task shifts down one,
    /// keeping relative order.
    pub fn delete(&mut self, position: usize) -> Result<(), TodoError> {
        let idx = self.index_of(position)?;
        self.0.remove(idx);
        Ok(())
    }

    /// View of this list rendered with timestamps and a header row.
    pub fn verbose(&self) -> Verbose<'_> {
        Verbose(self)
    }

    fn index_of(&self, position: usize) -> Result<usize, TodoError> {
        if position == 0 || position > self.0.len() {
            return Err(TodoError::OutOfRange(position));
        }
        Ok(position - 1)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Plain listing: a two-character marker column (`X ` when done), the
/// 1-based position, and the description.
///
/// This rendering is a stable contract; golden-output tests depend on it.
impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, task) in self.0.iter().enumerate() {
            let marker = if task.done { "X" } else { " " };
            writeln!(f, "{marker} {}: {}", idx + 1, task.description)?;
        }
        Ok(())
    }
}

/// Timestamped rendering: one header line, then one row per task with the
/// description padded to a fixed 10-column field (longer descriptions are
/// not truncated).
pub struct Verbose<'a>(&'a TaskList);

const ROW_TIME: &str = "%Y-%m-%d %H:%M:%S";

impl fmt::Display for Verbose<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "             Done  CreatedAt           CompletedAt")?;
        for (idx, task) in self.0.iter().enumerate() {
            let marker = if task.done { "X" } else { " " };
            // An unset completion prints as the zero timestamp, same as the
            // wire encoding.
            let completed = task.completed_at.unwrap_or_else(zero_timestamp);
            writeln!(
                f,
                "{}: {:<10} {}    {} {}",
                idx + 1,
                task.description,
                marker,
                task.created_at.format(ROW_TIME),
                completed.format(ROW_TIME),
            )?;
        }
        Ok(())
    }
}
