//! Error taxonomy for list mutation and persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`TaskList`](crate::TaskList) operations.
///
/// `OutOfRange` and `Parse` indicate caller or data error and are never
/// retried; retry policy for I/O failures, if any, belongs to the caller.
/// A missing file on load is not an error at all (first-run bootstrap), so
/// it has no variant here.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A 1-based position outside the current list bounds.
    #[error("item {0} does not exist")]
    OutOfRange(usize),

    /// The storage file exists but could not be read.
    #[error("failed to read todo file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The storage file could not be written.
    #[error("failed to write todo file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The storage file holds something other than a serialized task list.
    #[error("malformed todo file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
