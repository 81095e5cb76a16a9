//! JSON persistence for [`TaskList`].
//!
//! The storage file is a JSON array of task records; array order is the
//! authoritative list order. Files written by the legacy implementation
//! parse unchanged.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::TodoError;
use crate::list::TaskList;

impl TaskList {
    /// Read the list stored at `path`.
    ///
    /// A missing file is the first-run bootstrap case and yields an empty
    /// list; every other failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TodoError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no todo file yet, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(TodoError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let list: Self = serde_json::from_str(&contents).map_err(|source| TodoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), tasks = list.len(), "todo file loaded");
        Ok(list)
    }

    /// Write the whole list to `path`, overwriting whatever is there.
    ///
    /// The write is a plain overwrite, not an atomic publish; concurrent
    /// invocations against the same path race and the last writer wins.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TodoError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| TodoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| TodoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), tasks = self.len(), "todo file saved");
        Ok(())
    }
}
