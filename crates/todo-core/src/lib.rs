//! todo-core
//!
//! In-memory task list with durable JSON persistence.
//!
//! # Modules
//! - **domain**: the [`Task`] entity and the [`TodoError`] taxonomy
//! - **list**: [`TaskList`], the ordered collection with 1-based positional
//!   addressing, plus both listing renderings
//! - **storage**: load/save of the JSON storage file (implemented as
//!   [`TaskList::load`] / [`TaskList::save`])
//!
//! One invocation of the owning process loads a list, mutates it in memory,
//! and writes it back at most once. Nothing here coordinates concurrent
//! writers; two processes pointed at the same storage file race and the last
//! writer wins.

pub mod domain;
pub mod list;

mod storage;

pub use domain::{Task, TodoError};
pub use list::TaskList;
