//! Core domain logic for the category time tracker.
//!
//! This crate contains:
//! - Containers: an ordered log and a sorted, duplicate-free linked list
//! - Tasks and task logs with duration statistics
//! - The project model that keeps category logs and the All Tasks log in sync
//! - The project file format and statistics export

pub mod collections;
pub mod error;
pub mod io;
pub mod log;
pub mod project;
pub mod task;

pub use error::{CollectionError, ModelError, PersistError};
pub use log::{ALL_TASKS_NAME, AllTasksLog, CategoryLog, TaskLog};
pub use project::{LogSelection, Project, RecentTask, TaskRow};
pub use task::{CategoryId, SharedTask, Task};
