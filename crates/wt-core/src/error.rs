//! Error types for containers, the task model and persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the hand-rolled containers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The index was outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// An element comparing equal is already stored.
    #[error("cannot add duplicate element")]
    Duplicate,
}

/// Validation and bounds errors for tasks, logs and projects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A task field was empty or the duration was below one minute.
    #[error("incomplete task information: {field}")]
    IncompleteTask { field: &'static str },

    /// A task field holds text the project file cannot store.
    #[error("invalid task {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// A project or category name was empty, reserved, or not storable in
    /// the project file.
    #[error("invalid name: {name:?}")]
    InvalidName { name: String },

    /// Another category already uses this name.
    #[error("category already exists: {name}")]
    DuplicateCategory { name: String },

    /// The task already belongs to a category.
    #[error("task already belongs to a category")]
    CategoryAlreadyAssigned,

    /// The All Tasks log cannot be renamed or used as a category.
    #[error("the All Tasks log may not be edited")]
    AllTasksLogLocked,

    /// The All Tasks log cannot be removed.
    #[error("the All Tasks log may not be deleted")]
    AllTasksLogUndeletable,

    /// An index was out of range for the targeted log.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

impl ModelError {
    /// Returns true for index errors, as opposed to validation failures.
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::Collection(CollectionError::OutOfBounds { .. })
        )
    }
}

/// Errors raised while loading or saving project files.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be read.
    #[error("unable to load file {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("unable to save file {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input does not start with a `!` project line.
    #[error("unable to load file: missing project header")]
    MissingHeader,

    /// The project line named an invalid project.
    #[error("invalid project name")]
    InvalidProject(#[source] ModelError),

    /// A category declaration was invalid or duplicated.
    #[error("invalid categories")]
    InvalidCategories(#[source] ModelError),
}
