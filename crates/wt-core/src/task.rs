//! Logged tasks and their one-time category assignment.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Stable identifier of a category within one project.
///
/// Unlike a position in the sorted category list, the id survives renames
/// and re-sorting, so tasks can refer to their category through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

impl CategoryId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task held by both the All Tasks log and its category.
///
/// Both logs store clones of the same `Rc`, so an edit through one is seen
/// by the other. Identity comparisons use [`Rc::ptr_eq`].
pub type SharedTask = Rc<RefCell<Task>>;

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    title: String,
    /// Minutes spent, at least 1.
    duration: u32,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<CategoryId>,
}

impl Task {
    /// Creates a task with no category.
    pub fn new(
        title: impl Into<String>,
        duration: u32,
        details: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let title = title.into();
        let details = details.into();
        validate(&title, duration, &details)?;
        Ok(Self {
            title,
            duration,
            details,
            category: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn duration(&self) -> u32 {
        self.duration
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// The owning category, if one has been assigned.
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ModelError> {
        let title = title.into();
        require_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_duration(&mut self, duration: u32) -> Result<(), ModelError> {
        require_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    pub fn set_details(&mut self, details: impl Into<String>) -> Result<(), ModelError> {
        let details = details.into();
        require_details(&details)?;
        self.details = details;
        Ok(())
    }

    /// Replaces title, duration and details together.
    ///
    /// Nothing changes unless all three values are valid.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        duration: u32,
        details: impl Into<String>,
    ) -> Result<(), ModelError> {
        let title = title.into();
        let details = details.into();
        validate(&title, duration, &details)?;
        self.title = title;
        self.duration = duration;
        self.details = details;
        Ok(())
    }

    /// Records the owning category. A task can be assigned only once.
    pub fn assign_category(&mut self, category: CategoryId) -> Result<(), ModelError> {
        if self.category.is_some() {
            return Err(ModelError::CategoryAlreadyAssigned);
        }
        self.category = Some(category);
        Ok(())
    }

    /// Renders the task in the project file format.
    ///
    /// `category_name` is empty for a task without a category.
    pub fn record(&self, category_name: &str) -> String {
        format!(
            "* {},{},{}\n{}",
            self.title, self.duration, category_name, self.details
        )
    }

    /// Wraps the task for sharing between logs.
    pub fn into_shared(self) -> SharedTask {
        Rc::new(RefCell::new(self))
    }
}

fn validate(title: &str, duration: u32, details: &str) -> Result<(), ModelError> {
    require_title(title)?;
    require_duration(duration)?;
    require_details(details)
}

/// The title shares the `* title,duration,category` line with two other
/// fields, and the reader trims it.
fn require_title(title: &str) -> Result<(), ModelError> {
    require_text(title, "title")?;
    if title.contains([',', '\n', '\r']) {
        return Err(invalid("title", "must not contain commas or line breaks"));
    }
    if title.trim() != title {
        return Err(invalid("title", "must not start or end with whitespace"));
    }
    Ok(())
}

/// Details are stored one line per file line. The reader trims every line
/// and starts a new task at any line beginning with `*`.
fn require_details(details: &str) -> Result<(), ModelError> {
    require_text(details, "details")?;
    if details.trim() != details {
        return Err(invalid("details", "must not start or end with whitespace"));
    }
    for line in details.split('\n') {
        if line.trim() != line {
            return Err(invalid("details", "lines must not start or end with whitespace"));
        }
        if line.starts_with('*') {
            return Err(invalid("details", "lines must not start with '*'"));
        }
    }
    Ok(())
}

const fn invalid(field: &'static str, reason: &'static str) -> ModelError {
    ModelError::InvalidField { field, reason }
}

const fn require_text(value: &str, field: &'static str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::IncompleteTask { field });
    }
    Ok(())
}

const fn require_duration(duration: u32) -> Result<(), ModelError> {
    if duration < 1 {
        return Err(ModelError::IncompleteTask { field: "duration" });
    }
    Ok(())
}
