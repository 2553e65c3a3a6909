//! Project state and the bookkeeping that keeps its logs consistent.
//!
//! A [`Project`] owns the All Tasks log and the sorted category logs. Every
//! task that lives in a category is also in the All Tasks log; the methods
//! here update both sides together so that this holds after each call.

use std::path::Path;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::collections::SortedList;
use crate::error::{CollectionError, ModelError, PersistError};
use crate::io;
use crate::log::{
    ALL_TASKS_NAME, AllTasksLog, CategoryLog, TaskLog, check_log_name, compare_ignore_case,
};
use crate::task::{CategoryId, Task};

/// Which log task operations currently target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSelection {
    AllTasks,
    Category(CategoryId),
}

/// One row of a task table: title, duration and category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub title: String,
    pub duration: u32,
    pub category: String,
}

/// The newest task of a category, if it has any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentTask {
    pub category: String,
    pub title: Option<String>,
    pub duration: Option<u32>,
}

impl RecentTask {
    /// Title, duration and category as display strings (`None` and blank
    /// for an empty category).
    pub fn to_row(&self) -> [String; 3] {
        [
            self.title.clone().unwrap_or_else(|| "None".to_string()),
            self.duration.map(|d| d.to_string()).unwrap_or_default(),
            self.category.clone(),
        ]
    }
}

/// A named collection of categorized tasks.
#[derive(Debug)]
pub struct Project {
    name: String,
    categories: SortedList<CategoryLog>,
    all_tasks: AllTasksLog,
    current: LogSelection,
    changed: bool,
    next_category_id: u32,
}

impl Project {
    /// Creates an empty project focused on the All Tasks log.
    ///
    /// New projects start out with unsaved changes.
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self {
            name,
            categories: SortedList::with_comparator(CategoryLog::compare_names),
            all_tasks: AllTasksLog::new(),
            current: LogSelection::AllTasks,
            changed: true,
            next_category_id: 0,
        })
    }

    /// Reads a project file.
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        io::read_project_file(path)
    }

    /// Writes the project file and clears the unsaved-changes flag.
    pub fn save(&mut self, path: &Path) -> Result<(), PersistError> {
        io::write_project_file(path, self)?;
        self.changed = false;
        Ok(())
    }

    /// Writes the statistics export. Does not touch the unsaved-changes flag.
    pub fn save_stats(&self, path: &Path) -> Result<(), PersistError> {
        io::write_stats_file(path, self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when there are changes since the last save.
    pub const fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn set_changed(&mut self, changed: bool) {
        self.changed = changed;
    }

    pub const fn current(&self) -> LogSelection {
        self.current
    }

    pub const fn categories(&self) -> &SortedList<CategoryLog> {
        &self.categories
    }

    pub const fn all_tasks_log(&self) -> &AllTasksLog {
        &self.all_tasks
    }

    /// The All Tasks name followed by every category name in sorted order.
    pub fn category_names(&self) -> Vec<&str> {
        std::iter::once(ALL_TASKS_NAME)
            .chain(self.categories.iter().map(TaskLog::name))
            .collect()
    }

    /// Adds a category and makes it the current log.
    pub fn add_category_log(&mut self, name: &str) -> Result<(), ModelError> {
        check_name(name)?;
        if self.categories.iter().any(|category| category.name() == name) {
            return Err(duplicate(name));
        }

        let id = CategoryId::new(self.next_category_id);
        let log = CategoryLog::new(id, name)?;
        self.categories.add(log).map_err(|err| match err {
            CollectionError::Duplicate => duplicate(name),
            other => other.into(),
        })?;

        self.next_category_id += 1;
        self.current = LogSelection::Category(id);
        self.changed = true;
        debug!(category = name, %id, "added category");
        Ok(())
    }

    /// Focuses the category with exactly this name, or All Tasks when none
    /// matches.
    pub fn set_current_task_log(&mut self, name: &str) {
        self.current = self
            .categories
            .iter()
            .find(|category| category.name() == name)
            .map_or(LogSelection::AllTasks, |category| {
                LogSelection::Category(category.id())
            });
        debug!(log = self.current_log_name(), "selected log");
    }

    /// The log task operations currently target.
    pub fn current_log(&self) -> &dyn TaskLog {
        if let Some(category) = self.current_category() {
            return category;
        }
        &self.all_tasks
    }

    pub fn current_log_name(&self) -> &str {
        self.current_log().name()
    }

    /// The current category, or `None` while All Tasks is focused.
    pub fn current_category(&self) -> Option<&CategoryLog> {
        let position = self.current_category_position()?;
        self.categories.get(position).ok()
    }

    /// Renames the current category, keeping the categories sorted.
    pub fn edit_category_log_name(&mut self, new_name: &str) -> Result<(), ModelError> {
        check_name(new_name)?;
        if self
            .categories
            .iter()
            .any(|category| compare_ignore_case(category.name(), new_name).is_eq())
        {
            return Err(duplicate(new_name));
        }
        let Some(position) = self.current_category_position() else {
            return Err(ModelError::AllTasksLogLocked);
        };

        // The sort key changes, so the log has to be re-inserted.
        let mut log = self.categories.remove(position)?;
        let old_name = log.name().to_string();
        log.rename(new_name)?;
        self.categories.add(log).map_err(|err| match err {
            CollectionError::Duplicate => duplicate(new_name),
            other => other.into(),
        })?;

        self.changed = true;
        debug!(from = old_name.as_str(), to = new_name, "renamed category");
        Ok(())
    }

    /// Removes the current category together with all of its tasks.
    pub fn remove_category_log(&mut self) -> Result<(), ModelError> {
        let Some(position) = self.current_category_position() else {
            return Err(ModelError::AllTasksLogUndeletable);
        };

        let removed = self.categories.remove(position)?;
        let id = removed.id();
        let before = self.all_tasks.len();
        self.all_tasks
            .tasks_mut()
            .retain(|task| task.borrow().category() != Some(id));

        self.current = LogSelection::AllTasks;
        self.changed = true;
        debug!(
            category = removed.name(),
            purged = before - self.all_tasks.len(),
            "removed category"
        );
        Ok(())
    }

    /// Adds a task to the current category and to All Tasks.
    ///
    /// Returns `Ok(false)` without doing anything while All Tasks is the
    /// current log, since a task needs a category.
    pub fn add_task(&mut self, task: Task) -> Result<bool, ModelError> {
        let Some(position) = self.current_category_position() else {
            return Ok(false);
        };

        let shared = task.into_shared();
        self.categories
            .get_mut(position)?
            .append(Rc::clone(&shared))?;
        self.all_tasks.append(shared)?;

        self.changed = true;
        debug!(log = self.current_log_name(), "added task");
        Ok(true)
    }

    /// Edits the task at `index` of the current log.
    ///
    /// Both logs hold the same task, so the change shows up in each.
    pub fn edit_task(
        &mut self,
        index: usize,
        title: impl Into<String>,
        duration: u32,
        details: impl Into<String>,
    ) -> Result<(), ModelError> {
        let task = Rc::clone(self.current_log().get(index)?);
        task.borrow_mut().edit(title, duration, details)?;
        self.changed = true;
        debug!(log = self.current_log_name(), index, "edited task");
        Ok(())
    }

    /// Removes the task at `index` of the current log from both logs.
    ///
    /// When All Tasks is current it stays current afterwards.
    pub fn remove_task(&mut self, index: usize) -> Result<(), ModelError> {
        if let Some(position) = self.current_category_position() {
            let removed = self.categories.get_mut(position)?.remove(index)?;
            if let Some(found) = self.all_tasks.position_of(&removed) {
                self.all_tasks.remove(found)?;
            }
        } else {
            let removed = self.all_tasks.remove(index)?;
            let owner = removed.borrow().category();
            if let Some(position) = owner.and_then(|id| self.category_position(id)) {
                let category = self.categories.get_mut(position)?;
                if let Some(found) = category.position_of(&removed) {
                    category.remove(found)?;
                }
            }
            self.current = LogSelection::AllTasks;
        }

        self.changed = true;
        debug!(log = self.current_log_name(), index, "removed task");
        Ok(())
    }

    /// Name of the category a task belongs to, or `""` if it has none.
    pub fn category_name_of(&self, task: &Task) -> &str {
        task.category()
            .and_then(|id| self.categories.iter().find(|category| category.id() == id))
            .map_or("", TaskLog::name)
    }

    /// Title, duration and category name of each task in the current log.
    pub fn task_rows(&self) -> Vec<TaskRow> {
        self.current_log()
            .tasks()
            .iter()
            .map(|task| {
                let task = task.borrow();
                TaskRow {
                    title: task.title().to_string(),
                    duration: task.duration(),
                    category: self.category_name_of(&task).to_string(),
                }
            })
            .collect()
    }

    /// The last task added to each category, in category order.
    pub fn most_recent_tasks(&self) -> Vec<RecentTask> {
        self.categories
            .iter()
            .map(|category| {
                let last = category.tasks().last().map(|task| task.borrow());
                RecentTask {
                    category: category.name().to_string(),
                    title: last.as_ref().map(|task| task.title().to_string()),
                    duration: last.as_ref().map(|task| task.duration()),
                }
            })
            .collect()
    }

    fn category_position(&self, id: CategoryId) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.id() == id)
    }

    fn current_category_position(&self) -> Option<usize> {
        match self.current {
            LogSelection::AllTasks => None,
            LogSelection::Category(id) => self.category_position(id),
        }
    }
}

/// Project and category names: storable, and never the All Tasks name.
fn check_name(name: &str) -> Result<(), ModelError> {
    check_log_name(name)?;
    if name == ALL_TASKS_NAME {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn duplicate(name: &str) -> ModelError {
    ModelError::DuplicateCategory {
        name: name.to_string(),
    }
}
