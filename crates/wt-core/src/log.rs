//! Task logs: the All Tasks view and per-category logs.
//!
//! Both variants implement [`TaskLog`], which supplies the shared
//! append/edit/remove surface and the duration statistics. A
//! [`CategoryLog`] additionally stamps every task it receives with its own
//! [`CategoryId`].

use std::cmp::Ordering;
use std::rc::Rc;

use crate::collections::OrderedLog;
use crate::error::ModelError;
use crate::task::{CategoryId, SharedTask};

/// Fixed name of the aggregate log.
pub const ALL_TASKS_NAME: &str = "All Tasks";

/// Shared behavior of every task log.
pub trait TaskLog {
    fn name(&self) -> &str;

    /// Changes the log name, subject to the variant's rules.
    fn rename(&mut self, name: &str) -> Result<(), ModelError>;

    fn tasks(&self) -> &OrderedLog<SharedTask>;

    fn tasks_mut(&mut self) -> &mut OrderedLog<SharedTask>;

    /// The category id, for logs that are categories.
    fn category_id(&self) -> Option<CategoryId> {
        None
    }

    /// Adds a task at the end of the log.
    fn append(&mut self, task: SharedTask) -> Result<(), ModelError> {
        self.tasks_mut().append(task);
        Ok(())
    }

    /// Replaces the task at `index`, returning the previous one.
    fn set(&mut self, index: usize, task: SharedTask) -> Result<SharedTask, ModelError> {
        Ok(self.tasks_mut().set(index, task)?)
    }

    fn remove(&mut self, index: usize) -> Result<SharedTask, ModelError> {
        Ok(self.tasks_mut().remove(index)?)
    }

    fn get(&self, index: usize) -> Result<&SharedTask, ModelError> {
        Ok(self.tasks().get(index)?)
    }

    fn len(&self) -> usize {
        self.tasks().len()
    }

    fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }

    /// Index of this exact task (by identity, not by value).
    fn position_of(&self, task: &SharedTask) -> Option<usize> {
        self.tasks().position(|entry| Rc::ptr_eq(entry, task))
    }

    /// Shortest task duration, or 0 for an empty log.
    fn min_duration(&self) -> u32 {
        self.tasks()
            .iter()
            .map(|task| task.borrow().duration())
            .min()
            .unwrap_or(0)
    }

    /// Longest task duration, or 0 for an empty log.
    fn max_duration(&self) -> u32 {
        self.tasks()
            .iter()
            .map(|task| task.borrow().duration())
            .max()
            .unwrap_or(0)
    }

    /// Mean duration rounded to one decimal place, or 0.0 for an empty log.
    #[expect(
        clippy::cast_precision_loss,
        reason = "task totals stay far below 2^52 minutes"
    )]
    fn average_duration(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: u64 = self
            .tasks()
            .iter()
            .map(|task| u64::from(task.borrow().duration()))
            .sum();
        let average = total as f64 / self.len() as f64;
        (average * 10.0).round() / 10.0
    }

    /// `name,count,min,max,average`, with the last three blank when empty.
    fn summary_row(&self) -> String {
        if self.is_empty() {
            return format!("{},0,,,", self.name());
        }
        format!(
            "{},{},{},{},{:.1}",
            self.name(),
            self.len(),
            self.min_duration(),
            self.max_duration(),
            self.average_duration()
        )
    }
}

/// The aggregate log holding every task of a project.
#[derive(Debug)]
pub struct AllTasksLog {
    tasks: OrderedLog<SharedTask>,
}

impl AllTasksLog {
    pub fn new() -> Self {
        Self {
            tasks: OrderedLog::new(),
        }
    }
}

impl Default for AllTasksLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskLog for AllTasksLog {
    fn name(&self) -> &str {
        ALL_TASKS_NAME
    }

    fn rename(&mut self, name: &str) -> Result<(), ModelError> {
        if name == ALL_TASKS_NAME {
            Ok(())
        } else {
            Err(ModelError::AllTasksLogLocked)
        }
    }

    fn tasks(&self) -> &OrderedLog<SharedTask> {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut OrderedLog<SharedTask> {
        &mut self.tasks
    }
}

/// A user-defined category of tasks.
#[derive(Debug)]
pub struct CategoryLog {
    id: CategoryId,
    name: String,
    tasks: OrderedLog<SharedTask>,
}

impl CategoryLog {
    /// Creates an empty category. The name must not be empty.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        check_log_name(&name)?;
        Ok(Self {
            id,
            name,
            tasks: OrderedLog::new(),
        })
    }

    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Case-insensitive order on category names.
    pub fn compare_names(a: &Self, b: &Self) -> Ordering {
        compare_ignore_case(&a.name, &b.name)
    }

    /// Stamps `task` as belonging to this category.
    fn claim(&self, task: &SharedTask) -> Result<(), ModelError> {
        task.borrow_mut().assign_category(self.id)
    }
}

impl TaskLog for CategoryLog {
    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, name: &str) -> Result<(), ModelError> {
        check_log_name(name)?;
        name.clone_into(&mut self.name);
        Ok(())
    }

    fn tasks(&self) -> &OrderedLog<SharedTask> {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut OrderedLog<SharedTask> {
        &mut self.tasks
    }

    fn category_id(&self) -> Option<CategoryId> {
        Some(self.id)
    }

    fn append(&mut self, task: SharedTask) -> Result<(), ModelError> {
        self.claim(&task)?;
        self.tasks.append(task);
        Ok(())
    }

    fn set(&mut self, index: usize, task: SharedTask) -> Result<SharedTask, ModelError> {
        self.tasks.get(index)?;
        self.claim(&task)?;
        Ok(self.tasks.set(index, task)?)
    }
}

/// Checks that a project or category name survives the project file: not
/// empty, no commas or line breaks, no surrounding whitespace.
pub(crate) fn check_log_name(name: &str) -> Result<(), ModelError> {
    if name.is_empty() || name.contains([',', '\n', '\r']) || name.trim() != name {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Compares two names ignoring case.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn task(title: &str, duration: u32) -> SharedTask {
        Task::new(title, duration, "details").unwrap().into_shared()
    }

    fn category(id: u32, name: &str) -> CategoryLog {
        CategoryLog::new(CategoryId::new(id), name).unwrap()
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact equality intended for rounded averages"
    )]
    fn statistics_over_durations() {
        let mut log = category(1, "Work");
        for duration in [10, 15, 20] {
            log.append(task("t", duration)).unwrap();
        }
        assert_eq!(log.min_duration(), 10);
        assert_eq!(log.max_duration(), 20);
        assert_eq!(log.average_duration(), 15.0);
        assert_eq!(log.summary_row(), "Work,3,10,20,15.0");
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact equality intended for rounded averages"
    )]
    fn average_rounds_to_one_decimal() {
        let mut log = AllTasksLog::new();
        for duration in [1, 2, 2] {
            log.append(task("t", duration)).unwrap();
        }
        assert_eq!(log.average_duration(), 1.7);
        assert_eq!(log.summary_row(), "All Tasks,3,1,2,1.7");
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact equality intended for the empty sentinel"
    )]
    fn empty_log_statistics() {
        let log = category(1, "Empty");
        assert_eq!(log.min_duration(), 0);
        assert_eq!(log.max_duration(), 0);
        assert_eq!(log.average_duration(), 0.0);
        assert_eq!(log.summary_row(), "Empty,0,,,");
    }

    #[test]
    fn category_append_stamps_the_task() {
        let mut log = category(4, "Study");
        let shared = task("Read", 30);
        log.append(Rc::clone(&shared)).unwrap();
        assert_eq!(shared.borrow().category(), Some(CategoryId::new(4)));
        assert_eq!(log.position_of(&shared), Some(0));
    }

    #[test]
    fn category_rejects_task_owned_elsewhere() {
        let mut first = category(1, "A");
        let mut second = category(2, "B");
        let shared = task("Read", 30);
        first.append(Rc::clone(&shared)).unwrap();

        assert_eq!(
            second.append(Rc::clone(&shared)),
            Err(ModelError::CategoryAlreadyAssigned)
        );
        assert!(second.is_empty());
    }

    #[test]
    fn category_set_checks_bounds_before_stamping() {
        let mut log = category(1, "A");
        let shared = task("Read", 30);
        let err = log.set(0, Rc::clone(&shared)).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(shared.borrow().category(), None);

        log.append(task("Old", 5)).unwrap();
        let previous = log.set(0, Rc::clone(&shared)).unwrap();
        assert_eq!(previous.borrow().title(), "Old");
        assert_eq!(shared.borrow().category(), Some(CategoryId::new(1)));
    }

    #[test]
    fn category_names_must_be_storable() {
        for name in ["", "A,B", "A\nB", " A", "A "] {
            assert!(
                matches!(
                    CategoryLog::new(CategoryId::new(1), name),
                    Err(ModelError::InvalidName { .. })
                ),
                "{name:?}"
            );
        }

        let mut log = category(1, "Work");
        assert!(log.rename("Work, Home").is_err());
        assert_eq!(log.name(), "Work");
    }

    #[test]
    fn all_tasks_log_cannot_be_renamed() {
        let mut log = AllTasksLog::new();
        assert_eq!(log.rename("Other"), Err(ModelError::AllTasksLogLocked));
        assert!(log.rename(ALL_TASKS_NAME).is_ok());
        assert_eq!(log.name(), ALL_TASKS_NAME);
    }

    #[test]
    fn all_tasks_log_does_not_stamp() {
        let mut log = AllTasksLog::new();
        let shared = task("Read", 30);
        log.append(Rc::clone(&shared)).unwrap();
        assert_eq!(shared.borrow().category(), None);
        assert_eq!(log.category_id(), None);
    }

    #[test]
    fn category_names_compare_case_insensitively() {
        let a = category(1, "alpha");
        let b = category(2, "Beta");
        let c = category(3, "ALPHA");
        assert_eq!(CategoryLog::compare_names(&a, &b), Ordering::Less);
        assert_eq!(CategoryLog::compare_names(&a, &c), Ordering::Equal);
        assert!(CategoryLog::new(CategoryId::new(9), "").is_err());
    }

    #[test]
    fn remove_and_get_report_bounds() {
        let mut log = AllTasksLog::new();
        assert!(log.get(0).unwrap_err().is_out_of_bounds());
        assert!(log.remove(0).unwrap_err().is_out_of_bounds());
    }
}
