//! Project file and statistics export writers.

use std::io::{self, Write};

use crate::log::TaskLog;
use crate::project::Project;

/// Header line of the statistics export.
pub const STATS_HEADER: &str = "Category,Count,Min,Max,Average";

/// Writes the project file: name, category declarations, then each
/// category's tasks in category order.
pub fn write_project<W: Write>(writer: &mut W, project: &Project) -> io::Result<()> {
    writeln!(writer, "! {}", project.name())?;
    for category in project.categories() {
        writeln!(writer, "# {}", category.name())?;
    }
    for category in project.categories() {
        for task in category.tasks() {
            writeln!(writer, "{}", task.borrow().record(category.name()))?;
        }
    }
    Ok(())
}

/// Writes one summary row per category followed by the All Tasks row.
pub fn write_stats<W: Write>(writer: &mut W, project: &Project) -> io::Result<()> {
    writeln!(writer, "{STATS_HEADER}")?;
    for category in project.categories() {
        writeln!(writer, "{}", category.summary_row())?;
    }
    writeln!(writer, "{}", project.all_tasks_log().summary_row())?;
    Ok(())
}
