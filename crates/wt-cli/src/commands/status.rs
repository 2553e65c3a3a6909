//! Status command for summarizing the project.

use std::io::Write;

use anyhow::Result;

use wt_core::TaskLog;

use super::open_project;
use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let project = open_project(config)?;

    writeln!(writer, "Project: {}", project.name())?;
    writeln!(writer, "File: {}", config.project_path.display())?;

    if project.categories().is_empty() {
        writeln!(writer, "No categories.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "Categories: {} ({} tasks)",
        project.categories().len(),
        project.all_tasks_log().len()
    )?;
    for category in project.categories() {
        writeln!(
            writer,
            "- {}: {} tasks, {} min",
            category.name(),
            category.len(),
            category
                .tasks()
                .iter()
                .map(|task| u64::from(task.borrow().duration()))
                .sum::<u64>()
        )?;
    }
    Ok(())
}
