//! Parser for the line-oriented project file format.
//!
//! ```text
//! ! Demo
//! # Work
//! * Write report,60,Work
//! Draft section 1
//! ```

use tracing::{debug, warn};

use crate::error::PersistError;
use crate::log::{ALL_TASKS_NAME, TaskLog};
use crate::project::Project;
use crate::task::Task;

/// Builds a project from the contents of a project file.
///
/// Duplicate category declarations fail the whole load. Malformed task
/// records, and tasks naming a category that was never declared, are
/// skipped. The returned project is focused on All Tasks and has no unsaved
/// changes.
pub fn parse_project(input: &str) -> Result<Project, PersistError> {
    if !input.starts_with('!') {
        return Err(PersistError::MissingHeader);
    }

    let lines: Vec<&str> = input.lines().collect();
    let first_task = lines
        .iter()
        .position(|line| line.starts_with('*'))
        .unwrap_or(lines.len());
    let (header, body) = lines.split_at(first_task);

    let Some((project_line, declarations)) = header.split_first() else {
        return Err(PersistError::MissingHeader);
    };
    let name = project_line
        .strip_prefix('!')
        .ok_or(PersistError::MissingHeader)?
        .trim();
    let mut project = Project::new(name).map_err(PersistError::InvalidProject)?;

    for line in declarations {
        let Some(category) = line.strip_prefix('#').map(str::trim) else {
            continue;
        };
        if category.is_empty() {
            continue;
        }
        project
            .add_category_log(category)
            .map_err(PersistError::InvalidCategories)?;
    }

    for block in task_blocks(body) {
        read_task(&mut project, block);
    }

    project.set_current_task_log(ALL_TASKS_NAME);
    project.set_changed(false);
    debug!(
        project = project.name(),
        categories = project.categories().len(),
        tasks = project.all_tasks_log().len(),
        "parsed project"
    );
    Ok(project)
}

/// Splits the task section into blocks, each starting at a `*` line.
fn task_blocks<'a>(body: &'a [&'a str]) -> impl Iterator<Item = &'a [&'a str]> {
    body.iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with('*'))
        .map(move |(start, _)| {
            let end = body[start + 1..]
                .iter()
                .position(|line| line.starts_with('*'))
                .map_or(body.len(), |offset| start + 1 + offset);
            &body[start..end]
        })
}

fn read_task(project: &mut Project, block: &[&str]) {
    let Some((heading, detail_lines)) = block.split_first() else {
        return;
    };
    let heading = heading.strip_prefix('*').unwrap_or(heading).trim();

    let fields: Vec<&str> = heading.split(',').collect();
    let [title, duration, category] = fields.as_slice() else {
        warn!(record = heading, "skipping task: expected title,duration,category");
        return;
    };

    project.set_current_task_log(category.trim());

    let Ok(duration) = duration.trim().parse::<u32>() else {
        warn!(record = heading, "skipping task: duration is not a number");
        return;
    };

    let details = detail_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let task = match Task::new(title.trim(), duration, details.trim()) {
        Ok(task) => task,
        Err(err) => {
            warn!(record = heading, error = %err, "skipping task");
            return;
        }
    };

    match project.add_task(task) {
        Ok(true) => {}
        Ok(false) => debug!(record = heading, "skipping task: category not declared"),
        Err(err) => warn!(record = heading, error = %err, "skipping task"),
    }
}
