//! CLI subcommand implementations.

pub mod category;
pub mod init;
pub mod recent;
pub mod stats;
pub mod status;
pub mod task;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use wt_core::Project;

use crate::Config;

/// Loads the configured project file.
pub(crate) fn open_project(config: &Config) -> Result<Project> {
    let path = &config.project_path;
    if !path.exists() {
        bail!(
            "no project at {}; create one with `wt init <name>`",
            path.display()
        );
    }
    Project::load(path).with_context(|| format!("failed to open {}", path.display()))
}

/// Writes the project back when it has unsaved changes.
pub(crate) fn save_if_changed(project: &mut Project, config: &Config) -> Result<()> {
    if !project.is_changed() {
        tracing::debug!("project unchanged, skipping save");
        return Ok(());
    }
    ensure_parent(&config.project_path)?;
    project
        .save(&config.project_path)
        .with_context(|| format!("failed to save {}", config.project_path.display()))
}

/// Focuses the category named `name`, failing when there is none.
pub(crate) fn select_category(project: &mut Project, name: &str) -> Result<()> {
    project.set_current_task_log(name);
    if project.current_category().is_none() {
        bail!("category not found: {name}");
    }
    Ok(())
}

/// Converts a 1-based task number from the command line to an index.
pub(crate) fn task_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("task numbers start at 1"),
    }
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;

    use wt_core::{Project, Task};

    use crate::Config;

    pub fn config_in(dir: &Path) -> Config {
        Config {
            project_path: dir.join("project.wt"),
            stats_path: dir.join("stats.csv"),
        }
    }

    /// Saves a "Demo" project with two Work tasks, one Home task and an
    /// empty Study category.
    pub fn demo_project(config: &Config) {
        let mut project = Project::new("Demo").unwrap();
        project.add_category_log("Work").unwrap();
        project
            .add_task(Task::new("Write report", 60, "Draft section 1").unwrap())
            .unwrap();
        project
            .add_task(Task::new("Email", 15, "Inbox").unwrap())
            .unwrap();
        project.add_category_log("Home").unwrap();
        project
            .add_task(Task::new("Laundry", 30, "Two loads").unwrap())
            .unwrap();
        project.add_category_log("Study").unwrap();
        project.save(&config.project_path).unwrap();
    }
}
