//! Task commands. Tasks are numbered from 1 within the selected log.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;

use wt_core::{Project, Task};

use super::{open_project, save_if_changed, select_category, task_index};
use crate::{Config, TaskAction};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list tasks of this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Category to record the task in.
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub title: String,

    /// Minutes spent.
    #[arg(long)]
    pub duration: u32,

    #[arg(long)]
    pub details: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Number tasks within this category instead of across all tasks.
    #[arg(long)]
    pub category: Option<String>,

    /// Task number as shown by `wt task list`.
    pub number: usize,

    #[arg(long)]
    pub title: String,

    /// Minutes spent.
    #[arg(long)]
    pub duration: u32,

    #[arg(long)]
    pub details: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Number tasks within this category instead of across all tasks.
    #[arg(long)]
    pub category: Option<String>,

    /// Task number as shown by `wt task list`.
    pub number: usize,
}

pub fn run<W: Write>(writer: &mut W, action: &TaskAction, config: &Config) -> Result<()> {
    let mut project = open_project(config)?;

    match action {
        TaskAction::List(args) => list(writer, &mut project, args)?,
        TaskAction::Add(args) => add(writer, &mut project, args)?,
        TaskAction::Edit(args) => edit(writer, &mut project, args)?,
        TaskAction::Remove(args) => remove(writer, &mut project, args)?,
    }

    save_if_changed(&mut project, config)
}

fn select(project: &mut Project, category: Option<&str>) -> Result<()> {
    match category {
        Some(name) => select_category(project, name),
        None => {
            project.set_current_task_log(wt_core::ALL_TASKS_NAME);
            Ok(())
        }
    }
}

fn list<W: Write>(writer: &mut W, project: &mut Project, args: &ListArgs) -> Result<()> {
    select(project, args.category.as_deref())?;
    let rows = project.task_rows();

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(writer, "No tasks in {}.", project.current_log_name())?;
        return Ok(());
    }

    let width = rows.iter().map(|row| row.title.chars().count()).max().unwrap_or(0);
    for (number, row) in (1..).zip(&rows) {
        writeln!(
            writer,
            "{number}. {:<width$}  {:>3} min  {}",
            row.title, row.duration, row.category
        )?;
    }
    Ok(())
}

fn add<W: Write>(writer: &mut W, project: &mut Project, args: &AddArgs) -> Result<()> {
    select_category(project, &args.category)?;
    let task = Task::new(args.title.trim(), args.duration, args.details.trim())
        .context("invalid task")?;

    if !project.add_task(task)? {
        bail!("tasks can only be added to a category");
    }
    writeln!(
        writer,
        "Added task {} to {}: {}",
        project.current_log().len(),
        project.current_log_name(),
        args.title.trim()
    )?;
    Ok(())
}

fn edit<W: Write>(writer: &mut W, project: &mut Project, args: &EditArgs) -> Result<()> {
    select(project, args.category.as_deref())?;
    let index = task_index(args.number)?;

    project
        .edit_task(
            index,
            args.title.trim(),
            args.duration,
            args.details.trim(),
        )
        .with_context(|| {
            format!(
                "cannot edit task {} in {}",
                args.number,
                project.current_log_name()
            )
        })?;
    writeln!(
        writer,
        "Updated task {} in {}",
        args.number,
        project.current_log_name()
    )?;
    Ok(())
}

fn remove<W: Write>(writer: &mut W, project: &mut Project, args: &RemoveArgs) -> Result<()> {
    select(project, args.category.as_deref())?;
    let index = task_index(args.number)?;
    let title = project
        .current_log()
        .get(index)
        .with_context(|| {
            format!(
                "cannot remove task {} from {}",
                args.number,
                project.current_log_name()
            )
        })?
        .borrow()
        .title()
        .to_string();

    project.remove_task(index)?;
    writeln!(
        writer,
        "Removed task {} from {}: {title}",
        args.number,
        project.current_log_name()
    )?;
    Ok(())
}
