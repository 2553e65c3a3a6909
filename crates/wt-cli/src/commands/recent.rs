//! Recent command: the newest task of every category.

use std::io::Write;

use anyhow::Result;

use super::open_project;
use crate::Config;

pub fn run<W: Write>(writer: &mut W, json: bool, config: &Config) -> Result<()> {
    let project = open_project(config)?;
    let recent = project.most_recent_tasks();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&recent)?)?;
        return Ok(());
    }

    if recent.is_empty() {
        writeln!(writer, "No categories.")?;
        return Ok(());
    }

    for entry in &recent {
        let [title, duration, category] = entry.to_row();
        if duration.is_empty() {
            writeln!(writer, "{category}: {title}")?;
        } else {
            writeln!(writer, "{category}: {title} ({duration} min)")?;
        }
    }
    Ok(())
}
