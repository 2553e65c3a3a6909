//! Init command for creating a new project file.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;

use wt_core::Project;

use super::save_if_changed;
use crate::Config;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name.
    pub name: String,

    /// Overwrite an existing project file.
    #[arg(long)]
    pub force: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &InitArgs, config: &Config) -> Result<()> {
    let path = &config.project_path;
    if path.exists() && !args.force {
        bail!(
            "project file already exists: {} (use --force to replace it)",
            path.display()
        );
    }

    let mut project = Project::new(args.name.trim())
        .with_context(|| format!("cannot create project {:?}", args.name))?;
    save_if_changed(&mut project, config)?;

    writeln!(writer, "Created project {}", project.name())?;
    writeln!(writer, "Saved to: {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::commands::testing::config_in;

    fn args(name: &str, force: bool) -> InitArgs {
        InitArgs {
            name: name.to_string(),
            force,
        }
    }

    #[test]
    fn init_writes_an_empty_project() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        let mut output = Vec::new();

        run(&mut output, &args("Demo", false), &config).unwrap();

        let contents = std::fs::read_to_string(&config.project_path).unwrap();
        assert_eq!(contents, "! Demo\n");
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Created project Demo\n"));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        run(&mut Vec::new(), &args("Demo", false), &config).unwrap();

        let err = run(&mut Vec::new(), &args("Other", false), &config).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        run(&mut Vec::new(), &args("Other", true), &config).unwrap();
        let contents = std::fs::read_to_string(&config.project_path).unwrap();
        assert_eq!(contents, "! Other\n");
    }

    #[test]
    fn init_rejects_reserved_name() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());

        let err = run(&mut Vec::new(), &args("All Tasks", false), &config).unwrap_err();
        assert_snapshot!(format!("{err:#}"), @r#"cannot create project "All Tasks": invalid name: "All Tasks""#);
        assert!(!config.project_path.exists());
    }
}
