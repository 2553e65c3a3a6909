//! Category commands: list, add, rename and remove.

use std::io::Write;

use anyhow::{Context, Result};

use wt_core::TaskLog;

use super::{open_project, save_if_changed, select_category};
use crate::{CategoryAction, Config};

pub fn run<W: Write>(writer: &mut W, action: &CategoryAction, config: &Config) -> Result<()> {
    let mut project = open_project(config)?;

    match action {
        CategoryAction::List => {
            if project.categories().is_empty() {
                writeln!(writer, "No categories.")?;
            }
            for category in project.categories() {
                writeln!(writer, "{} ({})", category.name(), category.len())?;
            }
        }
        CategoryAction::Add { name } => {
            let name = name.trim();
            project
                .add_category_log(name)
                .with_context(|| format!("cannot add category {name:?}"))?;
            writeln!(writer, "Added category {name}")?;
        }
        CategoryAction::Rename { old, new } => {
            let new = new.trim();
            select_category(&mut project, old)?;
            project
                .edit_category_log_name(new)
                .with_context(|| format!("cannot rename category {old:?}"))?;
            writeln!(writer, "Renamed category {old} to {new}")?;
        }
        CategoryAction::Remove { name } => {
            select_category(&mut project, name)?;
            let purged = project.current_log().len();
            project
                .remove_category_log()
                .with_context(|| format!("cannot remove category {name:?}"))?;
            writeln!(writer, "Removed category {name} and {purged} tasks")?;
        }
    }

    save_if_changed(&mut project, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use wt_core::Project;

    use crate::commands::testing::{config_in, demo_project};

    fn run_ok(action: &CategoryAction, config: &Config) -> String {
        let mut output = Vec::new();
        run(&mut output, action, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn run_err(action: &CategoryAction, config: &Config) -> String {
        let err = run(&mut Vec::new(), action, config).unwrap_err();
        format!("{err:#}")
    }

    #[test]
    fn list_shows_sorted_names_with_counts() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        assert_snapshot!(run_ok(&CategoryAction::List, &config), @r"
        Home (1)
        Study (0)
        Work (2)
        ");
    }

    #[test]
    fn add_persists_the_new_category() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        let action = CategoryAction::Add {
            name: " Errands ".to_string(),
        };
        assert_snapshot!(run_ok(&action, &config), @"Added category Errands");

        let project = Project::load(&config.project_path).unwrap();
        assert_eq!(
            project.category_names(),
            ["All Tasks", "Errands", "Home", "Study", "Work"]
        );
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        let action = CategoryAction::Add {
            name: "work".to_string(),
        };
        assert_snapshot!(
            run_err(&action, &config),
            @r#"cannot add category "work": category already exists: work"#
        );
    }

    #[test]
    fn add_rejects_names_the_project_file_cannot_hold() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        let action = CategoryAction::Add {
            name: "Meetings, 1:1".to_string(),
        };
        assert_snapshot!(
            run_err(&action, &config),
            @r#"cannot add category "Meetings, 1:1": invalid name: "Meetings, 1:1""#
        );

        let project = Project::load(&config.project_path).unwrap();
        assert_eq!(
            project.category_names(),
            ["All Tasks", "Home", "Study", "Work"]
        );
    }

    #[test]
    fn rename_moves_tasks_with_the_category() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        let action = CategoryAction::Rename {
            old: "Work".to_string(),
            new: "Office".to_string(),
        };
        assert_snapshot!(run_ok(&action, &config), @"Renamed category Work to Office");

        let project = Project::load(&config.project_path).unwrap();
        assert_eq!(
            project.category_names(),
            ["All Tasks", "Home", "Office", "Study"]
        );
        let office: Vec<String> = project
            .task_rows()
            .into_iter()
            .filter(|row| row.category == "Office")
            .map(|row| row.title)
            .collect();
        assert_eq!(office, ["Write report", "Email"]);
    }

    #[test]
    fn rename_of_unknown_category_fails() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        let action = CategoryAction::Rename {
            old: "All Tasks".to_string(),
            new: "Everything".to_string(),
        };
        assert_snapshot!(run_err(&action, &config), @"category not found: All Tasks");
    }

    #[test]
    fn remove_purges_tasks() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        demo_project(&config);

        let action = CategoryAction::Remove {
            name: "Work".to_string(),
        };
        assert_snapshot!(run_ok(&action, &config), @"Removed category Work and 2 tasks");

        let project = Project::load(&config.project_path).unwrap();
        assert_eq!(project.category_names(), ["All Tasks", "Home", "Study"]);
        assert_eq!(project.all_tasks_log().len(), 1);
    }
}
