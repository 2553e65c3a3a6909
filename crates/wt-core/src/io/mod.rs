//! Reading and writing project files.
//!
//! All filesystem failures surface as [`PersistError::Load`] or
//! [`PersistError::Save`]. Saves go to a sibling temporary file that is
//! renamed over the target, so a failed save leaves the old file intact.

mod reader;
mod writer;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PersistError;
use crate::project::Project;

pub use reader::parse_project;
pub use writer::{STATS_HEADER, write_project, write_stats};

/// Loads a project from `path`.
pub fn read_project_file(path: &Path) -> Result<Project, PersistError> {
    let contents = fs::read_to_string(path).map_err(|source| PersistError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let project = parse_project(&contents)?;
    debug!(path = %path.display(), "loaded project");
    Ok(project)
}

/// Writes `project` to `path` in the project file format.
///
/// Leaves the unsaved-changes flag alone; [`Project::save`] clears it.
pub fn write_project_file(path: &Path, project: &Project) -> Result<(), PersistError> {
    replace_file(path, |writer| write_project(writer, project))?;
    debug!(path = %path.display(), "saved project");
    Ok(())
}

/// Writes the statistics export for `project` to `path`.
pub fn write_stats_file(path: &Path, project: &Project) -> Result<(), PersistError> {
    replace_file(path, |writer| write_stats(writer, project))?;
    debug!(path = %path.display(), "saved statistics");
    Ok(())
}

fn replace_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), PersistError> {
    let save_error = |source| PersistError::Save {
        path: path.to_path_buf(),
        source,
    };

    let temp = temp_path(path);
    let file = File::create(&temp).map_err(save_error)?;
    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|()| writer.flush());
    drop(writer);

    if let Err(source) = written.and_then(|()| fs::rename(&temp, path)) {
        if let Err(err) = fs::remove_file(&temp) {
            warn!(path = %temp.display(), error = %err, "failed to remove temporary file");
        }
        return Err(save_error(source));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::log::TaskLog;
    use crate::task::Task;

    #[test]
    fn save_and_load_through_files() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("demo.wt");

        let mut project = Project::new("Demo").unwrap();
        project.add_category_log("Work").unwrap();
        project
            .add_task(Task::new("Write report", 60, "Draft section 1").unwrap())
            .unwrap();
        assert!(project.is_changed());

        project.save(&path).unwrap();
        assert!(!project.is_changed());
        assert!(!temp_path(&path).exists());

        let loaded = Project::load(&path).unwrap();
        assert_eq!(loaded.name(), "Demo");
        assert_eq!(loaded.all_tasks_log().tasks().len(), 1);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = Project::load(&temp.path().join("missing.wt")).unwrap_err();
        assert!(matches!(err, PersistError::Load { .. }));
        assert!(err.to_string().starts_with("unable to load file"));
    }

    #[test]
    fn unwritable_destination_is_a_save_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("no-such-dir").join("demo.wt");
        let mut project = Project::new("Demo").unwrap();

        let err = project.save(&path).unwrap_err();
        assert!(matches!(err, PersistError::Save { .. }));
        assert!(project.is_changed());
    }

    #[test]
    fn failed_rename_cleans_up_temporary_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("taken");
        fs::create_dir(&path).unwrap();
        let mut project = Project::new("Demo").unwrap();

        let err = project.save(&path).unwrap_err();
        assert!(matches!(err, PersistError::Save { .. }));
        assert!(!temp_path(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn stats_file_leaves_dirty_flag() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("stats.csv");
        let project = Project::new("Demo").unwrap();

        project.save_stats(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{STATS_HEADER}\nAll Tasks,0,,,\n"));
        assert!(project.is_changed());
    }
}
