//! Per-invocation settings.
//!
//! The project root is taken from `--project-root`, then the
//! `CONCEPTS_PROJECT_ROOT` environment variable (both handled by clap), and
//! otherwise discovered from the working directory.

use std::path::{Path, PathBuf};

use crate::fs::Filesystem;
use crate::CONCEPTS_DIR;

/// Environment variable consulted when `--project-root` is absent.
pub const PROJECT_ROOT_ENV: &str = "CONCEPTS_PROJECT_ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `concepts/`.
    pub project_root: PathBuf,
    /// Directory the command was invoked from; `.` resolves against it.
    pub working_dir: PathBuf,
}

impl Settings {
    pub fn new(project_root: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Settings {
            project_root: project_root.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Build settings for `working_dir`, discovering the project root unless
    /// one was given explicitly.
    ///
    /// Discovery picks the nearest ancestor (the working directory included)
    /// that contains a `concepts/` directory, falling back to the working
    /// directory itself.
    pub fn discover(
        fs: &impl Filesystem,
        explicit_root: Option<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        let working_dir = working_dir.into();
        let project_root = match explicit_root {
            Some(root) if root.is_relative() => working_dir.join(root),
            Some(root) => root,
            None => find_project_root(fs, &working_dir).unwrap_or_else(|| working_dir.clone()),
        };

        tracing::debug!(
            project_root = %project_root.display(),
            working_dir = %working_dir.display(),
            "settings resolved"
        );

        Settings {
            project_root,
            working_dir,
        }
    }

    /// [`Settings::discover`] from the process working directory.
    pub fn from_env(fs: &impl Filesystem, explicit_root: Option<PathBuf>) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::discover(fs, explicit_root, cwd))
    }

    pub fn concepts_dir(&self) -> PathBuf {
        self.project_root.join(CONCEPTS_DIR)
    }

    /// `path` relative to the project root, for display.
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

fn find_project_root(fs: &impl Filesystem, start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| fs.is_dir(&dir.join(CONCEPTS_DIR)))
        .map(Path::to_path_buf)
}
