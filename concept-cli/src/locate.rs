use std::path::PathBuf;

use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::fs::Filesystem;
use crate::{BUILD_MARKER, CONCEPTS_DIR};

/// How the concept directory for `create-class` is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConceptLocator {
    /// `.`: the working directory, when it looks like `concepts/<name>/`.
    CurrentDir,
    /// `<project_root>/concepts/<name>`.
    Named(String),
}

impl ConceptLocator {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "." {
            ConceptLocator::CurrentDir
        } else {
            ConceptLocator::Named(arg.to_string())
        }
    }

    /// The argument as the user would type it again, e.g. in hints.
    pub fn as_arg(&self) -> &str {
        match self {
            ConceptLocator::CurrentDir => ".",
            ConceptLocator::Named(name) => name,
        }
    }

    pub fn resolve(&self, fs: &impl Filesystem, settings: &Settings) -> Result<PathBuf, ScaffoldError> {
        match self {
            ConceptLocator::CurrentDir => {
                let dir = &settings.working_dir;
                let has_marker = fs.exists(&dir.join(BUILD_MARKER));
                let under_concepts = dir
                    .parent()
                    .and_then(|p| p.file_name())
                    .is_some_and(|name| name == CONCEPTS_DIR);

                tracing::debug!(dir = %dir.display(), has_marker, under_concepts, "resolving current directory");

                if has_marker && under_concepts {
                    Ok(dir.clone())
                } else {
                    Err(ScaffoldError::NotAConceptDirectory(dir.clone()))
                }
            }
            ConceptLocator::Named(name) => {
                let path = settings.concepts_dir().join(name);
                tracing::debug!(concept = %name, path = %path.display(), "resolving named concept");

                if fs.exists(&path) {
                    Ok(path)
                } else {
                    Err(ScaffoldError::ConceptNotFound {
                        name: name.clone(),
                        path,
                    })
                }
            }
        }
    }
}

impl From<&str> for ConceptLocator {
    fn from(arg: &str) -> Self {
        Self::from_arg(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;
    use std::path::Path;

    fn settings(cwd: &str) -> Settings {
        Settings::new("/proj", cwd)
    }

    #[test]
    fn dot_selects_current_dir() {
        assert_eq!(ConceptLocator::from_arg("."), ConceptLocator::CurrentDir);
        assert_eq!(
            ConceptLocator::from_arg("inheritance"),
            ConceptLocator::Named("inheritance".into())
        );
    }

    #[test]
    fn current_dir_inside_concept() {
        let fs = MemoryFs::new().with_file("/proj/concepts/inheritance/CMakeLists.txt", "");

        let dir = ConceptLocator::CurrentDir
            .resolve(&fs, &settings("/proj/concepts/inheritance"))
            .unwrap();

        assert_eq!(dir, Path::new("/proj/concepts/inheritance"));
    }

    #[test]
    fn current_dir_without_marker() {
        let fs = MemoryFs::new().with_dir("/proj/concepts/inheritance");

        let err = ConceptLocator::CurrentDir
            .resolve(&fs, &settings("/proj/concepts/inheritance"))
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::NotAConceptDirectory(_)));
    }

    #[test]
    fn current_dir_with_wrong_parent() {
        let fs = MemoryFs::new().with_file("/proj/other/inheritance/CMakeLists.txt", "");

        let err = ConceptLocator::CurrentDir
            .resolve(&fs, &settings("/proj/other/inheritance"))
            .unwrap_err();

        assert!(err.to_string().contains("doesn't appear to be a concept directory"));
    }

    #[test]
    fn named_concept_missing() {
        let fs = MemoryFs::new().with_dir("/proj/concepts");

        let err = ConceptLocator::Named("polymorphism".into())
            .resolve(&fs, &settings("/proj"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Concept 'polymorphism' doesn't exist at /proj/concepts/polymorphism"
        );
    }

    #[test]
    fn named_concept_ignores_working_dir() {
        let fs = MemoryFs::new().with_dir("/proj/concepts/polymorphism");

        let dir = ConceptLocator::Named("polymorphism".into())
            .resolve(&fs, &settings("/somewhere/else"))
            .unwrap();

        assert_eq!(dir, Path::new("/proj/concepts/polymorphism"));
    }
}
