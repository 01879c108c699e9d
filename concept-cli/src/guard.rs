use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::fs::Filesystem;
use crate::validation::Identifier;

/// Header and implementation paths for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFiles {
    pub header: PathBuf,
    pub implementation: PathBuf,
}

impl ClassFiles {
    pub fn new(concept_dir: &Path, class: &Identifier) -> Self {
        ClassFiles {
            header: header_path(concept_dir, class.as_str()),
            implementation: concept_dir.join(format!("{class}.cpp")),
        }
    }
}

pub fn header_path(concept_dir: &Path, class: &str) -> PathBuf {
    concept_dir.join(format!("{class}.h"))
}

/// Refuse to create `files` when either already exists, or when `base` is
/// given and its header is not in `concept_dir`.
///
/// `concept` is the concept argument as typed, used in messages.
pub fn check_class(
    fs: &impl Filesystem,
    concept_dir: &Path,
    concept: &str,
    files: &ClassFiles,
    class: &Identifier,
    base: Option<&Identifier>,
) -> Result<(), ScaffoldError> {
    if let Some(base) = base {
        let base_header = header_path(concept_dir, base.as_str());
        if !fs.exists(&base_header) {
            tracing::debug!(header = %base_header.display(), "base class header missing");
            return Err(ScaffoldError::BaseClassMissing {
                base: base.to_string(),
                concept: concept.to_string(),
            });
        }
    }

    if fs.exists(&files.header) || fs.exists(&files.implementation) {
        return Err(ScaffoldError::ClassExists {
            class: class.to_string(),
            concept: concept.to_string(),
        });
    }

    Ok(())
}

/// Refuse to create a concept whose directory already exists.
pub fn check_concept(
    fs: &impl Filesystem,
    concept_dir: &Path,
    concept: &Identifier,
) -> Result<(), ScaffoldError> {
    if fs.exists(concept_dir) {
        return Err(ScaffoldError::ConceptExists {
            name: concept.to_string(),
            path: concept_dir.to_path_buf(),
        });
    }
    Ok(())
}
