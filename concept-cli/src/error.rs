use std::path::PathBuf;

use crate::validation::InvalidIdentifier;

/// Every way a `create-concept` or `create-class` invocation can fail.
///
/// All variants are terminal for the invocation and map to exit code 1.
pub enum ScaffoldError {
    InvalidConceptName(InvalidIdentifier),
    InvalidClassName(InvalidIdentifier),
    InvalidBaseClassName(InvalidIdentifier),
    /// `.` was given but the working directory is not `concepts/<name>/`
    /// with a build file in it.
    NotAConceptDirectory(PathBuf),
    ConceptNotFound {
        name: String,
        path: PathBuf,
    },
    ConceptExists {
        name: String,
        path: PathBuf,
    },
    ClassExists {
        class: String,
        concept: String,
    },
    BaseClassMissing {
        base: String,
        concept: String,
    },
    Io {
        during: &'static str,
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an I/O error raised while writing output files.
    pub fn io(during: &'static str) -> impl FnOnce(std::io::Error) -> ScaffoldError {
        move |source| ScaffoldError::Io { during, source }
    }

    /// Follow-up line printed under the diagnostic, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            ScaffoldError::BaseClassMissing { base, concept } => Some(format!(
                "Create the base class first: create-class {concept} {base}"
            )),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidConceptName(err) => write!(f, "Invalid concept name: {err}"),
            ScaffoldError::InvalidClassName(err) => write!(f, "Invalid class name: {err}"),
            ScaffoldError::InvalidBaseClassName(err) => {
                write!(f, "Invalid base class name: {err}")
            }
            ScaffoldError::NotAConceptDirectory(_) => {
                write!(f, "Current directory doesn't appear to be a concept directory")
            }
            ScaffoldError::ConceptNotFound { name, path } => {
                write!(f, "Concept '{name}' doesn't exist at {}", path.display())
            }
            ScaffoldError::ConceptExists { name, path } => {
                write!(f, "Concept '{name}' already exists at {}", path.display())
            }
            ScaffoldError::ClassExists { class, concept } => {
                write!(f, "Class '{class}' already exists in concept '{concept}'")
            }
            ScaffoldError::BaseClassMissing { base, .. } => {
                write!(f, "Base class header '{base}.h' not found in concept directory")
            }
            ScaffoldError::Io { during, source } => write!(f, "Error {during}: {source}"),
        }
    }
}

impl std::fmt::Debug for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::InvalidConceptName(err)
            | ScaffoldError::InvalidClassName(err)
            | ScaffoldError::InvalidBaseClassName(err) => Some(err),
            ScaffoldError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
