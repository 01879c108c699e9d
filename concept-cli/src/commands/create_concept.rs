use std::io::Write;
use std::path::PathBuf;

use super::templates;
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::fs::Filesystem;
use crate::guard;
use crate::report::Reporter;
use crate::validation::Identifier;
use crate::BUILD_MARKER;

const DURING: &str = "creating concept";

/// Arguments of `create-concept`.
#[derive(Debug, Clone, Default)]
pub struct ConceptRequest {
    pub name: String,
    /// Empty when `--description` was not given.
    pub description: String,
}

impl ConceptRequest {
    pub fn new(name: impl Into<String>) -> Self {
        ConceptRequest {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// What a successful `create-concept` left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedConcept {
    pub dir: PathBuf,
    pub main_cpp: PathBuf,
    pub cmake_lists: PathBuf,
    pub readme: PathBuf,
}

/// Create `concepts/<name>/` with `main.cpp`, `CMakeLists.txt` and `README.md`.
///
/// Nothing is written until the name is valid and the directory is known to
/// be absent. A failed file write leaves the directory and any earlier files
/// in place.
pub fn run<O: Write, E: Write>(
    fs: &impl Filesystem,
    settings: &Settings,
    request: &ConceptRequest,
    reporter: &mut Reporter<O, E>,
) -> Result<CreatedConcept, ScaffoldError> {
    let name = Identifier::concept(&request.name).map_err(ScaffoldError::InvalidConceptName)?;

    let concepts_dir = settings.concepts_dir();
    let dir = concepts_dir.join(name.as_str());
    guard::check_concept(fs, &dir, &name)?;

    fs.create_dir_all(&concepts_dir)
        .map_err(ScaffoldError::io(DURING))?;
    fs.create_dir(&dir).map_err(ScaffoldError::io(DURING))?;
    tracing::debug!(dir = %dir.display(), "created concept directory");
    reporter.done(format!("Created {}/", settings.display_path(&dir).display()));

    let created = CreatedConcept {
        main_cpp: dir.join("main.cpp"),
        cmake_lists: dir.join(BUILD_MARKER),
        readme: dir.join("README.md"),
        dir,
    };

    let outputs = [
        (
            &created.main_cpp,
            templates::concept::main_cpp(name.as_str(), &request.description),
        ),
        (
            &created.cmake_lists,
            templates::concept::cmake_lists(name.as_str()),
        ),
        (
            &created.readme,
            templates::concept::readme(name.as_str(), &request.description),
        ),
    ];

    for (path, content) in outputs {
        fs.write_new(path, &content).map_err(ScaffoldError::io(DURING))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        reporter.done(format!("Generated {}", settings.display_path(path).display()));
    }

    reporter.finish(
        "Concept created successfully!",
        &[],
        &next_steps(name.as_str()),
    );

    Ok(created)
}

fn next_steps(name: &str) -> Vec<String> {
    vec![
        format!("cd concepts/{name}"),
        "Edit main.cpp and add your demonstration code".to_string(),
        format!("Create classes: create-class {name} <ClassName>"),
        format!("Build: cd ../../build && cmake .. && make {name}_demo"),
        format!("Run: ./concepts/{name}/{name}_demo"),
    ]
}
