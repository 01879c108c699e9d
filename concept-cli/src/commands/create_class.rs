use std::io::Write;

use super::templates;
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::fs::Filesystem;
use crate::guard::{self, ClassFiles};
use crate::locate::ConceptLocator;
use crate::report::Reporter;
use crate::validation::Identifier;

const DURING: &str = "creating class files";

/// Arguments of `create-class`.
#[derive(Debug, Clone)]
pub struct ClassRequest {
    pub concept: ConceptLocator,
    pub class_name: String,
    pub base_class: Option<String>,
}

impl ClassRequest {
    pub fn new(concept: impl Into<ConceptLocator>, class_name: impl Into<String>) -> Self {
        ClassRequest {
            concept: concept.into(),
            class_name: class_name.into(),
            base_class: None,
        }
    }

    pub fn with_base(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }
}

/// Create `<Class>.h` and `<Class>.cpp` in the concept directory.
///
/// The concept directory is resolved first, then the class and base names
/// are validated, then the guard checks run. Files are only written once all
/// of those pass.
pub fn run<O: Write, E: Write>(
    fs: &impl Filesystem,
    settings: &Settings,
    request: &ClassRequest,
    reporter: &mut Reporter<O, E>,
) -> Result<ClassFiles, ScaffoldError> {
    let concept_dir = request.concept.resolve(fs, settings)?;

    let class = Identifier::class(&request.class_name).map_err(ScaffoldError::InvalidClassName)?;
    let base = request
        .base_class
        .as_deref()
        .map(Identifier::class)
        .transpose()
        .map_err(ScaffoldError::InvalidBaseClassName)?;

    let files = ClassFiles::new(&concept_dir, &class);
    guard::check_class(
        fs,
        &concept_dir,
        request.concept.as_arg(),
        &files,
        &class,
        base.as_ref(),
    )?;

    let base_name = base.as_ref().map(Identifier::as_str);

    let header = templates::class::header(class.as_str(), base_name);
    fs.write_new(&files.header, &header)
        .map_err(ScaffoldError::io(DURING))?;
    tracing::debug!(path = %files.header.display(), "wrote header");
    match base_name {
        Some(base) => reporter.done(format!("Created {class}.h (inherits from {base})")),
        None => reporter.done(format!("Created {class}.h")),
    }

    let implementation = templates::class::implementation(class.as_str(), base_name);
    fs.write_new(&files.implementation, &implementation)
        .map_err(ScaffoldError::io(DURING))?;
    tracing::debug!(path = %files.implementation.display(), "wrote implementation");
    reporter.done(format!("Created {class}.cpp"));

    reporter.finish(
        "Class files created successfully!",
        &["The files are automatically included in the build (no CMake changes needed).".to_string()],
        &next_steps(class.as_str()),
    );

    Ok(files)
}

fn next_steps(class: &str) -> Vec<String> {
    vec![
        format!("Edit {class}.h to add your class interface"),
        format!("Edit {class}.cpp to implement your methods"),
        format!("Include in main.cpp: #include \"{class}.h\""),
        "Rebuild: cd build && cmake .. && make".to_string(),
    ]
}
