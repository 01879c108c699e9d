use concept_cli::commands::create_class::{self, ClassRequest};
use concept_cli::commands::create_concept::{self, ConceptRequest};
use concept_cli::config::Settings;
use concept_cli::fs::{Filesystem, LocalFs, MemoryFs};
use concept_cli::report::Reporter;
use concept_cli::ScaffoldError;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── CWD Guard ───────────────────────────────────────────────────────

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Project with `concepts/inheritance/` created the usual way.
fn project() -> (TempDir, Settings) {
    let tmp = TempDir::new().unwrap();
    let settings = Settings::new(tmp.path(), tmp.path());
    create_concept::run(
        &LocalFs,
        &settings,
        &ConceptRequest::new("inheritance"),
        &mut Reporter::buffered(),
    )
    .unwrap();
    (tmp, settings)
}

fn concept_dir(tmp: &TempDir) -> PathBuf {
    tmp.path().join("concepts/inheritance")
}

// ════════════════════════════════════════════════════════════════════
// Plain classes
// ════════════════════════════════════════════════════════════════════

#[test]
fn create_class_writes_pair() {
    let (tmp, settings) = project();
    let mut reporter = Reporter::buffered();

    let files = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "Animal"),
        &mut reporter,
    )
    .unwrap();

    assert_eq!(files.header, concept_dir(&tmp).join("Animal.h"));
    assert_eq!(files.implementation, concept_dir(&tmp).join("Animal.cpp"));

    let header = fs::read_to_string(&files.header).unwrap();
    assert!(header.contains("#ifndef ANIMAL_H"));
    assert!(header.contains("    ~Animal();"));
    assert!(!header.contains("virtual"));

    let implementation = fs::read_to_string(&files.implementation).unwrap();
    assert!(implementation.contains("\"Animal constructor called\""));

    let out = reporter.stdout_text();
    assert!(out.contains("Created Animal.h\n"));
    assert!(out.contains("Created Animal.cpp"));
    assert!(out.contains("Class files created successfully!"));
    assert!(out.contains("no CMake changes needed"));
    assert!(out.contains("Include in main.cpp: #include \"Animal.h\""));
}

#[test]
fn create_class_twice_fails_and_keeps_files() {
    let (tmp, settings) = project();
    let request = ClassRequest::new("inheritance", "Animal");

    create_class::run(&LocalFs, &settings, &request, &mut Reporter::buffered()).unwrap();
    let header_path = concept_dir(&tmp).join("Animal.h");
    fs::write(&header_path, "// edited by hand\n").unwrap();

    let err = create_class::run(&LocalFs, &settings, &request, &mut Reporter::buffered())
        .unwrap_err();

    assert_eq!(err.to_string(), "Class 'Animal' already exists in concept 'inheritance'");
    assert_eq!(fs::read_to_string(&header_path).unwrap(), "// edited by hand\n");
}

#[test]
fn create_class_missing_concept() {
    let (_tmp, settings) = project();

    let err = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("polymorphism", "Shape"),
        &mut Reporter::buffered(),
    )
    .unwrap_err();

    assert!(matches!(err, ScaffoldError::ConceptNotFound { .. }));
    assert!(err.to_string().starts_with("Concept 'polymorphism' doesn't exist at "));
}

#[test]
fn create_class_invalid_name() {
    let (tmp, settings) = project();

    let err = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "1Animal"),
        &mut Reporter::buffered(),
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("Invalid class name: "));
    assert!(!concept_dir(&tmp).join("1Animal.h").exists());
}

#[test]
fn create_class_leading_underscore_allowed() {
    let (tmp, settings) = project();

    create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "_Base"),
        &mut Reporter::buffered(),
    )
    .unwrap();

    let header = fs::read_to_string(concept_dir(&tmp).join("_Base.h")).unwrap();
    assert!(header.contains("#define _BASE_H"));
}

// ════════════════════════════════════════════════════════════════════
// Inheritance
// ════════════════════════════════════════════════════════════════════

#[test]
fn create_derived_class() {
    let (tmp, settings) = project();
    create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "Animal"),
        &mut Reporter::buffered(),
    )
    .unwrap();
    let mut reporter = Reporter::buffered();

    create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "Dog").with_base("Animal"),
        &mut reporter,
    )
    .unwrap();

    let header = fs::read_to_string(concept_dir(&tmp).join("Dog.h")).unwrap();
    assert!(header.contains("#include \"Animal.h\""));
    assert!(header.contains("class Dog : public Animal"));
    assert!(header.contains("virtual ~Dog();"));

    let implementation = fs::read_to_string(concept_dir(&tmp).join("Dog.cpp")).unwrap();
    assert!(implementation.contains("Dog::Dog()\n    : Animal() {"));

    assert!(reporter.stdout_text().contains("Created Dog.h (inherits from Animal)"));
}

#[test]
fn create_derived_class_without_base_header() {
    let (tmp, settings) = project();

    let err = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "Dog").with_base("Animal"),
        &mut Reporter::buffered(),
    )
    .unwrap_err();

    assert!(matches!(err, ScaffoldError::BaseClassMissing { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.hint().as_deref(),
        Some("Create the base class first: create-class inheritance Animal")
    );
    assert!(!concept_dir(&tmp).join("Dog.h").exists());
    assert!(!concept_dir(&tmp).join("Dog.cpp").exists());
}

#[test]
fn create_derived_class_invalid_base_name() {
    let (_tmp, settings) = project();

    let err = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new("inheritance", "Dog").with_base("Animal-Base"),
        &mut Reporter::buffered(),
    )
    .unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidBaseClassName(_)));
    assert!(err.to_string().starts_with("Invalid base class name: "));
}

// ════════════════════════════════════════════════════════════════════
// `.` as concept
// ════════════════════════════════════════════════════════════════════

#[test]
#[serial]
fn create_class_from_inside_concept_dir() {
    let (tmp, _) = project();
    let _cwd = CwdGuard::new(&concept_dir(&tmp));
    let settings = Settings::from_env(&LocalFs, None).unwrap();

    create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new(".", "Cat"),
        &mut Reporter::buffered(),
    )
    .unwrap();

    assert!(Path::new("Cat.h").exists());
    assert!(Path::new("Cat.cpp").exists());
}

#[test]
#[serial]
fn create_class_dot_outside_concept_dir() {
    let (tmp, _) = project();
    let _cwd = CwdGuard::new(tmp.path());
    let settings = Settings::from_env(&LocalFs, None).unwrap();

    let err = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new(".", "Cat"),
        &mut Reporter::buffered(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Current directory doesn't appear to be a concept directory"
    );
    assert!(!tmp.path().join("Cat.h").exists());
}

#[test]
#[serial]
fn dot_base_hint_uses_dot() {
    let (tmp, _) = project();
    let _cwd = CwdGuard::new(&concept_dir(&tmp));
    let settings = Settings::from_env(&LocalFs, None).unwrap();

    let err = create_class::run(
        &LocalFs,
        &settings,
        &ClassRequest::new(".", "Cat").with_base("Animal"),
        &mut Reporter::buffered(),
    )
    .unwrap_err();

    assert_eq!(
        err.hint().as_deref(),
        Some("Create the base class first: create-class . Animal")
    );
}

// ════════════════════════════════════════════════════════════════════
// Virtual filesystem
// ════════════════════════════════════════════════════════════════════

#[test]
fn create_class_implementation_write_failure() {
    let mem = MemoryFs::new().with_file("/course/concepts/inheritance/CMakeLists.txt", "");
    mem.deny("/course/concepts/inheritance/Dog.cpp");
    let settings = Settings::new("/course", "/course");
    let mut reporter = Reporter::buffered();

    let err = create_class::run(
        &mem,
        &settings,
        &ClassRequest::new("inheritance", "Dog"),
        &mut reporter,
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("Error creating class files: "));
    assert!(mem.exists(Path::new("/course/concepts/inheritance/Dog.h")));
    assert!(!mem.exists(Path::new("/course/concepts/inheritance/Dog.cpp")));
    assert!(reporter.stdout_text().contains("Created Dog.h"));
}

#[test]
fn create_class_in_memory_matches_templates() {
    let mem = MemoryFs::new()
        .with_file("/course/concepts/inheritance/CMakeLists.txt", "")
        .with_file("/course/concepts/inheritance/Animal.h", "");
    let settings = Settings::new("/course", "/elsewhere");

    create_class::run(
        &mem,
        &settings,
        &ClassRequest::new("inheritance", "Dog").with_base("Animal"),
        &mut Reporter::buffered(),
    )
    .unwrap();

    assert_eq!(
        mem.read("/course/concepts/inheritance/Dog.h").unwrap(),
        concept_cli::commands::templates::class::header("Dog", Some("Animal"))
    );
    assert_eq!(
        mem.read("/course/concepts/inheritance/Dog.cpp").unwrap(),
        concept_cli::commands::templates::class::implementation("Dog", Some("Animal"))
    );
}
