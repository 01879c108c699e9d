//! Command implementations for the `create-concept` and `create-class`
//! binaries.

use std::io::Write;
use std::process::ExitCode;

use crate::error::ScaffoldError;
use crate::report::Reporter;

/// Class scaffolding — `create-class <concept|.> <Class> [--base-class Base]`.
///
/// Writes `<Class>.h` and `<Class>.cpp` into an existing concept directory,
/// optionally inheriting from a class created earlier in the same concept.
pub mod create_class;

/// Concept scaffolding — `create-concept <name> [--description TEXT]`.
///
/// Creates `concepts/<name>/` with `main.cpp`, `CMakeLists.txt` and
/// `README.md`.
pub mod create_concept;

/// File templates for concepts and classes.
///
/// Pure functions from names to file contents, plus the naming helpers
/// (`header_guard`, `banner_name`, `title_case`) they share.
pub mod templates;

/// Turn a command result into the process exit code, reporting the error.
pub fn finish<T, O: Write, E: Write>(
    result: Result<T, ScaffoldError>,
    reporter: &mut Reporter<O, E>,
) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            reporter.failure(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
