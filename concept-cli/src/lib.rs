//! # concept-cli
//!
//! Scaffolding tools for a C++ teaching project organized as one directory
//! per object-oriented-programming concept.
//!
//! This crate provides two binaries:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `create-concept <name> [--description TEXT]` | Create `concepts/<name>/` with `main.cpp`, `CMakeLists.txt` and `README.md` |
//! | `create-class <concept\|.> <Class> [--base-class Base]` | Create `<Class>.h` / `<Class>.cpp` inside a concept directory |
//!
//! ## Architecture
//!
//! Both commands run the same linear pipeline:
//!
//! - [`locate`] — resolve the concept directory (`.` or a concept name)
//! - [`validation`] — check concept and class names against their grammar
//! - [`guard`] — refuse to overwrite or to inherit from a missing base class
//! - [`commands::templates`] — render file contents
//! - [`fs`] / [`report`] — write files and print status lines
//!
//! The pipelines themselves live in [`commands::create_concept`] and
//! [`commands::create_class`]. Filesystem access goes through the
//! [`fs::Filesystem`] trait so tests can run against [`fs::MemoryFs`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod guard;
pub mod locate;
pub mod logging;
pub mod report;
pub mod validation;

pub use error::ScaffoldError;

/// Name of the directory holding one subdirectory per concept.
pub const CONCEPTS_DIR: &str = "concepts";

/// Build-configuration file present in every concept directory.
pub const BUILD_MARKER: &str = "CMakeLists.txt";
