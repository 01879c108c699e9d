//! Command-line arguments of both binaries.

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::commands::create_class::ClassRequest;
use crate::commands::create_concept::ConceptRequest;
use crate::locate::ConceptLocator;

/// Flags shared by `create-concept` and `create-class`.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Project root containing `concepts/` (discovered from the working directory by default)
    #[arg(long, env = crate::config::PROJECT_ROOT_ENV, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "create-concept",
    version,
    about = "Create a new OOP concept directory with template files",
    after_help = "Examples:
  create-concept inheritance
  create-concept polymorphism --description \"Runtime polymorphism with virtual functions\"
  create-concept operator_overloading --description \"Custom operator implementations\""
)]
pub struct CreateConceptArgs {
    /// Name of the concept (e.g. inheritance, polymorphism)
    pub concept_name: String,

    /// Brief description of the concept
    #[arg(long, default_value = "")]
    pub description: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CreateConceptArgs {
    pub fn request(&self) -> ConceptRequest {
        ConceptRequest::new(&self.concept_name).with_description(&self.description)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "create-class",
    version,
    about = "Create a class/header pair within a concept directory",
    after_help = "Examples:
  # Create a base class
  create-class inheritance Animal

  # Create a derived class
  create-class inheritance Dog --base-class Animal

  # Create from within a concept directory
  cd concepts/inheritance
  create-class . Cat --base-class Animal"
)]
pub struct CreateClassArgs {
    /// Name of the concept (or "." if in concept directory)
    pub concept_name: String,

    /// Name of the class to create (e.g. Animal, Dog)
    pub class_name: String,

    /// Name of the base class for inheritance
    #[arg(long, value_name = "NAME")]
    pub base_class: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CreateClassArgs {
    pub fn request(&self) -> ClassRequest {
        ClassRequest {
            concept: ConceptLocator::from_arg(&self.concept_name),
            class_name: self.class_name.clone(),
            base_class: self.base_class.clone(),
        }
    }
}
