use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CONCEPT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").expect("valid concept name pattern"));

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid class name pattern"));

/// Which naming grammar an identifier is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Concept directory names: a letter, then letters, digits or underscores.
    Concept,
    /// C++ class names: a letter or underscore, then letters, digits or underscores.
    Class,
}

impl IdentifierKind {
    fn pattern(self) -> &'static Regex {
        match self {
            IdentifierKind::Concept => &*CONCEPT_NAME,
            IdentifierKind::Class => &*CLASS_NAME,
        }
    }

    /// Human-readable rule shown when a name is rejected.
    pub fn rule(self) -> &'static str {
        match self {
            IdentifierKind::Concept => {
                "Concept name must start with a letter and contain only letters, numbers, and underscores"
            }
            IdentifierKind::Class => {
                "Class name must start with a letter or underscore and contain only letters, numbers, and underscores"
            }
        }
    }
}

/// A name that passed validation for its [`IdentifierKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Validate `candidate` against the grammar for `kind`.
    pub fn parse(kind: IdentifierKind, candidate: &str) -> Result<Self, InvalidIdentifier> {
        if kind.pattern().is_match(candidate) {
            Ok(Identifier {
                name: candidate.to_string(),
            })
        } else {
            Err(InvalidIdentifier {
                kind,
                candidate: candidate.to_string(),
            })
        }
    }

    pub fn concept(candidate: &str) -> Result<Self, InvalidIdentifier> {
        Self::parse(IdentifierKind::Concept, candidate)
    }

    pub fn class(candidate: &str) -> Result<Self, InvalidIdentifier> {
        Self::parse(IdentifierKind::Class, candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Rejected name together with the grammar it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifier {
    pub kind: IdentifierKind,
    pub candidate: String,
}

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.rule())
    }
}

impl std::error::Error for InvalidIdentifier {}
