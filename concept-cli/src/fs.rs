//! Filesystem port used by the command pipelines.
//!
//! [`LocalFs`] talks to the real disk. [`MemoryFs`] keeps a virtual tree in
//! memory so pipelines can be exercised, including failed writes, without
//! touching disk.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The primitives a scaffolding command needs from a filesystem.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create exactly `path`. Fails if it exists or its parent is missing.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Write a new file. Fails with `AlreadyExists` instead of overwriting.
    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(contents.as_bytes())
    }
}

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
}

/// In-memory filesystem.
///
/// Paths are stored exactly as given, so callers should use absolute paths
/// consistently. The root (`/`) always exists.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    denied: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all its parents.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.to_string()));
        self
    }

    /// Make every later write or directory creation at `path` fail with
    /// `PermissionDenied`.
    pub fn deny(&self, path: impl AsRef<Path>) {
        self.denied.borrow_mut().insert(path.as_ref().to_path_buf());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Direct children of `dir`, sorted.
    pub fn list(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.nodes
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || is_root(ancestor) {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.denied.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        match path.parent() {
            Some(parent) if !self.is_dir(parent) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", parent.display()),
            )),
            _ => Ok(()),
        }
    }
}

fn is_root(path: &Path) -> bool {
    path.parent().is_none() && path.has_root()
}

fn already_exists(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("already exists: {}", path.display()),
    )
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        is_root(path) || self.nodes.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        is_root(path) || matches!(self.nodes.borrow().get(path), Some(Node::Dir))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        for ancestor in path.ancestors() {
            if self.denied.borrow().contains(ancestor) && !self.exists(ancestor) {
                return self.check_writable(ancestor);
            }
            if let Some(Node::File(_)) = self.nodes.borrow().get(ancestor) {
                return Err(already_exists(ancestor));
            }
        }
        self.insert_dirs(path);
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        if self.exists(path) {
            return Err(already_exists(path));
        }
        self.check_writable(path)?;
        self.nodes.borrow_mut().insert(path.to_path_buf(), Node::Dir);
        Ok(())
    }

    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.exists(path) {
            return Err(already_exists(path));
        }
        self.check_writable(path)?;
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.to_string()));
        Ok(())
    }
}
