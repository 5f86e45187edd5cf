//! Repository discovery and coordination
//!
//! A [`Repository`] bundles the object database and ref store of one
//! `.git` directory together with the writer the command output goes
//! to. Discovery mirrors what git itself does: starting from a
//! directory, walk up through the ancestors until one of them contains
//! a `.git` directory.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::errors::RepoError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path` (the directory containing
    /// `.git`), sending all command output to `writer`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Self {
        let git_path = path.join(".git");
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
        }
    }

    /// Find the repository root for `start_dir`
    ///
    /// Checks `start_dir` itself and then each ancestor for a `.git`
    /// directory. Fails with [`RepoError::RepositoryNotFound`] when the
    /// filesystem root is reached without a hit.
    pub fn discover_root(start_dir: &Path) -> anyhow::Result<Box<Path>> {
        let start_dir = start_dir
            .canonicalize()
            .with_context(|| format!("failed to resolve directory {start_dir:?}"))?;

        for dir in start_dir.ancestors() {
            if dir.join(".git").is_dir() {
                return Ok(dir.to_path_buf().into_boxed_path());
            }
        }

        Err(RepoError::RepositoryNotFound.into())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
