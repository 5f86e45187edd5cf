//! Git references (local branches)
//!
//! References are human-readable names pointing to commits, stored as
//! text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references
//!
//! Only `refs/heads/*` is consulted here: the listing annotates commits
//! with local branch names and walks the graph from their tips, so HEAD
//! and tags never enter the picture. A branch name is the path of its
//! ref file relative to `refs/heads`, which is how nested names such as
//! `feature/login` arise.

use crate::artifacts::branch::BranchMap;
use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Read-only view of the references in a repository
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the refs directory (typically `.git`)
    path: Box<Path>,
}

/// Internal representation of a reference value
///
/// Can be either a symbolic reference or a direct object ID.
#[derive(Debug, Clone)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef { sym_ref_name: SymRefName },
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {path:?}"))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            let oid = ObjectId::try_parse(content.to_string()).with_context(|| {
                format!("ref file at {path:?} holds neither a hash nor a symref")
            })?;
            Ok(Some(SymRefOrOid::Oid(oid)))
        }
    }
}

impl Refs {
    /// Enumerate all local branches with the hashes they point at
    ///
    /// Walks `refs/heads` recursively, so nested branch files become
    /// names with slashes. Symbolic refs are followed to their final
    /// hash; refs that resolve to nothing (missing or empty files) are
    /// left out. A repository without any branch yields an empty map.
    pub fn list_branches(&self) -> anyhow::Result<BranchMap> {
        let heads_path = self.heads_path();
        let mut branches = BranchMap::new();

        if !heads_path.exists() {
            return Ok(branches);
        }

        for entry in WalkDir::new(heads_path.as_ref()) {
            let entry = entry.context("failed to walk the refs/heads directory")?;
            if !entry.path().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(heads_path.as_ref())?;
            let name = BranchName::new(relative_path.to_string_lossy().to_string());

            if let Some(oid) = self.read_symref(entry.path())? {
                branches.insert(name, oid);
            }
        }

        Ok(branches)
    }

    /// Read a reference, following symbolic indirection
    ///
    /// Recursively follows symbolic references until finding an OID.
    fn read_symref(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        let ref_content = SymRefOrOid::read_symref_or_oid(path)?;

        match ref_content {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                self.read_symref(self.path.join(sym_ref_name.as_ref_path()).as_path())
            }
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
