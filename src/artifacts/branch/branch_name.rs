//! Branch and symbolic ref names
//!
//! A branch name mirrors the path of its ref file relative to
//! `.git/refs/heads`, so a file at `refs/heads/feature/login` names the
//! branch `feature/login`.

use derive_new::new;

/// Path of a symbolic ref target, relative to the `.git` directory
/// (e.g. `refs/heads/master`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

/// Name of a local branch, as spelled under `.git/refs/heads`.
///
/// The derived `Ord` is plain lexicographic order on the name, which is
/// also the order branch annotations are printed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct BranchName(String);

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
