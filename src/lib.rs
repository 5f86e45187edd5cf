//! Topological listing of Git commit histories
//!
//! `topolog` reads a Git repository directly from disk, reconstructs the
//! commit graph reachable from the local branches, and prints the commits
//! in a child-before-parent order, one per line. Commits that sit next to
//! each other in the listing without being related are separated by marker
//! blocks that name the hashes bridging the gap.
//!
//! The crate never invokes `git` and never writes to the repository: all
//! state is read from the `.git` directory (loose objects and branch refs).

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
