//! Git data structures and algorithms
//!
//! This module contains the core types and algorithms of the listing:
//!
//! - `branch`: Branch names and the branch-to-tip map
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `graph`: Commit graph construction and topological ordering
//! - `log`: Rendering of the ordered listing
//! - `objects`: Git object types (hashes, headers, commits)

pub mod branch;
pub mod core;
pub mod graph;
pub mod log;
pub mod objects;
