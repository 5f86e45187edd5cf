//! Commit graph construction and ordering
//!
//! - `commit_graph`: Arena of commit nodes with mirrored parent/child
//!   edges, built breadth-first from the branch tips
//! - `topo_sort`: Children-first ordering of the graph with a
//!   deterministic hash tie-break

pub mod commit_graph;
pub mod topo_sort;
