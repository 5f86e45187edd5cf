//! Command implementations
//!
//! Commands are methods on [`Repository`](crate::areas::repository::Repository)
//! so they share its object database, refs and output writer:
//!
//! - `topo_order`: The topologically ordered commit listing

pub mod topo_order;
