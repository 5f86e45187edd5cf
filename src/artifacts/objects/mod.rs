//! Git object types and parsing
//!
//! Git stores all content as objects identified by SHA-1 hashes, framed on
//! disk as `<type> <size>\0<content>`. Only commits are ever deserialized
//! here; blob and tree bodies are never needed for the topological listing,
//! so their kinds exist purely to be recognized (and rejected) when a ref
//! points at one.

pub mod commit;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
