pub mod branch_name;

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Local branches keyed by name, each mapped to the hash its ref file
/// points at. Iterating visits names in lexicographic order, the same
/// order branch annotations appear in the listing.
pub type BranchMap = BTreeMap<BranchName, ObjectId>;
