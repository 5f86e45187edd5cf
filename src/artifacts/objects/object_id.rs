//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings naming entries of the
//! object database. They appear in branch ref files and in the `parent`
//! headers of commit objects.
//!
//! ## Storage
//!
//! Loose objects live at `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// A validated, lowercase 40-character hexadecimal string. The derived
/// `Ord` compares the hex text byte by byte, so sorting object IDs yields
/// ascending hexadecimal order; the topological listing uses exactly this
/// order whenever it has to break a tie between commits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Accepts exactly 40 hexadecimal characters; uppercase digits are
    /// folded to lowercase so equal hashes always compare equal.
    pub fn try_parse(mut id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!(
                "invalid object ID length {}: {id:?}",
                id.len()
            ));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("invalid object ID characters: {id:?}"));
        }

        id.make_ascii_lowercase();
        Ok(Self(id))
    }

    /// Convert to the file system path of the loose object
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
