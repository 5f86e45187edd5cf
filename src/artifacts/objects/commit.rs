//! Commit object parsing
//!
//! A commit body is a list of ASCII header lines (`tree`, `parent`,
//! `author`, `committer`, ...) terminated by an empty line, followed by
//! the free-form commit message. The graph walk only needs the parent
//! links, so everything else is skipped; scanning still stops at the
//! empty line so a message quoting a `parent` line cannot leak into the
//! graph.
//!
//! ## Format
//!
//! On disk (after the `commit <size>\0` prefix):
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::io::BufRead;

const PARENT_HEADER: &str = "parent ";

/// A commit reduced to what the traversal needs: its parent links.
///
/// Parents keep the order of their `parent` header lines; a root commit
/// has none.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    parents: Vec<ObjectId>,
}

impl Commit {
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Parse a commit body, with the `<type> <size>\0` prefix already
    /// consumed.
    pub fn deserialize(mut data_reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = Vec::new();
        data_reader.read_to_end(&mut content)?;
        let content =
            String::from_utf8(content).map_err(|_| anyhow::anyhow!("commit is not valid UTF-8"))?;

        let mut parents = Vec::new();
        for line in content.lines() {
            if line.is_empty() {
                break;
            }
            if let Some(hash) = line.strip_prefix(PARENT_HEADER) {
                let parent = ObjectId::try_parse(hash.to_string())
                    .map_err(|error| anyhow::anyhow!("invalid parent header: {error}"))?;
                parents.push(parent);
            }
        }

        Ok(Self::new(parents))
    }
}
