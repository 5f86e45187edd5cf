//! Rendering of the topologically ordered listing
//!
//! The listing prints one commit hash per line, oldest last. Where two
//! neighboring lines are a real child/parent pair the listing just runs
//! on; where the order jumps to an unrelated commit, a marker block is
//! inserted so the reader can stitch the runs back together:
//!
//! ```text
//! <parents of the commit above, space separated>=
//!
//! =<children of the commit below, space separated>
//! ```
//!
//! A commit at the tip of a branch carries the branch names after its
//! hash, sorted and space separated.

use crate::artifacts::branch::BranchMap;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::graph::commit_graph::{CommitGraph, CommitNode};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::HashMap;

/// Marks the boundary of a run: appended to the parents line of the run
/// that ends, prepended to the children line of the run that begins.
const RUN_BREAK_MARKER: char = '=';

/// Renders an ordered list of commits as output lines.
///
/// The printer only formats; it trusts the order it is given and never
/// reorders commits itself.
#[derive(new)]
pub struct RunPrinter<'a> {
    graph: &'a CommitGraph,
    branches: &'a BranchMap,
}

impl RunPrinter<'_> {
    /// Render `sorted_commits` as the final listing, marker blocks
    /// included. An empty order renders to no lines at all.
    pub fn format(&self, sorted_commits: &[ObjectId]) -> Vec<String> {
        let tip_branches = self.tip_branches();

        let mut lines = Vec::new();
        let mut previous: Option<&CommitNode> = None;

        for oid in sorted_commits {
            let Some(node) = self.graph.node(oid) else {
                continue;
            };

            if let Some(previous_node) = previous {
                // The listing only runs on while each line is a parent of
                // the one above it; anything else ends the current run
                if !previous_node.has_parent(oid) {
                    lines.push(format!(
                        "{}{RUN_BREAK_MARKER}",
                        join_hashes(previous_node.parents())
                    ));
                    lines.push(String::new());
                    lines.push(format!("{RUN_BREAK_MARKER}{}", join_hashes(node.children())));
                }
            }

            lines.push(self.commit_line(oid, &tip_branches));
            previous = Some(node);
        }

        lines
    }

    /// Reverse view of the branch map: tip hash to branch names, names
    /// kept in the lexicographic order the map iterates in
    fn tip_branches(&self) -> HashMap<&ObjectId, Vec<&BranchName>> {
        self.branches
            .iter()
            .fold(HashMap::new(), |mut acc, (name, tip)| {
                acc.entry(tip).or_default().push(name);
                acc
            })
    }

    fn commit_line(
        &self,
        oid: &ObjectId,
        tip_branches: &HashMap<&ObjectId, Vec<&BranchName>>,
    ) -> String {
        let mut line = oid.to_string();

        if let Some(names) = tip_branches.get(oid) {
            for name in names {
                line.push(' ');
                line.push_str(name.as_ref());
            }
        }

        line
    }
}

fn join_hashes<'a>(hashes: impl Iterator<Item = &'a ObjectId>) -> String {
    hashes
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
