//! Commit graph construction
//!
//! The graph is built by walking parent links breadth-first from the set
//! of branch tips. Every commit reachable from a tip becomes a node, and
//! each `parent` header becomes one parent edge and one mirrored child
//! edge, so the two edge sets of any pair of related nodes always agree.
//!
//! Two guarantees hold for the walk itself:
//!
//! - each commit is loaded from the object database exactly once, however
//!   many tips can reach it;
//! - a parent edge is recorded even when the parent has not been loaded
//!   yet, so interrupting the enumeration early could never drop edges.
//!
//! The loader is injected as a closure, which keeps the walk independent
//! of where commits come from; tests feed it from an in-memory store.
//!
//! ## Debug Logging
//!
//! Build with the `debug_walk` feature to trace the walk on stderr:
//! `cargo build --features debug_walk`

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Macro for debug logging that is enabled with the debug_walk feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_walk")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// A single commit in the graph, reduced to its neighbors.
///
/// Both edge sets are ordered by the hash text, so iterating them yields
/// ascending hexadecimal order. The sorter and the printer lean on that
/// order whenever several hashes are emitted together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitNode {
    parents: BTreeSet<ObjectId>,
    children: BTreeSet<ObjectId>,
}

impl CommitNode {
    /// Parent hashes in ascending hexadecimal order
    pub fn parents(&self) -> impl Iterator<Item = &ObjectId> {
        self.parents.iter()
    }

    /// Child hashes in ascending hexadecimal order
    pub fn children(&self) -> impl Iterator<Item = &ObjectId> {
        self.children.iter()
    }

    pub fn has_parent(&self, oid: &ObjectId) -> bool {
        self.parents.contains(oid)
    }

    pub fn parents_len(&self) -> usize {
        self.parents.len()
    }

    pub fn children_len(&self) -> usize {
        self.children.len()
    }
}

/// Arena of commit nodes keyed by hash.
///
/// Nodes hold hashes rather than references to each other, so the graph
/// is plain owned data with no interior pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    nodes: HashMap<ObjectId, CommitNode>,
}

impl CommitGraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, oid: &ObjectId) -> Option<&CommitNode> {
        self.nodes.get(oid)
    }

    /// All nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = (&ObjectId, &CommitNode)> {
        self.nodes.iter()
    }

    fn ensure_node(&mut self, oid: &ObjectId) -> &mut CommitNode {
        self.nodes.entry(oid.clone()).or_default()
    }

    /// Record one parent link, mirrored on both endpoints
    fn link(&mut self, parent: &ObjectId, child: &ObjectId) {
        self.ensure_node(child).parents.insert(parent.clone());
        self.ensure_node(parent).children.insert(child.clone());
    }
}

/// Builds a [`CommitGraph`] by traversing parent links from a set of tips
///
/// The loader function resolves a hash to its parsed commit; any error it
/// returns aborts the build and surfaces unchanged.
pub struct CommitGraphBuilder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> CommitGraphBuilder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Walk parent links breadth-first from `tips` and return the graph
    ///
    /// Tips pointing into each other's histories and duplicate tips are
    /// fine; an empty tip set yields an empty graph.
    pub fn build(&self, tips: impl IntoIterator<Item = ObjectId>) -> anyhow::Result<CommitGraph> {
        let mut graph = CommitGraph::default();
        let mut visited = HashSet::new();
        let mut queue: VecDeque<ObjectId> = tips.into_iter().collect();

        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            graph.ensure_node(&oid);
            let commit = (self.commit_loader)(&oid)?;
            debug_log!("visited {} ({} parents)", oid, commit.parents().len());

            for parent in commit.parents() {
                graph.link(parent, &oid);
                if !visited.contains(parent) {
                    queue.push_back(parent.clone());
                }
            }
        }

        Ok(graph)
    }
}
