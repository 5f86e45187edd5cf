//! Deterministic topological ordering of the commit graph
//!
//! Commits are listed children before parents: a commit appears only
//! after every child that can reach it has appeared. The algorithm is
//! Kahn's, run against child edges instead of parent edges:
//!
//! 1. every node starts with a counter of its unprocessed children;
//! 2. nodes with no children (the branch tips nobody descends from) seed
//!    a FIFO queue, in ascending hexadecimal order;
//! 3. popping a node appends it to the result and decrements the counter
//!    of each of its parents, again visited in ascending hexadecimal
//!    order; a parent whose counter reaches zero joins the queue.
//!
//! Ties are always broken by the hash text (see [`hash_order`]), so the
//! resulting order is a pure function of the graph: same commits, same
//! edges, same listing, on every run and every machine.
//!
//! The graph is acyclic by construction (a commit's parents always exist
//! before it and hashes embed their parents' hashes), so no cycle check
//! is made here; the sorter simply never enqueues nodes a cycle would
//! strand.

use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};

/// Tie-break comparator used whenever several commits become ready at
/// once: ascending hexadecimal order of the hash text.
pub fn hash_order(a: &ObjectId, b: &ObjectId) -> Ordering {
    a.as_ref().cmp(b.as_ref())
}

/// Order all commits of `graph` children-first.
///
/// Returns every node exactly once. An empty graph yields an empty list.
pub fn sort(graph: &CommitGraph) -> Vec<ObjectId> {
    let mut remaining_children: HashMap<&ObjectId, usize> = graph
        .nodes()
        .map(|(oid, node)| (oid, node.children_len()))
        .collect();

    let mut seeds: Vec<&ObjectId> = graph
        .nodes()
        .filter(|(_, node)| node.children_len() == 0)
        .map(|(oid, _)| oid)
        .collect();
    seeds.sort_unstable_by(|a, b| hash_order(a, b));

    let mut queue: VecDeque<&ObjectId> = seeds.into();
    let mut sorted = Vec::with_capacity(graph.len());

    while let Some(oid) = queue.pop_front() {
        sorted.push(oid.clone());

        let Some(node) = graph.node(oid) else {
            continue;
        };
        for parent in node.parents() {
            if let Some(count) = remaining_children.get_mut(parent) {
                *count -= 1;
                if *count == 0 {
                    queue.push_back(parent);
                }
            }
        }
    }

    sorted
}
