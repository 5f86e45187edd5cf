use crate::areas::repository::Repository;
use crate::artifacts::graph::commit_graph::CommitGraphBuilder;
use crate::artifacts::graph::topo_sort;
use crate::artifacts::log::run_printer::RunPrinter;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;
use std::io::Write;

impl Repository {
    /// Print every commit reachable from a local branch, children first
    ///
    /// The command runs in three stages: walk parent links from the
    /// branch tips to build the graph, order it topologically with the
    /// hash tie-break, then render the listing with branch annotations
    /// and run markers. A repository without branches prints nothing.
    pub fn topo_order(&self) -> anyhow::Result<()> {
        let branches = self.refs().list_branches()?;
        let tips: BTreeSet<ObjectId> = branches.values().cloned().collect();

        let graph = CommitGraphBuilder::new(|oid: &ObjectId| {
            self.database().parse_object_as_commit(oid)
        })
        .build(tips)?;

        let sorted_commits = topo_sort::sort(&graph);

        let printer = RunPrinter::new(&graph, &branches);
        for line in printer.format(&sorted_commits) {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
