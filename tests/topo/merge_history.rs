/// A diamond: two branches off one root, merged back together.
///
/// History:
/// ```
///       A
///      / \
///     B   C
///      \ /
///       M (merge)   <- master
/// ```
///
/// Expected order: M first, then B and C in ascending hash order, then
/// A. B and C are siblings rather than a child/parent pair, so a marker
/// block separates them: the parents of the first sibling (A), then the
/// children of the second (M).
use crate::common::command::{repository_dir, topolog_stdout};
use crate::common::repo::{init_repo, write_branch, write_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_lists_both_parents_with_a_marker_between_siblings(repository_dir: TempDir) {
    let dir = repository_dir.path();
    init_repo(dir);

    let a = write_commit(dir, &[], "A");
    let b = write_commit(dir, &[&a], "B");
    let c = write_commit(dir, &[&a], "C");
    let m = write_commit(dir, &[&b, &c], "M");
    write_branch(dir, "master", &m);

    // The sibling visited first is decided by the hash tie-break
    let (first, second) = if b < c { (&b, &c) } else { (&c, &b) };

    assert_eq!(
        topolog_stdout(dir),
        format!("{m} master\n{first}\n{a}=\n\n={m}\n{second}\n{a}\n")
    );
}
