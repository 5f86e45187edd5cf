/// Repeated runs over a history with merges and disjoint parts.
///
/// History:
/// ```
///   A---B---M   <- master
///    \     /
///     C---+       <- dev
///
///   X             <- beta
/// ```
///
/// Expected: byte-identical output on every invocation, regardless of
/// hash map iteration order inside each process.
use crate::common::command::{repository_dir, topolog_stdout};
use crate::common::repo::{init_repo, write_branch, write_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn repeated_invocations_print_identical_bytes(repository_dir: TempDir) {
    let dir = repository_dir.path();
    init_repo(dir);

    let a = write_commit(dir, &[], "A");
    let b = write_commit(dir, &[&a], "B");
    let c = write_commit(dir, &[&a], "C");
    let m = write_commit(dir, &[&b, &c], "M");
    let x = write_commit(dir, &[], "X");
    write_branch(dir, "master", &m);
    write_branch(dir, "dev", &c);
    write_branch(dir, "beta", &x);

    let first_run = topolog_stdout(dir);
    let second_run = topolog_stdout(dir);

    assert!(!first_run.is_empty());
    assert_eq!(first_run, second_run);
}
