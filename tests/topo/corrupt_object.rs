/// A branch pointing at an object that is not a commit.
///
/// Expected: the command fails and reports what it found instead.
use crate::common::command::{repository_dir, run_topolog_command};
use crate::common::repo::{init_repo, write_branch, write_object_raw};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn branch_pointing_at_a_blob_reports_a_malformed_object(repository_dir: TempDir) {
    let dir = repository_dir.path();
    init_repo(dir);

    let oid = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    write_object_raw(dir, oid, b"blob 6\0hello\n");
    write_branch(dir, "master", oid);

    run_topolog_command(dir, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed object"))
        .stderr(predicate::str::contains("expected a commit, found a blob"));
}
