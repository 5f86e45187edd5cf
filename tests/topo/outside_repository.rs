/// Running the command from a directory that is not inside a repository.
///
/// Expected: a friendly message on stdout and a zero exit status, the
/// same way git itself reports the situation without a stack trace.
use crate::common::command::{repository_dir, run_topolog_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn directory_without_a_git_dir_reports_not_a_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_topolog_command(dir, &[])
        .assert()
        .success()
        .stdout("Not inside a Git repository\n");
}
