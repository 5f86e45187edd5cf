use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Command for the binary, run inside `dir` with paging disabled so the
/// listing arrives on plain stdout
pub fn run_topolog_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("topolog").expect("Failed to find topolog binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run the listing in `dir` and return its stdout, asserting success
pub fn topolog_stdout(dir: &Path) -> String {
    let assert = run_topolog_command(dir, &[]).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout should be UTF-8")
}
