use std::process::Command;

/// Exposes the short commit hash as `RESULT_CROP_COMMIT` for `--version`.
/// Builds outside a git checkout leave it unset.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let commit = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok());

    if let Some(commit) = commit {
        println!("cargo:rustc-env=RESULT_CROP_COMMIT={}", commit.trim());
    }
}
