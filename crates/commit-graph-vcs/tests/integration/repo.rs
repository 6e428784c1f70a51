// Copyright 2026 Oxide Computer Company

//! Repository setup helpers.

use anyhow::{Result, bail};
use camino::Utf8Path;
use camino_tempfile::Utf8TempDir;
use std::{fs, process::Command};

/// Returns a `Command` for git, respecting the `$GIT` environment variable.
pub fn git_command() -> Command {
    let bin = std::env::var("GIT").unwrap_or_else(|_| "git".to_string());
    Command::new(bin)
}

/// Runs git in `repo_root` and returns its trimmed stdout.
pub fn git(repo_root: &Utf8Path, args: &[&str]) -> Result<String> {
    let output = git_command().args(args).current_dir(repo_root).output()?;
    if !output.status.success() {
        bail!(
            "git {} failed ({}): {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim(),
        );
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Initializes a git repository and configures the user.
fn init_git_repo(repo_root: &Utf8Path) -> Result<()> {
    git(repo_root, &["init"])?;
    git(repo_root, &["config", "user.email", "test@example.com"])?;
    git(repo_root, &["config", "user.name", "Test User"])?;
    git(repo_root, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// The commit date of the first commit in each repository.
pub const BASE_TIMESTAMP: u64 = 1_700_000_000;

/// Formats a date for `GIT_AUTHOR_DATE` and `GIT_COMMITTER_DATE`.
fn git_date(timestamp: u64) -> String {
    format!("@{timestamp} +0000")
}

/// Writes a file and commits it with a fixed date, so that
/// `--date-order` is deterministic. Returns the commit hash.
fn commit_file(
    repo_root: &Utf8Path,
    file: &str,
    message: &str,
    timestamp: u64,
) -> Result<String> {
    fs::write(repo_root.join(file), message)?;
    git(repo_root, &["add", file])?;

    let date = git_date(timestamp);
    let output = git_command()
        .args(["commit", "-m", message])
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(repo_root)
        .output()?;
    if !output.status.success() {
        bail!(
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    git(repo_root, &["rev-parse", "HEAD"])
}

/// Hashes of the commits in [`setup_merge_repo`].
pub struct MergeRepo {
    pub temp: Utf8TempDir,
    pub root: String,
    pub feature: String,
    pub fix: String,
    pub merge: String,
}

/// Sets up a repository with a merged feature branch:
///
/// ```text
/// *   Merge feature      (main)
/// |\
/// | * Add feature        (feature)
/// * | Fix typo
/// |/
/// * Initial commit
/// ```
pub fn setup_merge_repo() -> Result<MergeRepo> {
    let temp = Utf8TempDir::with_prefix("commit-graph-vcs-")?;
    let repo_root = temp.path();
    init_git_repo(repo_root)?;

    let root =
        commit_file(repo_root, "a.txt", "Initial commit", BASE_TIMESTAMP)?;
    git(repo_root, &["branch", "-M", "main"])?;

    git(repo_root, &["checkout", "-b", "feature"])?;
    let feature =
        commit_file(repo_root, "b.txt", "Add feature", BASE_TIMESTAMP + 1)?;

    git(repo_root, &["checkout", "main"])?;
    let fix =
        commit_file(repo_root, "c.txt", "Fix typo", BASE_TIMESTAMP + 2)?;

    let date = git_date(BASE_TIMESTAMP + 3);
    let output = git_command()
        .args(["merge", "--no-ff", "feature", "-m", "Merge feature"])
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(repo_root)
        .output()?;
    if !output.status.success() {
        bail!(
            "git merge failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    let merge = git(repo_root, &["rev-parse", "HEAD"])?;

    Ok(MergeRepo { temp, root, feature, fix, merge })
}

/// Sets up a repository with `count` commits on a single branch.
pub fn setup_linear_repo(count: u64) -> Result<Utf8TempDir> {
    let temp = Utf8TempDir::with_prefix("commit-graph-vcs-linear-")?;
    let repo_root = temp.path();
    init_git_repo(repo_root)?;
    for n in 1..=count {
        commit_file(
            repo_root,
            "log.txt",
            &format!("Commit {n}"),
            BASE_TIMESTAMP + n,
        )?;
    }
    Ok(temp)
}
