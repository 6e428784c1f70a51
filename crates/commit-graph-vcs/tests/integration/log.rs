// Copyright 2026 Oxide Computer Company

//! Reading history with `git log`.

use crate::repo::{
    BASE_TIMESTAMP, git, setup_linear_repo, setup_merge_repo,
};
use anyhow::Result;
use commit_graph::{ConnectionKind, GraphLayout, Palette};
use commit_graph_vcs::{LogFilter, LogQuery, ReadLogError, Vcs};

fn subjects(entries: &[commit_graph_vcs::LogEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.subject.as_str()).collect()
}

#[test]
fn test_detect_real_repo() -> Result<()> {
    let repo = setup_merge_repo()?;
    let vcs = Vcs::detect(repo.temp.path())?;
    assert!(!vcs.binary().is_empty());
    Ok(())
}

#[test]
fn test_read_log_merge_history() -> Result<()> {
    let repo = setup_merge_repo()?;
    let vcs = Vcs::detect(repo.temp.path())?;

    let entries = vcs.read_log(
        repo.temp.path(),
        &LogQuery::first_page(LogFilter::all(), 100),
    )?;
    assert_eq!(
        subjects(&entries),
        ["Merge feature", "Fix typo", "Add feature", "Initial commit"]
    );

    let merge = &entries[0];
    assert_eq!(merge.hash.to_string(), repo.merge);
    let parents: Vec<_> =
        merge.parent_hashes.iter().map(|p| p.to_string()).collect();
    assert_eq!(parents, [repo.fix.clone(), repo.feature.clone()]);
    assert!(
        merge.refs.iter().any(|r| r == "HEAD -> main"),
        "merge should be decorated with HEAD: {:?}",
        merge.refs
    );
    assert_eq!(merge.author, "Test User");
    assert_eq!(merge.timestamp, BASE_TIMESTAMP as i64 + 3);

    assert!(entries[2].refs.iter().any(|r| r == "feature"));
    assert_eq!(entries[3].hash.to_string(), repo.root);
    assert!(entries[3].parent_hashes.is_empty());

    let layout = GraphLayout::compute(&entries, Palette::default());
    assert_eq!(layout.num_columns(), 2);
    let kinds: Vec<_> =
        layout.rows()[0].connections_down.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [ConnectionKind::Continue, ConnectionKind::Open]);
    assert_eq!(
        layout.rows()[3].converging_lanes.len(),
        1,
        "the feature lane converges on the initial commit"
    );
    Ok(())
}

#[test]
fn test_read_log_branch_filter() -> Result<()> {
    let repo = setup_merge_repo()?;
    let vcs = Vcs::detect(repo.temp.path())?;

    let filter = LogFilter::all().with_branch("feature");
    let entries = vcs
        .read_log(repo.temp.path(), &LogQuery::first_page(filter, 100))?;
    assert_eq!(subjects(&entries), ["Add feature", "Initial commit"]);
    Ok(())
}

#[test]
fn test_read_log_text_filter_ignores_case() -> Result<()> {
    let repo = setup_merge_repo()?;
    let vcs = Vcs::detect(repo.temp.path())?;

    let filter = LogFilter::all().with_text("TYPO");
    let entries = vcs
        .read_log(repo.temp.path(), &LogQuery::first_page(filter, 100))?;
    assert_eq!(subjects(&entries), ["Fix typo"]);
    Ok(())
}

#[test]
fn test_read_log_skip_and_limit() -> Result<()> {
    let temp = setup_linear_repo(5)?;
    let vcs = Vcs::detect(temp.path())?;

    let query = LogQuery { filter: LogFilter::all(), skip: 1, limit: 2 };
    let entries = vcs.read_log(temp.path(), &query)?;
    assert_eq!(subjects(&entries), ["Commit 4", "Commit 3"]);

    let query = LogQuery { filter: LogFilter::all(), skip: 5, limit: 2 };
    let entries = vcs.read_log(temp.path(), &query)?;
    assert!(entries.is_empty(), "nothing past the root");
    Ok(())
}

#[test]
fn test_read_log_subject_with_control_characters() -> Result<()> {
    let temp = setup_linear_repo(1)?;
    git(
        temp.path(),
        &["commit", "--allow-empty", "-m", "Odd \x1e subject"],
    )?;
    let vcs = Vcs::detect(temp.path())?;

    let entries = vcs
        .read_log(temp.path(), &LogQuery::first_page(LogFilter::all(), 10))?;
    assert_eq!(subjects(&entries), ["Odd \x1e subject", "Commit 1"]);
    assert_eq!(entries[0].parent_hashes, [entries[1].hash]);
    Ok(())
}

#[test]
fn test_read_log_unknown_branch_fails() -> Result<()> {
    let repo = setup_merge_repo()?;
    let vcs = Vcs::detect(repo.temp.path())?;

    let filter = LogFilter::all().with_branch("no-such-branch");
    let err = vcs
        .read_log(repo.temp.path(), &LogQuery::first_page(filter, 10))
        .unwrap_err();
    assert!(
        matches!(err, ReadLogError::VcsFailed { .. }),
        "unexpected error: {err:?}"
    );
    Ok(())
}
