// Copyright 2026 Oxide Computer Company

//! Commit records: the input to a layout pass.

use crate::CommitHash;

/// A commit as seen by the layout pass: its hash and its ordered parents.
///
/// Implement this for whatever record type the history source produces, so
/// the layout can run directly over it. The first parent is the *mainline*
/// parent; its lane continues the commit's own lane.
pub trait GraphCommit {
    /// Returns the commit's hash.
    fn hash(&self) -> &CommitHash;

    /// Returns the commit's parent hashes, mainline parent first.
    ///
    /// Empty for root commits.
    fn parent_hashes(&self) -> &[CommitHash];
}

/// A minimal commit record carrying only what the layout needs.
///
/// # Examples
///
/// ```
/// use commit_graph::{CommitHash, CommitRecord};
///
/// let parent: CommitHash =
///     "1111111111111111111111111111111111111111".parse().unwrap();
/// let child: CommitHash =
///     "2222222222222222222222222222222222222222".parse().unwrap();
///
/// let record = CommitRecord::new(child, vec![parent]);
/// assert!(!record.is_merge());
/// assert!(!record.is_root());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRecord {
    hash: CommitHash,
    parent_hashes: Vec<CommitHash>,
}

impl CommitRecord {
    /// Creates a new record.
    pub fn new(hash: CommitHash, parent_hashes: Vec<CommitHash>) -> Self {
        CommitRecord { hash, parent_hashes }
    }

    /// Returns true if this commit has no parents.
    pub fn is_root(&self) -> bool {
        self.parent_hashes.is_empty()
    }

    /// Returns true if this commit has two or more parents.
    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }
}

impl GraphCommit for CommitRecord {
    fn hash(&self) -> &CommitHash {
        &self.hash
    }

    fn parent_hashes(&self) -> &[CommitHash] {
        &self.parent_hashes
    }
}

impl<T: GraphCommit + ?Sized> GraphCommit for &T {
    fn hash(&self) -> &CommitHash {
        (**self).hash()
    }

    fn parent_hashes(&self) -> &[CommitHash] {
        (**self).parent_hashes()
    }
}
