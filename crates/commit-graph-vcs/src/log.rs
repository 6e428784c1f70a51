// Copyright 2026 Oxide Computer Company

//! Log queries and parsing of `git log` output.

use crate::ParseLogError;
use commit_graph::{CommitHash, GraphCommit};
use serde::Serialize;

/// The `--format` passed to `git log`, which runs with `-z`.
///
/// Each record is terminated by NUL, which cannot appear in commit text.
/// Fields are split by the unit separator (0x1f). The subject comes last so
/// any stray separator inside it is kept as text.
pub(crate) const LOG_FORMAT: &str = "%H%x1f%P%x1f%an%x1f%at%x1f%D%x1f%s";

const RECORD_TERMINATOR: char = '\0';
const FIELD_SEPARATOR: char = '\x1f';
const FIELD_COUNT: usize = 6;

/// Which part of history to show.
///
/// Blank values mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LogFilter {
    /// Show only history reachable from this branch (or any revision git
    /// accepts). `None` shows all refs.
    pub branch: Option<String>,
    /// Show only commits whose message contains this text, ignoring case.
    pub text: Option<String>,
}

impl LogFilter {
    /// Returns a filter that shows everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the filter to history reachable from `branch`.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Restricts the filter to commits whose message contains `text`.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    fn branch(&self) -> Option<&str> {
        self.branch.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Returns a string that is equal for two filters exactly when they
    /// select the same history.
    ///
    /// Surrounding whitespace and blank values are ignored, so
    /// `with_text(" ")` has the same signature as [`LogFilter::all()`].
    pub fn signature(&self) -> String {
        format!(
            "branch={}{FIELD_SEPARATOR}text={}",
            self.branch().unwrap_or(""),
            self.text().unwrap_or("")
        )
    }
}

/// A request for one page of history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogQuery {
    /// The part of history to show.
    pub filter: LogFilter,
    /// The number of commits to skip from the newest end.
    pub skip: usize,
    /// The maximum number of commits to return.
    pub limit: usize,
}

impl LogQuery {
    /// Returns a query for the first `limit` commits matching `filter`.
    pub fn first_page(filter: LogFilter, limit: usize) -> Self {
        LogQuery { filter, skip: 0, limit }
    }

    /// Returns the `git log` arguments that follow the format option.
    pub(crate) fn args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--max-count={}", self.limit),
            format!("--skip={}", self.skip),
        ];
        if let Some(text) = self.filter.text() {
            args.push("--regexp-ignore-case".to_string());
            args.push("--fixed-strings".to_string());
            args.push(format!("--grep={text}"));
        }
        match self.filter.branch() {
            // Keeps a branch name that starts with `-` from being read as
            // an option.
            Some(branch) => {
                args.push("--end-of-options".to_string());
                args.push(branch.to_string());
            }
            None => args.push("--all".to_string()),
        }
        args.push("--".to_string());
        args
    }
}

/// One commit as listed by `git log`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// The commit hash.
    pub hash: CommitHash,
    /// Parent hashes, first parent first.
    pub parent_hashes: Vec<CommitHash>,
    /// The author name.
    pub author: String,
    /// The author date, in seconds since the Unix epoch.
    pub timestamp: i64,
    /// Decorations such as `HEAD -> main` or `tag: v1.0`.
    pub refs: Vec<String>,
    /// The first line of the commit message.
    pub subject: String,
}

impl GraphCommit for LogEntry {
    fn hash(&self) -> &CommitHash {
        &self.hash
    }

    fn parent_hashes(&self) -> &[CommitHash] {
        &self.parent_hashes
    }
}

/// Parses the output of `git log -z` run with [`LOG_FORMAT`].
pub fn parse_log(output: &str) -> Result<Vec<LogEntry>, ParseLogError> {
    output
        .split(RECORD_TERMINATOR)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(record, chunk)| parse_record(record, chunk))
        .collect()
}

fn parse_record(record: usize, chunk: &str) -> Result<LogEntry, ParseLogError> {
    let mut fields = chunk.splitn(FIELD_COUNT, FIELD_SEPARATOR);
    let mut next = |field: &'static str| {
        fields.next().ok_or(ParseLogError::MissingField { record, field })
    };

    let hash = parse_hash(record, next("hash")?)?;
    let parent_hashes = next("parents")?
        .split_whitespace()
        .map(|parent| parse_hash(record, parent))
        .collect::<Result<_, _>>()?;
    let author = next("author")?.to_string();
    let timestamp = next("timestamp")?;
    let timestamp = timestamp.trim().parse().map_err(|_| {
        ParseLogError::InvalidTimestamp { record, value: timestamp.to_string() }
    })?;
    let refs = next("refs")?
        .split(", ")
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();
    let subject = next("subject")?.to_string();

    Ok(LogEntry { hash, parent_hashes, author, timestamp, refs, subject })
}

fn parse_hash(record: usize, value: &str) -> Result<CommitHash, ParseLogError> {
    value.trim().parse().map_err(|source| ParseLogError::InvalidHash {
        record,
        value: value.to_string(),
        source,
    })
}
