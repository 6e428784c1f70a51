// Copyright 2026 Oxide Computer Company

//! Error types for reading history and paging it into a layout.

use camino::Utf8PathBuf;
use commit_graph::{CommitHashParseError, PaletteError};
use std::{ffi::OsString, io};
use thiserror::Error;

// ---- VCS errors ----

/// An error from reading the git binary path from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VcsEnvError {
    /// The environment variable is set but is not valid UTF-8.
    #[error(
        "${var} environment variable is not valid \
         UTF-8: {value:?}"
    )]
    NonUtf8 {
        /// The environment variable name.
        var: &'static str,
        /// The non-UTF-8 value.
        value: OsString,
    },
}

/// An error that occurs during repository detection.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VcsDetectError {
    /// The provided repository root does not exist.
    #[error(
        "{repo_root} does not exist \
         (expected a repository root with .git)"
    )]
    PathNotFound {
        /// The path that was provided.
        repo_root: Utf8PathBuf,
    },

    /// The provided repository root is not a directory.
    #[error(
        "{repo_root} is not a directory \
         (expected a repository root with .git)"
    )]
    NotADirectory {
        /// The path that was provided.
        repo_root: Utf8PathBuf,
    },

    /// An I/O error occurred while probing the repository root.
    #[error("I/O error while checking for a repository at {path}")]
    Io {
        /// The path being checked when the error occurred.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// No `.git` was found at the repository root.
    #[error("no repository found at {repo_root} (expected .git)")]
    NotFound {
        /// The repository root that was searched.
        repo_root: Utf8PathBuf,
    },

    /// The git environment variable is not valid UTF-8.
    #[error(transparent)]
    Env(#[from] VcsEnvError),
}

/// An error that occurs while reading a page of history.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadLogError {
    /// Failed to spawn git.
    #[error("failed to run git at {binary_path:?} in {repo_root}")]
    SpawnFailed {
        /// The path to the git executable.
        binary_path: String,
        /// The working directory where the command was run.
        repo_root: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// `git log` exited unsuccessfully.
    #[error("git log failed ({exit_status}): {stderr}")]
    VcsFailed {
        /// A human-readable description of the exit status (e.g.,
        /// "exit code 128" or "killed by signal").
        exit_status: String,
        /// The stderr output from git.
        stderr: String,
    },

    /// `git log` succeeded but its output could not be parsed.
    #[error("failed to parse git log output")]
    Parse(#[from] ParseLogError),
}

/// An error that occurs while parsing `git log` output.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ParseLogError {
    /// A record had fewer fields than expected.
    #[error("log record {record} is missing the {field} field")]
    MissingField {
        /// The zero-based index of the record.
        record: usize,
        /// The name of the missing field.
        field: &'static str,
    },

    /// A commit or parent hash could not be parsed.
    #[error("log record {record} has an invalid hash {value:?}")]
    InvalidHash {
        /// The zero-based index of the record.
        record: usize,
        /// The text that failed to parse.
        value: String,
        /// The underlying parse error.
        #[source]
        source: CommitHashParseError,
    },

    /// The commit timestamp was not an integer.
    #[error("log record {record} has an invalid timestamp {value:?}")]
    InvalidTimestamp {
        /// The zero-based index of the record.
        record: usize,
        /// The text that failed to parse.
        value: String,
    },
}

// ---- Configuration errors ----

/// An error that occurs while loading a
/// [`HistoryConfig`](crate::HistoryConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read the configuration file. The error message names the
    /// file.
    #[error(transparent)]
    Read(#[from] io::Error),

    /// The configuration is not valid TOML, or has unknown keys.
    #[error("invalid history config")]
    Parse(#[from] toml::de::Error),

    /// The configuration file is not valid TOML, or has unknown keys.
    #[error("invalid history config in {path}")]
    ParseFile {
        /// The path to the configuration file.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// The page size was zero.
    #[error("page_size must be at least 1")]
    ZeroPageSize,

    /// The configured palette is unusable.
    #[error("invalid palette in history config")]
    Palette(#[from] PaletteError),
}

// ---- Paging errors ----

/// An error that occurs while applying a fetched page to a
/// [`PagedHistory`](crate::PagedHistory).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApplyError {
    /// A newer request was issued after this one; its result is discarded.
    #[error(
        "page request {request} is stale (latest request is {latest})"
    )]
    Stale {
        /// The generation of the discarded request.
        request: u64,
        /// The generation of the latest request.
        latest: u64,
    },
}
