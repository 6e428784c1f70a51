// Copyright 2026 Oxide Computer Company

//! Running git to read commit history.

use crate::{
    LogEntry, LogQuery, ReadLogError, VcsDetectError, VcsEnvError,
    log::{LOG_FORMAT, parse_log},
};
use camino::Utf8Path;
use fs_err as fs;
use std::{io, process::Command};

/// Reads a VCS binary path from an environment variable, falling back
/// to `default` if the variable is unset or empty.
///
/// The value is trimmed of leading and trailing whitespace.
///
/// Returns an error if the variable is set but is not valid UTF-8.
fn read_vcs_env(
    var: &'static str,
    default: &str,
) -> Result<String, VcsEnvError> {
    match std::env::var(var) {
        Ok(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(std::env::VarError::NotUnicode(value)) => {
            Err(VcsEnvError::NonUtf8 { var, value })
        }
    }
}

/// The git installation used to read history.
///
/// Use [`Vcs::git()`] or [`Vcs::detect()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vcs {
    binary: String,
}

impl Vcs {
    /// Creates a git VCS using the `$GIT` environment variable or `"git"`.
    ///
    /// Returns an error if the `$GIT` environment variable is set
    /// but is not valid UTF-8.
    pub fn git() -> Result<Self, VcsEnvError> {
        let binary = read_vcs_env("GIT", "git")?;
        Ok(Vcs { binary })
    }

    /// Checks that `repo_root` is a git repository root and returns the
    /// VCS to read it with.
    ///
    /// `.git` may be a directory or a file, as in worktrees and submodules.
    pub fn detect(repo_root: &Utf8Path) -> Result<Self, VcsDetectError> {
        // metadata() tells "not a directory" apart from I/O errors such as
        // permission denied.
        match fs::metadata(repo_root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(VcsDetectError::NotADirectory {
                    repo_root: repo_root.to_owned(),
                });
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(VcsDetectError::PathNotFound {
                    repo_root: repo_root.to_owned(),
                });
            }
            Err(err) => {
                return Err(VcsDetectError::Io {
                    path: repo_root.to_owned(),
                    source: err,
                });
            }
        }

        let git_path = repo_root.join(".git");
        match git_path.try_exists() {
            Ok(true) => Ok(Self::git()?),
            Ok(false) => Err(VcsDetectError::NotFound {
                repo_root: repo_root.to_owned(),
            }),
            Err(source) => Err(VcsDetectError::Io { path: git_path, source }),
        }
    }

    /// Returns the path to the git binary.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Reads one page of history, newest first.
    ///
    /// Runs `git log --date-order` so that every commit is listed before
    /// its parents. Without a branch in the query's filter, all refs are
    /// walked.
    pub fn read_log(
        &self,
        repo_root: &Utf8Path,
        query: &LogQuery,
    ) -> Result<Vec<LogEntry>, ReadLogError> {
        let mut cmd = Command::new(&self.binary);
        cmd.current_dir(repo_root)
            .args(["log", "--date-order", "-z"])
            .arg(format!("--format={LOG_FORMAT}"))
            .args(query.args());

        tracing::debug!(
            repo_root = %repo_root,
            skip = query.skip,
            limit = query.limit,
            filter = ?query.filter,
            "reading git log"
        );

        let output = cmd.output().map_err(|source| {
            ReadLogError::SpawnFailed {
                binary_path: self.binary.clone(),
                repo_root: repo_root.to_owned(),
                source,
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReadLogError::VcsFailed {
                exit_status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        // Commit subjects and author names are not guaranteed to be UTF-8.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let entries = parse_log(&stdout)?;
        tracing::debug!(entries = entries.len(), "read git log page");
        Ok(entries)
    }
}
