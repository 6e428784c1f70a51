// Copyright 2026 Oxide Computer Company

//! Git history feed for [`commit_graph`] layouts.
//!
//! This crate reads commit history with `git log`, a page at a time, and
//! keeps a [`PagedHistory`]: the commits shown so far together with their
//! [`GraphLayout`](commit_graph::GraphLayout). Each fetch is described by a
//! [`PageRequest`] stamped with a generation number, so that results which
//! arrive after a newer request (say, after the user changed the branch
//! filter) are discarded instead of overwriting the current view.
//!
//! # Usage
//!
//! ```no_run
//! use camino::Utf8Path;
//! use commit_graph_vcs::{HistoryConfig, LogFilter, PagedHistory, Vcs};
//!
//! let repo_root = Utf8Path::new(".");
//! let vcs = Vcs::detect(repo_root).expect("git repository at repo root");
//! let mut history = PagedHistory::new(&HistoryConfig::default())
//!     .expect("default config is valid");
//!
//! let request = history.refresh(LogFilter::all().with_branch("main"));
//! let entries = vcs
//!     .read_log(repo_root, request.query())
//!     .expect("git log succeeded");
//! history.apply(&request, entries).expect("request is current");
//!
//! // Scrolling down: lanes carry on from the rows already shown.
//! if let Some(request) = history.load_more() {
//!     let entries = vcs
//!         .read_log(repo_root, request.query())
//!         .expect("git log succeeded");
//!     history.apply(&request, entries).expect("request is current");
//! }
//!
//! let json = serde_json::to_string(history.layout()).unwrap();
//! # let _ = json;
//! ```

#![deny(missing_docs)]

mod config;
mod errors;
mod history;
mod log;
mod vcs;

pub use config::{DEFAULT_PAGE_SIZE, HistoryConfig};
pub use errors::{
    ApplyError, ConfigError, ParseLogError, ReadLogError, VcsDetectError,
    VcsEnvError,
};
pub use history::{AppliedPage, PageRequest, PagedHistory};
pub use log::{LogEntry, LogFilter, LogQuery, parse_log};
pub use vcs::Vcs;
