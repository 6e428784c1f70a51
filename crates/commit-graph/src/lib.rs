// Copyright 2026 Oxide Computer Company

//! Lane layout for commit-graph visualization.
//!
//! Given a newest-first list of commits (a hash plus ordered parent hashes,
//! as emitted by `git log`), this crate assigns every commit a *lane*: a
//! column, a stable color, and the connections needed to draw lines to its
//! parents. The output is one [`GraphRow`] per commit, in input order, which
//! a canvas renderer can draw row by row without looking ahead.
//!
//! The layout is:
//!
//! - **Compact.** A freed column is reused by the next lane that needs one,
//!   so the graph stays as narrow as the history allows.
//! - **Stable under paging.** [`GraphLayout::extend`] continues from the
//!   lane state left by the previous page. Rows already handed out never
//!   change, and lanes keep their column and color across pages.
//! - **Total.** Truncated histories, missing parents and duplicate hashes
//!   all produce a well-defined layout. Laying out never fails.
//!
//! Running git and parsing its output is left to the caller; see
//! [`commit-graph-vcs`](https://crates.io/crates/commit-graph-vcs).
//!
//! # Examples
//!
//! ```
//! use commit_graph::{
//!     CommitHash, CommitRecord, ConnectionKind, GraphLayout, Palette,
//! };
//!
//! fn hash(c: char) -> CommitHash {
//!     c.to_string().repeat(40).parse().unwrap()
//! }
//!
//! // A merge `a` of `b` and `c`, which share the root `d`.
//! let history = [
//!     CommitRecord::new(hash('a'), vec![hash('b'), hash('c')]),
//!     CommitRecord::new(hash('b'), vec![hash('d')]),
//!     CommitRecord::new(hash('c'), vec![hash('d')]),
//!     CommitRecord::new(hash('d'), vec![]),
//! ];
//!
//! let layout = GraphLayout::compute(&history, Palette::default());
//! assert_eq!(layout.num_columns(), 2);
//!
//! let rows = layout.rows();
//! // The merge continues its own lane and opens one for `c`.
//! assert_eq!(rows[0].connections_down[0].kind, ConnectionKind::Continue);
//! assert_eq!(rows[0].connections_down[1].kind, ConnectionKind::Open);
//! // `b` and `c` sit side by side...
//! assert_eq!((rows[1].column, rows[2].column), (0, 1));
//! // ...and the two lanes come together at `d`.
//! assert_eq!(rows[3].converging_lanes.len(), 1);
//! ```

#![deny(missing_docs)]

mod errors;
mod hash;
mod lanes;
mod layout;
mod palette;
mod record;
mod row;

pub use errors::{CommitHashParseError, PaletteError};
pub use hash::CommitHash;
pub use lanes::{LaneState, OpenLane};
pub use layout::GraphLayout;
pub use palette::{Color, DEFAULT_COLORS, Palette};
pub use record::{CommitRecord, GraphCommit};
pub use row::{
    Connection, ConnectionKind, ConnectionShape, ConvergingLane, GraphRow,
    PassThroughLane,
};
