// Copyright 2026 Oxide Computer Company

//! Whole-history layouts, full and incremental.

use crate::{GraphCommit, GraphRow, LaneState, Palette};
use serde::Serialize;
use std::ops::Range;

/// A laid-out commit graph: one [`GraphRow`] per commit, in input order,
/// plus the number of columns needed to draw them.
///
/// A layout keeps the [`LaneState`] left after its last row, so that older
/// history can be appended with [`extend`](Self::extend) without touching
/// rows that were already produced.
///
/// Serializes as `{ "rows": [...], "numColumns": n }`.
///
/// # Examples
///
/// ```
/// use commit_graph::{CommitHash, CommitRecord, GraphLayout, Palette};
///
/// fn hash(c: char) -> CommitHash {
///     c.to_string().repeat(40).parse().unwrap()
/// }
///
/// let history = [
///     CommitRecord::new(hash('c'), vec![hash('b')]),
///     CommitRecord::new(hash('b'), vec![hash('a')]),
/// ];
///
/// let mut layout = GraphLayout::compute(&history, Palette::default());
/// assert_eq!(layout.len(), 2);
/// assert_eq!(layout.num_columns(), 1);
///
/// // Page in older history: existing rows are left exactly as they were.
/// let first_page = layout.rows().to_vec();
/// let new_rows = layout.extend([CommitRecord::new(hash('a'), vec![])]);
/// assert_eq!(new_rows, 2..3);
/// assert_eq!(&layout.rows()[..2], &first_page[..]);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLayout {
    rows: Vec<GraphRow>,
    num_columns: usize,
    #[serde(skip)]
    lanes: LaneState,
}

impl GraphLayout {
    /// Creates an empty layout. Commits are added with
    /// [`extend`](Self::extend).
    pub fn new(palette: Palette) -> Self {
        Self::from_lane_state(LaneState::new(palette))
    }

    /// Creates an empty layout that continues from a previously saved lane
    /// state.
    ///
    /// Rows produced from here on are numbered from zero; the caller is
    /// responsible for appending them after the rows the state came from.
    pub fn from_lane_state(lanes: LaneState) -> Self {
        let num_columns = lanes.num_columns();
        GraphLayout { rows: Vec::new(), num_columns, lanes }
    }

    /// Lays out `commits` from scratch.
    ///
    /// `commits` must be newest first, as produced by the history source.
    pub fn compute<I>(commits: I, palette: Palette) -> Self
    where
        I: IntoIterator,
        I::Item: GraphCommit,
    {
        let mut layout = Self::new(palette);
        layout.extend(commits);
        tracing::debug!(
            rows = layout.len(),
            num_columns = layout.num_columns,
            "computed commit graph layout"
        );
        layout
    }

    /// Continues the layout into `commits`, which must be older than every
    /// commit already laid out.
    ///
    /// Lanes still open at the bottom of the layout carry on into the new
    /// rows with their columns and colors unchanged, and existing rows are
    /// never modified. Returns the index range of the new rows.
    pub fn extend<I>(&mut self, commits: I) -> Range<usize>
    where
        I: IntoIterator,
        I::Item: GraphCommit,
    {
        let start = self.rows.len();
        self.rows.extend(
            commits.into_iter().map(|commit| self.lanes.place(&commit)),
        );
        self.num_columns = self.lanes.num_columns();
        start..self.rows.len()
    }

    /// Brings a previous layout up to date with `commits`, the full,
    /// newest-first history currently visible.
    ///
    /// If `previous` covers a prefix of `commits`, only the remaining
    /// commits are laid out and appended. If there is no previous layout,
    /// or it has more rows than `commits` (the window shrank, so it cannot
    /// be a prefix), everything is recomputed from scratch with `palette`.
    ///
    /// The layout cannot tell whether `previous` was computed from the same
    /// view of history. Callers that change the view (for example a new
    /// branch filter) must pass `None` to force a recompute.
    pub fn extend_or_recompute<C: GraphCommit>(
        previous: Option<GraphLayout>,
        commits: &[C],
        palette: Palette,
    ) -> Self {
        match previous {
            Some(mut layout) if layout.len() <= commits.len() => {
                let added = layout.extend(&commits[layout.len()..]);
                tracing::debug!(
                    added = added.len(),
                    rows = layout.len(),
                    "extended commit graph layout"
                );
                layout
            }
            Some(layout) => {
                tracing::debug!(
                    previous_rows = layout.len(),
                    rows = commits.len(),
                    "history window shrank, recomputing layout"
                );
                Self::compute(commits, palette)
            }
            None => Self::compute(commits, palette),
        }
    }

    /// Returns the rows, one per commit, in input order.
    pub fn rows(&self) -> &[GraphRow] {
        &self.rows
    }

    /// Returns the row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&GraphRow> {
        self.rows.get(index)
    }

    /// Returns the number of columns needed to draw every row.
    ///
    /// Zero for an empty layout.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no commits have been laid out.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the lane state after the last row.
    ///
    /// Clone it to continue the layout elsewhere, e.g. with
    /// [`from_lane_state`](Self::from_lane_state).
    pub fn lane_state(&self) -> &LaneState {
        &self.lanes
    }

    /// Consumes the layout, returning its rows and the lane state after the
    /// last row.
    pub fn into_parts(self) -> (Vec<GraphRow>, LaneState) {
        (self.rows, self.lanes)
    }
}
