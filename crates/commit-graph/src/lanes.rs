// Copyright 2026 Oxide Computer Company

//! Lane allocation and connection building.

use crate::{
    Color, CommitHash, Connection, ConnectionKind, ConvergingLane,
    GraphCommit, GraphRow, Palette, PassThroughLane, palette::ColorRotation,
};
use std::collections::HashMap;

/// One in-flight line of history.
#[derive(Clone, Debug)]
struct Lane {
    color: Color,
    awaited: CommitHash,
}

/// The lane state of a layout pass after its most recently placed commit.
///
/// This is everything needed to continue a layout where it left off: the
/// open lanes (by column), their colors, the hashes they are waiting for,
/// and the position of the color rotation. Cloning a `LaneState` takes a
/// snapshot; placing more commits into the clone leaves the original
/// untouched.
///
/// Most callers use [`GraphLayout`](crate::GraphLayout), which owns a
/// `LaneState` and exposes it via
/// [`lane_state`](crate::GraphLayout::lane_state).
///
/// # Examples
///
/// ```
/// use commit_graph::{CommitHash, CommitRecord, LaneState, Palette};
///
/// let a: CommitHash = "a".repeat(40).parse().unwrap();
/// let b: CommitHash = "b".repeat(40).parse().unwrap();
///
/// let mut lanes = LaneState::new(Palette::default());
/// let row = lanes.place(&CommitRecord::new(a, vec![b]));
/// assert_eq!(row.column, 0);
///
/// // The lane is still open, waiting for `b`.
/// let open: Vec<_> = lanes.open_lanes().collect();
/// assert_eq!(open.len(), 1);
/// assert_eq!(open[0].awaited, &b);
/// ```
#[derive(Clone, Debug)]
pub struct LaneState {
    /// Open lanes, indexed by column. `None` marks a free column.
    lanes: Vec<Option<Lane>>,
    /// Columns of the lanes waiting for each hash, in the order the lanes
    /// started waiting.
    awaiting: HashMap<CommitHash, Vec<usize>>,
    colors: ColorRotation,
    num_columns: usize,
    rows_placed: usize,
}

/// A read-only view of an open lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenLane<'a> {
    /// The lane's column.
    pub column: usize,
    /// The lane's color.
    pub color: &'a Color,
    /// The commit the lane will reach next.
    pub awaited: &'a CommitHash,
}

impl LaneState {
    /// Creates an empty lane state whose lanes are colored from `palette`.
    pub fn new(palette: Palette) -> Self {
        LaneState {
            lanes: Vec::new(),
            awaiting: HashMap::new(),
            colors: ColorRotation::new(palette),
            num_columns: 0,
            rows_placed: 0,
        }
    }

    /// Returns the palette lanes are colored from.
    pub fn palette(&self) -> &Palette {
        self.colors.palette()
    }

    /// Returns the number of columns used so far: the highest column ever
    /// occupied, plus one. Zero if nothing has been placed.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Returns the number of commits placed so far.
    pub fn rows_placed(&self) -> usize {
        self.rows_placed
    }

    /// Returns the lanes still open after the last placed commit, ordered
    /// by column.
    ///
    /// Lanes whose awaited commit never shows up (truncated or filtered
    /// history) stay open indefinitely.
    pub fn open_lanes(&self) -> impl Iterator<Item = OpenLane<'_>> {
        self.lanes.iter().enumerate().filter_map(|(column, lane)| {
            lane.as_ref().map(|lane| OpenLane {
                column,
                color: &lane.color,
                awaited: &lane.awaited,
            })
        })
    }

    /// Places the next commit and returns its row.
    ///
    /// Commits must be placed newest first. Out-of-order or missing
    /// parents are tolerated: a lane waiting for a commit that never
    /// arrives simply stays open.
    pub fn place<C: GraphCommit + ?Sized>(&mut self, commit: &C) -> GraphRow {
        let hash = *commit.hash();
        let parents = commit.parent_hashes();

        let mut converging_lanes = Vec::new();

        let (column, color) = match self.claim_awaiting(&hash) {
            Some((kept, rest)) => {
                // Converging lanes end at the top of the row, so their
                // columns are free for lanes opened below the dot.
                for from_col in rest {
                    if let Some(lane) = self.lanes[from_col].take() {
                        tracing::trace!(
                            commit = %hash.short(),
                            from_col,
                            to_col = kept.0,
                            "lane converges"
                        );
                        converging_lanes.push(ConvergingLane {
                            from_col,
                            to_col: kept.0,
                            color: lane.color,
                        });
                    }
                }
                kept
            }
            None => {
                let color = self.colors.next_color();
                let column =
                    self.allocate(Lane { color: color.clone(), awaited: hash });
                (column, color)
            }
        };

        let mut connections_down = Vec::with_capacity(parents.len());
        if let Some(mainline) = parents.first() {
            self.lanes[column] =
                Some(Lane { color: color.clone(), awaited: *mainline });
            self.awaiting.entry(*mainline).or_default().push(column);
            connections_down.push(Connection {
                from_col: column,
                to_col: column,
                color: color.clone(),
                kind: ConnectionKind::Continue,
            });
        }

        let mut opened = Vec::new();
        for parent in parents.iter().skip(1) {
            let connection = match self.awaiting_lane(parent) {
                Some((to_col, lane_color)) => Connection {
                    from_col: column,
                    to_col,
                    color: lane_color,
                    kind: ConnectionKind::Join,
                },
                None => {
                    let lane_color = self.colors.next_color();
                    let to_col = self.open_lane(lane_color.clone(), *parent);
                    opened.push(to_col);
                    Connection {
                        from_col: column,
                        to_col,
                        color: lane_color,
                        kind: ConnectionKind::Open,
                    }
                }
            };
            connections_down.push(connection);
        }

        let pass_through_lanes = self
            .open_lanes()
            .filter(|lane| {
                lane.column != column && !opened.contains(&lane.column)
            })
            .map(|lane| PassThroughLane {
                column: lane.column,
                color: lane.color.clone(),
            })
            .collect();

        // A root's own lane ends at its dot.
        if parents.is_empty() {
            self.lanes[column] = None;
        }
        while matches!(self.lanes.last(), Some(None)) {
            self.lanes.pop();
        }
        self.rows_placed += 1;

        GraphRow {
            column,
            color,
            pass_through_lanes,
            connections_down,
            converging_lanes,
        }
    }

    /// Places each commit in order, returning their rows.
    pub fn place_all<I>(&mut self, commits: I) -> Vec<GraphRow>
    where
        I: IntoIterator,
        I::Item: GraphCommit,
    {
        commits.into_iter().map(|commit| self.place(&commit)).collect()
    }

    /// Removes every lane waiting for `hash`. Returns the kept lane's
    /// column and color, plus the columns of the others, ascending.
    ///
    /// The lowest column is kept so the primary line of descent stays to
    /// the left.
    fn claim_awaiting(
        &mut self,
        hash: &CommitHash,
    ) -> Option<((usize, Color), Vec<usize>)> {
        let mut columns = self.awaiting.remove(hash)?;
        columns.sort_unstable();
        columns.dedup();

        columns.retain(|&column| self.is_awaiting(column, hash));

        let mut columns = columns.into_iter();
        let kept = columns.next()?;
        Some(((kept, self.lane_color(kept)?), columns.collect()))
    }

    /// Returns the lowest column (and color) of a lane waiting for `hash`.
    fn awaiting_lane(&self, hash: &CommitHash) -> Option<(usize, Color)> {
        let column = self
            .awaiting
            .get(hash)?
            .iter()
            .copied()
            .filter(|&column| self.is_awaiting(column, hash))
            .min()?;
        Some((column, self.lane_color(column)?))
    }

    fn is_awaiting(&self, column: usize, hash: &CommitHash) -> bool {
        matches!(
            self.lanes.get(column),
            Some(Some(lane)) if lane.awaited == *hash
        )
    }

    fn lane_color(&self, column: usize) -> Option<Color> {
        self.lanes.get(column)?.as_ref().map(|lane| lane.color.clone())
    }

    /// Opens a lane waiting for `awaited` at the lowest free column and
    /// returns that column.
    fn open_lane(&mut self, color: Color, awaited: CommitHash) -> usize {
        let column = self.allocate(Lane { color, awaited });
        self.awaiting.entry(awaited).or_default().push(column);
        column
    }

    /// Puts `lane` in the lowest free column without registering what it
    /// waits for.
    fn allocate(&mut self, lane: Lane) -> usize {
        let column = match self.lanes.iter().position(Option::is_none) {
            Some(column) => {
                self.lanes[column] = Some(lane);
                column
            }
            None => {
                self.lanes.push(Some(lane));
                self.lanes.len() - 1
            }
        };
        self.num_columns = self.num_columns.max(column + 1);
        column
    }
}
