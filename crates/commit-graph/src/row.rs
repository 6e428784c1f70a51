// Copyright 2026 Oxide Computer Company

//! Per-row layout descriptors handed to the renderer.
//!
//! Each [`GraphRow`] is self-contained: a renderer can draw row `i` from
//! row `i` alone, without looking at the rows below it. Geometry (lane
//! width, row height, dot radius) is left to the renderer.

use crate::Color;
use serde::Serialize;

/// The layout of a single commit row.
///
/// Serializes to the camelCase shape panels consume (`passThroughLanes`,
/// `connectionsDown`, `fromCol`, `toCol`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRow {
    /// The column the commit's dot occupies.
    pub column: usize,
    /// The color of the commit's dot and of its mainline connection.
    pub color: Color,
    /// Lanes drawn straight through this row, ordered by column.
    pub pass_through_lanes: Vec<PassThroughLane>,
    /// Connections from this row's dot toward its parents, in parent
    /// order.
    pub connections_down: Vec<Connection>,
    /// Lanes that were also waiting for this commit and end here, ordered
    /// by column. Each is drawn from its column at the top of the row into
    /// the dot.
    pub converging_lanes: Vec<ConvergingLane>,
}

impl GraphRow {
    /// Returns true if the commit's lane ends at this row (a root commit).
    pub fn is_lane_end(&self) -> bool {
        self.connections_down.is_empty()
    }

    /// Returns the number of columns this row touches, counting from
    /// column 0.
    ///
    /// Useful for sizing a single row; the layout as a whole reports
    /// [`num_columns`](crate::GraphLayout::num_columns).
    pub fn width(&self) -> usize {
        let pass_through =
            self.pass_through_lanes.iter().map(|lane| lane.column);
        let down = self.connections_down.iter().map(|c| c.to_col);
        let converging = self.converging_lanes.iter().map(|c| c.from_col);
        pass_through
            .chain(down)
            .chain(converging)
            .fold(self.column, usize::max)
            + 1
    }
}

/// A lane that is active across a row but neither starts nor ends there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PassThroughLane {
    /// The lane's column.
    pub column: usize,
    /// The lane's color.
    pub color: Color,
}

/// Why a connection leaves a commit's dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    /// The commit's own lane continues toward its mainline parent.
    Continue,
    /// A new lane was opened for an additional parent of a merge.
    Open,
    /// An additional parent is already awaited by an existing lane; the
    /// connection joins that lane instead of opening a duplicate.
    Join,
}

/// How a connection is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionShape {
    /// A vertical segment; both ends share a column.
    Straight,
    /// A diagonal or bezier segment between two columns.
    Diagonal,
}

/// A connection from a commit's dot toward one of its parents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// The column of the commit's dot.
    pub from_col: usize,
    /// The column of the lane that carries the edge down to the parent.
    pub to_col: usize,
    /// The color of the carrying lane.
    pub color: Color,
    /// Why this connection exists.
    pub kind: ConnectionKind,
}

impl Connection {
    /// Returns how this connection is drawn.
    pub fn shape(&self) -> ConnectionShape {
        if self.from_col == self.to_col {
            ConnectionShape::Straight
        } else {
            ConnectionShape::Diagonal
        }
    }
}

/// A lane that ends at a row by merging into the commit's dot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvergingLane {
    /// The column the retiring lane occupied.
    pub from_col: usize,
    /// The column of the dot it merges into.
    pub to_col: usize,
    /// The retiring lane's color.
    pub color: Color,
}
