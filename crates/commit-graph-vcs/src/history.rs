// Copyright 2026 Oxide Computer Company

//! Paging history into a layout, one request at a time.

use crate::{
    ApplyError, ConfigError, HistoryConfig, LogEntry, LogFilter, LogQuery,
};
use commit_graph::{GraphLayout, Palette};
use std::ops::Range;

/// A page request handed out by [`PagedHistory`].
///
/// The request carries the generation it was issued in. Only the result of
/// the most recent request can be applied; anything older is stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    query: LogQuery,
}

impl PageRequest {
    /// Returns the generation this request was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the log query to run.
    pub fn query(&self) -> &LogQuery {
        &self.query
    }

    /// Returns true if this request replaces the history from the top.
    pub fn is_refresh(&self) -> bool {
        self.query.skip == 0
    }
}

/// What applying a page did to the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedPage {
    /// The rows that were added or rewritten.
    pub rows: Range<usize>,
    /// True if the whole layout was recomputed rather than extended.
    pub recomputed: bool,
}

/// The commits shown so far and their layout, grown one page at a time.
///
/// The caller fetches each [`PageRequest`] (typically with
/// [`Vcs::read_log`](crate::Vcs::read_log), possibly on another thread) and
/// hands the result back to [`apply`](Self::apply). Issuing a new request
/// makes every earlier one stale, so a slow response to an old filter can
/// never overwrite a newer view.
#[derive(Clone, Debug)]
pub struct PagedHistory {
    filter: LogFilter,
    page_size: usize,
    palette: Palette,
    entries: Vec<LogEntry>,
    layout: GraphLayout,
    generation: u64,
    // False until the first refresh lands.
    loaded: bool,
    refresh_pending: bool,
    exhausted: bool,
}

impl PagedHistory {
    /// Creates an empty history view from a configuration.
    pub fn new(config: &HistoryConfig) -> Result<Self, ConfigError> {
        if config.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self::with_palette(config.page_size, config.palette()?))
    }

    /// Creates an empty history view. A `page_size` of zero is treated
    /// as one.
    pub fn with_palette(page_size: usize, palette: Palette) -> Self {
        PagedHistory {
            filter: LogFilter::all(),
            page_size: page_size.max(1),
            layout: GraphLayout::new(palette.clone()),
            palette,
            entries: Vec::new(),
            generation: 0,
            loaded: false,
            refresh_pending: false,
            exhausted: false,
        }
    }

    /// Returns the current filter.
    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    /// Returns the commits shown so far, newest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the layout of [`entries`](Self::entries).
    pub fn layout(&self) -> &GraphLayout {
        &self.layout
    }

    /// Returns the generation of the most recent request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true once a page came back shorter than requested.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Starts over from the newest commit with `filter`.
    ///
    /// The current rows stay visible until the result is applied.
    pub fn refresh(&mut self, filter: LogFilter) -> PageRequest {
        self.filter = filter;
        self.refresh_pending = true;
        self.issue(0)
    }

    /// Requests the page after the commits shown so far.
    ///
    /// Returns `None` if history is exhausted, or if a refresh is still
    /// outstanding (there is nothing settled to page after yet).
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.refresh_pending || !self.loaded || self.exhausted {
            return None;
        }
        Some(self.issue(self.entries.len()))
    }

    fn issue(&mut self, skip: usize) -> PageRequest {
        self.generation += 1;
        PageRequest {
            generation: self.generation,
            query: LogQuery {
                filter: self.filter.clone(),
                skip,
                limit: self.page_size,
            },
        }
    }

    /// Applies the result of `request`.
    ///
    /// A refresh recomputes the layout from scratch, so a changed filter
    /// never inherits lanes from the old view. A page after the current
    /// rows extends the layout, leaving earlier rows untouched.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        entries: Vec<LogEntry>,
    ) -> Result<AppliedPage, ApplyError> {
        if request.generation != self.generation {
            tracing::warn!(
                request = request.generation,
                latest = self.generation,
                "discarding stale history page"
            );
            return Err(ApplyError::Stale {
                request: request.generation,
                latest: self.generation,
            });
        }

        let recompute = request.is_refresh();

        self.exhausted = entries.len() < request.query.limit;
        self.refresh_pending = false;

        let previous = if recompute {
            self.entries = entries;
            None
        } else {
            self.entries.extend(entries);
            Some(std::mem::replace(
                &mut self.layout,
                GraphLayout::new(self.palette.clone()),
            ))
        };
        let start = previous.as_ref().map_or(0, GraphLayout::len);
        self.layout = GraphLayout::extend_or_recompute(
            previous,
            &self.entries,
            self.palette.clone(),
        );
        self.loaded = true;

        tracing::debug!(
            generation = self.generation,
            recomputed = recompute,
            rows = self.layout.len(),
            exhausted = self.exhausted,
            "applied history page"
        );
        Ok(AppliedPage {
            rows: start..self.layout.len(),
            recomputed: recompute,
        })
    }
}
