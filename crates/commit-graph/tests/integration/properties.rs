// Copyright 2026 Oxide Computer Company

//! Property tests over randomly generated histories.

use crate::history::{check_edges_continuous, check_no_collisions, hash};
use commit_graph::{CommitRecord, GraphLayout, Palette};
use proptest::prelude::*;

/// Generates a newest-first history with unique hashes.
///
/// Commit `i` may have up to three parents, each some distance further down
/// the list. Parents that land past the end are outside the window and
/// never appear, as with a paged or filtered log.
fn arb_history() -> impl Strategy<Value = Vec<CommitRecord>> {
    prop::collection::vec(
        prop::collection::vec(1usize..6, 0..=3usize),
        0..60usize,
    )
    .prop_map(|commits| {
        commits
            .into_iter()
            .enumerate()
            .map(|(index, offsets)| {
                let mut parents: Vec<_> =
                    offsets.into_iter().map(|offset| index + offset).collect();
                let mut seen = Vec::new();
                parents.retain(|parent| {
                    let fresh = !seen.contains(parent);
                    seen.push(*parent);
                    fresh
                });
                CommitRecord::new(
                    hash(index),
                    parents.into_iter().map(hash).collect(),
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_rows_never_share_a_column(history in arb_history()) {
        let layout = GraphLayout::compute(&history, Palette::default());
        prop_assert_eq!(layout.len(), history.len());
        if let Err(message) = check_no_collisions(layout.rows()) {
            prop_assert!(false, "{}", message);
        }
    }

    #[test]
    fn test_edges_keep_column_and_color(history in arb_history()) {
        let layout = GraphLayout::compute(&history, Palette::default());
        if let Err(message) = check_edges_continuous(&history, layout.rows()) {
            prop_assert!(false, "{}", message);
        }
    }

    #[test]
    fn test_every_column_fits_num_columns(history in arb_history()) {
        let layout = GraphLayout::compute(&history, Palette::default());
        for row in layout.rows() {
            prop_assert!(
                row.width() <= layout.num_columns(),
                "row width {} exceeds num_columns {}",
                row.width(),
                layout.num_columns()
            );
        }
        if history.is_empty() {
            prop_assert_eq!(layout.num_columns(), 0);
        }
    }

    #[test]
    fn test_roots_have_no_connections(history in arb_history()) {
        let layout = GraphLayout::compute(&history, Palette::default());
        for (commit, row) in history.iter().zip(layout.rows()) {
            prop_assert_eq!(commit.is_root(), row.connections_down.is_empty());
        }
    }

    #[test]
    fn test_extension_matches_full_layout(
        history in arb_history(),
        split in 0usize..60,
    ) {
        let split = split.min(history.len());
        let full = GraphLayout::compute(&history, Palette::default());

        let mut paged =
            GraphLayout::compute(&history[..split], Palette::default());
        let first_page = paged.rows().to_vec();
        paged.extend(&history[split..]);

        prop_assert_eq!(&paged.rows()[..split], &first_page[..]);
        prop_assert_eq!(paged.rows(), full.rows());
        prop_assert_eq!(paged.num_columns(), full.num_columns());
    }
}
