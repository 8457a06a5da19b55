//! Property-based invariant tests for the paginator.
//!
//! 1. total_pages == ceil(n / per_page), zero for an empty collection
//! 2. Visible rows are exactly the current page after reset/filter
//! 3. reset is idempotent
//! 4. filter then reset restores the unfiltered partition
//! 5. The same filter always yields the same partition
//! 6. Navigation never leaves the page range

use console_paginator::item::{DefaultItem, Item, Presenter, VisibleSet};
use console_paginator::paginator::Paginator;
use proptest::prelude::*;

fn items(n: usize) -> Vec<DefaultItem> {
    (0..n)
        .map(|i| DefaultItem::new(i.to_string(), format!("item {i}")))
        .collect()
}

fn visible_matches_current(p: &Paginator<DefaultItem>, vis: &VisibleSet) -> bool {
    let current: Vec<String> = p.page_items().iter().map(|i| i.id().to_string()).collect();
    vis.len() == current.len() && current.iter().all(|id| vis.is_visible(id))
}

proptest! {
    #[test]
    fn total_pages_is_ceiling(n in 0usize..200, per_page in 1usize..50) {
        let mut vis = VisibleSet::new();
        let p = Paginator::new(items(n), per_page, &mut vis).unwrap();
        prop_assert_eq!(p.total_pages(), n.div_ceil(per_page));
        prop_assert_eq!(p.page_sizes().iter().sum::<usize>(), n);
        prop_assert!(p.page_sizes().iter().all(|s| *s >= 1 && *s <= per_page));
    }

    #[test]
    fn visible_set_tracks_current_page(n in 0usize..120, per_page in 1usize..20, page in 0usize..20) {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(items(n), per_page, &mut vis).unwrap();
        prop_assert!(visible_matches_current(&p, &vis));

        p.reset(page, &mut vis);
        prop_assert!(visible_matches_current(&p, &vis));

        p.filter_query("1", page, &mut vis);
        prop_assert!(visible_matches_current(&p, &vis));
    }

    #[test]
    fn reset_is_idempotent(n in 0usize..120, per_page in 1usize..20, page in 0usize..20) {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(items(n), per_page, &mut vis).unwrap();
        p.reset(page, &mut vis);
        let once = vis.ids();
        p.reset(page, &mut vis);
        prop_assert_eq!(vis.ids(), once);
    }

    #[test]
    fn filter_then_reset_restores_initial(n in 0usize..120, per_page in 1usize..20, query in "[0-9]{1,2}") {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(items(n), per_page, &mut vis).unwrap();
        let sizes = p.page_sizes();
        let initial = vis.ids();

        p.filter_query(&query, 0, &mut vis);
        p.reset(0, &mut vis);
        prop_assert_eq!(p.page_sizes(), sizes);
        prop_assert_eq!(vis.ids(), initial);
    }

    #[test]
    fn filter_is_deterministic(n in 0usize..120, per_page in 1usize..20, query in "[0-9]{1,2}") {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(items(n), per_page, &mut vis).unwrap();

        p.filter_query(&query, 0, &mut vis);
        let first: Vec<Vec<String>> = (0..p.total_pages())
            .map(|page| p.go_to(page).iter().map(|i| i.id().to_string()).collect())
            .collect();
        p.reset(0, &mut vis);
        p.filter_query(&query, 0, &mut vis);
        let second: Vec<Vec<String>> = (0..p.total_pages())
            .map(|page| p.go_to(page).iter().map(|i| i.id().to_string()).collect())
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn navigation_stays_in_range(n in 0usize..80, per_page in 1usize..10, steps in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(items(n), per_page, &mut vis).unwrap();
        for forward in steps {
            vis.hide(p.page_items());
            let page = if forward { p.next() } else { p.previous() };
            vis.show(page);
            prop_assert!(p.current_page() < p.total_pages().max(1));
            prop_assert_eq!(p.current().is_empty(), n == 0);
            prop_assert!(visible_matches_current(&p, &vis));
        }
    }
}
