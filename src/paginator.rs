//! A paginator that owns a list of items, splits them into pages and keeps
//! the host's visible rows in step with the current page.
//!
//! The paginator never draws anything. Visibility goes through a host
//! [`Presenter`], page controls are described by a [`PageIndicator`]
//! snapshot, and filter text is matched through [`Item::label`].
//!
//! # Two-step navigation
//!
//! [`Paginator::reset`] and [`Paginator::filter`] update the presenter
//! themselves: every item is hidden, then the new current page is shown.
//! [`Paginator::next`], [`Paginator::previous`] and [`Paginator::go_to`] only
//! move the page index and return the new page. The caller hides the old page
//! and shows the new one:
//!
//! ```rust
//! use console_paginator::item::{DefaultItem, Presenter, VisibleSet};
//! use console_paginator::paginator::Paginator;
//!
//! let items: Vec<DefaultItem> = (0..25)
//!     .map(|i| DefaultItem::new(i.to_string(), format!("Room {i}")))
//!     .collect();
//! let mut rows = VisibleSet::new();
//! let mut paginator = Paginator::new(items, 10, &mut rows).unwrap();
//!
//! rows.hide(paginator.current());
//! rows.show(paginator.next());
//!
//! assert_eq!(paginator.current_page(), 1);
//! assert!(rows.is_visible("10"));
//! assert!(!rows.is_visible("0"));
//! ```

use crate::config::{PaginatorConfig, PerPage};
use crate::error::Result;
use crate::indicator::{PageIndicator, Type};
use crate::item::{Item, Presenter};
use crate::key::{Binding, KeyMap as KeyMapTrait};
use crate::matcher::MatchMode;
use bubbletea_rs::{KeyMsg, Msg};
use std::fmt;

type Predicate<I> = Box<dyn Fn(&I) -> bool>;

/// Key bindings for paging through a paginator.
///
/// # Examples
///
/// ```rust
/// use console_paginator::key::{Binding, KeyMap};
/// use console_paginator::paginator::PaginatorKeyMap;
///
/// let keymap = PaginatorKeyMap {
///     prev_page: Binding::from_names(&["a", "left"]).with_help("a/←", "previous page"),
///     next_page: Binding::from_names(&["d", "right"]).with_help("d/→", "next page"),
/// };
/// assert_eq!(keymap.short_help().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::from_names(&["pgup", "left", "h"]).with_help("←/h", "prev page"),
            next_page: Binding::from_names(&["pgdown", "right", "l"]).with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Page-partitioned view over a fixed collection of items.
///
/// The collection is captured at construction. Items the host adds later are
/// not tracked; build a new paginator to include them.
///
/// # Conventions
///
/// - An empty (or fully filtered-out) collection has zero pages, current
///   page 0, and [`current`](Self::current) returns an empty slice.
/// - Requested pages are clamped into `0..total_pages` everywhere.
/// - [`set_per_page`](Self::set_per_page) takes effect on the next
///   [`reset`](Self::reset) or [`filter`](Self::filter).
///
/// # Examples
///
/// ```rust
/// use console_paginator::item::{DefaultItem, VisibleSet};
/// use console_paginator::paginator::Paginator;
///
/// let items: Vec<DefaultItem> = (0..25)
///     .map(|i| DefaultItem::new(i.to_string(), format!("Item {i}")))
///     .collect();
/// let mut rows = VisibleSet::new();
/// let mut paginator = Paginator::builder(items)
///     .id("resources")
///     .per_page(10)
///     .build(&mut rows)
///     .unwrap();
///
/// assert_eq!(paginator.total_pages(), 3);
/// assert_eq!(paginator.current().len(), 10);
/// assert_eq!(rows.len(), 10);
///
/// paginator.filter_query("item 2", 0, &mut rows);
/// // "Item 2" and "Item 20".."Item 24"
/// assert_eq!(paginator.visible_len(), 6);
/// assert_eq!(paginator.total_pages(), 1);
/// ```
pub struct Paginator<I> {
    id: String,
    items: Vec<I>,
    per_page: usize,
    filter: Option<Predicate<I>>,
    pages: Vec<Vec<I>>,
    page: usize,
    match_mode: MatchMode,
    indicator_type: Type,
    indicator: PageIndicator,

    /// Key bindings used by [`update`](Self::update).
    pub keymap: PaginatorKeyMap,
}

impl<I: fmt::Debug> fmt::Debug for Paginator<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("id", &self.id)
            .field("items", &self.items.len())
            .field("per_page", &self.per_page)
            .field("filtered", &self.filter.is_some())
            .field("total_pages", &self.pages.len())
            .field("page", &self.page)
            .finish()
    }
}

/// Builder for [`Paginator`].
#[derive(Debug)]
pub struct PaginatorBuilder<I> {
    items: Vec<I>,
    config: PaginatorConfig,
}

impl<I: Item + 'static> PaginatorBuilder<I> {
    /// Sets the paginator id used for control ids.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = id.into();
        self
    }

    /// Sets the page size. Zero is rejected by [`build`](Self::build).
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Sets how filter queries match labels.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.config.match_mode = mode;
        self
    }

    /// Sets how the page indicator is displayed.
    pub fn indicator_type(mut self, indicator_type: Type) -> Self {
        self.config.indicator = indicator_type;
        self
    }

    /// Replaces all settings at once.
    pub fn config(mut self, config: PaginatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the paginator and shows its first page.
    pub fn build<P>(self, presenter: &mut P) -> Result<Paginator<I>>
    where
        P: Presenter<I> + ?Sized,
    {
        Paginator::with_config(self.items, &self.config, presenter)
    }
}

impl<I: Item + 'static> Paginator<I> {
    /// Creates a paginator with default settings and the given page size.
    ///
    /// Hides every item and shows the first page.
    pub fn new<P>(items: Vec<I>, per_page: usize, presenter: &mut P) -> Result<Self>
    where
        P: Presenter<I> + ?Sized,
    {
        let config = PaginatorConfig {
            per_page,
            ..PaginatorConfig::default()
        };
        Self::with_config(items, &config, presenter)
    }

    /// Starts a builder over `items`.
    pub fn builder(items: Vec<I>) -> PaginatorBuilder<I> {
        PaginatorBuilder {
            items,
            config: PaginatorConfig::default(),
        }
    }

    /// Creates a paginator from a full configuration.
    pub fn with_config<P>(items: Vec<I>, config: &PaginatorConfig, presenter: &mut P) -> Result<Self>
    where
        P: Presenter<I> + ?Sized,
    {
        let per_page = PerPage::new(config.per_page)?.get();
        let mut paginator = Self {
            id: config.id.clone(),
            items,
            per_page,
            filter: None,
            pages: Vec::new(),
            page: 0,
            match_mode: config.match_mode,
            indicator_type: config.indicator,
            indicator: PageIndicator {
                paginator_id: config.id.clone(),
                ..PageIndicator::default()
            },
            keymap: PaginatorKeyMap::default(),
        };
        paginator.reset(0, presenter);
        Ok(paginator)
    }

    /// Clears the filter, repartitions every item and shows `page`.
    ///
    /// `page` is clamped to the last page. Calling this twice in a row leaves
    /// the same items visible.
    pub fn reset<P>(&mut self, page: usize, presenter: &mut P)
    where
        P: Presenter<I> + ?Sized,
    {
        self.filter = None;
        self.repartition(page);
        self.present(presenter);
    }

    /// Applies `predicate`, repartitions the matching items and shows `page`.
    ///
    /// If nothing matches there are zero pages and every item is hidden.
    pub fn filter<F, P>(&mut self, predicate: F, page: usize, presenter: &mut P)
    where
        F: Fn(&I) -> bool + 'static,
        P: Presenter<I> + ?Sized,
    {
        self.filter = Some(Box::new(predicate));
        self.repartition(page);
        self.present(presenter);
    }

    /// Filters by matching `query` against item labels.
    ///
    /// A blank query is the same as [`reset`](Self::reset). Any other query
    /// is matched as typed, surrounding spaces included.
    ///
    /// # Arguments
    ///
    /// * `query` - Filter text from the search box
    /// * `page` - Page to show afterwards, clamped to the filtered range
    /// * `presenter` - Host rows to hide and show
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::item::{DefaultItem, VisibleSet};
    /// use console_paginator::paginator::Paginator;
    ///
    /// let items: Vec<DefaultItem> = (0..25)
    ///     .map(|i| DefaultItem::new(i.to_string(), format!("Room {i}")))
    ///     .collect();
    /// let mut rows = VisibleSet::new();
    /// let mut paginator = Paginator::new(items, 10, &mut rows).unwrap();
    ///
    /// paginator.filter_query("room 1", 0, &mut rows);
    /// assert_eq!(paginator.visible_len(), 11);
    ///
    /// paginator.filter_query("  ", 0, &mut rows);
    /// assert!(!paginator.is_filtered());
    /// ```
    pub fn filter_query<P>(&mut self, query: &str, page: usize, presenter: &mut P)
    where
        P: Presenter<I> + ?Sized,
    {
        if query.trim().is_empty() {
            self.reset(page, presenter);
            return;
        }
        self.filter = Some(self.match_mode.predicate(query));
        self.repartition(page);
        self.present(presenter);
    }

    /// Returns the current page and refreshes the page indicator.
    ///
    /// This is the point where hosts resynchronise their controls with state.
    pub fn current(&mut self) -> &[I] {
        self.refresh_indicator();
        self.page_items()
    }

    /// Items on the current page without touching the indicator.
    pub fn page_items(&self) -> &[I] {
        self.pages.get(self.page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Moves to the next page and returns it. Stays on the last page.
    ///
    /// The caller hides the previous page and shows the returned one.
    pub fn next(&mut self) -> &[I] {
        let target = self.page.saturating_add(1);
        self.go_to(target)
    }

    /// Moves to the previous page and returns it. Stays on the first page.
    ///
    /// The caller hides the previous page and shows the returned one.
    pub fn previous(&mut self) -> &[I] {
        let target = self.page.saturating_sub(1);
        self.go_to(target)
    }

    /// Jumps to `page`, clamped into range, and returns it.
    ///
    /// Same caller-driven hide/show contract as [`next`](Self::next).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::item::{DefaultItem, VisibleSet};
    /// use console_paginator::paginator::Paginator;
    ///
    /// let items: Vec<DefaultItem> =
    ///     (0..25).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
    /// let mut rows = VisibleSet::new();
    /// let mut paginator = Paginator::new(items, 10, &mut rows).unwrap();
    ///
    /// assert_eq!(paginator.go_to(9).len(), 5);
    /// assert_eq!(paginator.current_page(), 2);
    /// ```
    pub fn go_to(&mut self, page: usize) -> &[I] {
        let from = self.page;
        self.page = self.clamp(page);
        tracing::trace!(paginator = %self.id, from, to = self.page, "page navigation");
        self.current()
    }

    /// Changes the page size for the next [`reset`](Self::reset) or
    /// [`filter`](Self::filter). The existing partition is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// for zero, keeping the previous page size.
    pub fn set_per_page(&mut self, per_page: usize) -> Result<()> {
        self.per_page = PerPage::new(per_page)?.get();
        Ok(())
    }

    /// Items across all pages, filtered or not, for which `is_selected` holds.
    ///
    /// Selection is read live on every call and never cached.
    ///
    /// # Arguments
    ///
    /// * `is_selected` - Reads the host's selection state for one item
    pub fn selected_items<F>(&self, is_selected: F) -> Vec<&I>
    where
        F: Fn(&I) -> bool,
    {
        self.items.iter().filter(|&item| is_selected(item)).collect()
    }

    /// Ids of the items for which `is_selected` holds.
    pub fn selected_ids<F>(&self, is_selected: F) -> Vec<String>
    where
        F: Fn(&I) -> bool,
    {
        self.selected_items(is_selected)
            .into_iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    /// Handles prev/next key presses, hiding and showing rows itself.
    ///
    /// Returns true if the page changed.
    ///
    /// ```rust
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use console_paginator::item::{DefaultItem, VisibleSet};
    /// use console_paginator::paginator::Paginator;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let items: Vec<DefaultItem> =
    ///     (0..4).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
    /// let mut rows = VisibleSet::new();
    /// let mut paginator = Paginator::new(items, 2, &mut rows).unwrap();
    ///
    /// let msg: Msg = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE });
    /// assert!(paginator.update(&msg, &mut rows));
    /// assert_eq!(rows.ids(), vec!["2", "3"]);
    /// assert!(!paginator.update(&msg, &mut rows));
    /// ```
    pub fn update<P>(&mut self, msg: &Msg, presenter: &mut P) -> bool
    where
        P: Presenter<I> + ?Sized,
    {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        let before = self.page;
        if self.keymap.next_page.matches(key_msg) && self.has_next_page() {
            presenter.hide(self.page_items());
            presenter.show(self.next());
        } else if self.keymap.prev_page.matches(key_msg) && self.has_previous_page() {
            presenter.hide(self.page_items());
            presenter.show(self.previous());
        }
        self.page != before
    }

    /// The paginator id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Every item, in display order, regardless of filter.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items in the backing collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the backing collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the current partition (after filtering).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::item::{DefaultItem, VisibleSet};
    /// use console_paginator::paginator::Paginator;
    ///
    /// let items: Vec<DefaultItem> = ["Aurora", "Sauna", "Studio A"]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, label)| DefaultItem::new(i.to_string(), *label))
    ///     .collect();
    /// let mut rows = VisibleSet::new();
    /// let mut paginator = Paginator::new(items, 2, &mut rows).unwrap();
    /// assert_eq!(paginator.visible_len(), 3);
    ///
    /// paginator.filter_query("au", 0, &mut rows);
    /// assert_eq!(paginator.visible_len(), 2);
    /// assert_eq!(paginator.len(), 3);
    /// ```
    pub fn visible_len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Page size that the next repartition will use.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages in the current partition.
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the current page.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Item count of each page in the current partition.
    ///
    /// Every page but the last is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::item::{DefaultItem, VisibleSet};
    /// use console_paginator::paginator::Paginator;
    ///
    /// let items: Vec<DefaultItem> =
    ///     (0..25).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
    /// let mut rows = VisibleSet::new();
    /// let paginator = Paginator::new(items, 10, &mut rows).unwrap();
    /// assert_eq!(paginator.page_sizes(), vec![10, 10, 5]);
    /// ```
    pub fn page_sizes(&self) -> Vec<usize> {
        self.pages.iter().map(Vec::len).collect()
    }

    /// True if a filter is active.
    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    /// True if the current page is the first one.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// True if the current page is the last one (or there are no pages).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::item::{DefaultItem, VisibleSet};
    /// use console_paginator::paginator::Paginator;
    ///
    /// let items: Vec<DefaultItem> =
    ///     (0..15).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
    /// let mut rows = VisibleSet::new();
    /// let mut paginator = Paginator::new(items, 10, &mut rows).unwrap();
    /// assert!(!paginator.on_last_page());
    ///
    /// paginator.next();
    /// assert!(paginator.on_last_page());
    /// ```
    pub fn on_last_page(&self) -> bool {
        self.page + 1 >= self.pages.len()
    }

    /// True if a non-empty page follows the current one.
    pub fn has_next_page(&self) -> bool {
        self.pages.get(self.page + 1).is_some_and(|p| !p.is_empty())
    }

    /// True if a page precedes the current one.
    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    /// Filter matching mode used by [`filter_query`](Self::filter_query).
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Changes the filter matching mode for later queries.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.match_mode = mode;
    }

    /// How the page indicator is meant to be displayed, as configured.
    pub fn indicator_type(&self) -> Type {
        self.indicator_type
    }

    /// The page indicator as of the last rebuild.
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    fn clamp(&self, page: usize) -> usize {
        page.min(self.pages.len().saturating_sub(1))
    }

    fn repartition(&mut self, page: usize) {
        let per_page = self.per_page;
        let matching: Vec<I> = match &self.filter {
            Some(predicate) => self.items.iter().filter(|&item| predicate(item)).cloned().collect(),
            None => self.items.clone(),
        };
        self.pages = matching.chunks(per_page).map(<[I]>::to_vec).collect();
        self.page = self.clamp(page);
        tracing::debug!(
            paginator = %self.id,
            items = self.items.len(),
            matching = matching.len(),
            per_page,
            total_pages = self.pages.len(),
            page = self.page,
            filtered = self.filter.is_some(),
            "rebuilt page partition"
        );
    }

    fn present<P>(&mut self, presenter: &mut P)
    where
        P: Presenter<I> + ?Sized,
    {
        presenter.hide(&self.items);
        let current = self.current();
        presenter.show(current);
    }

    fn refresh_indicator(&mut self) {
        self.indicator.total_pages = self.pages.len();
        self.indicator.current_page = self.page;
        self.indicator.page_sizes = self.page_sizes();
        self.indicator.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::item::{DefaultItem, Selection, SelectionSet, VisibleSet};
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn rows(n: usize) -> Vec<DefaultItem> {
        (0..n)
            .map(|i| DefaultItem::new(format!("r{i}"), format!("Resource {i}")))
            .collect()
    }

    fn ids(items: &[DefaultItem]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_zero_per_page_is_invalid() {
        let mut vis = VisibleSet::new();
        let err = Paginator::new(rows(3), 0, &mut vis).unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration { per_page: 0 });
        assert!(vis.is_empty());
    }

    #[test]
    fn test_twenty_five_items_ten_per_page() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.page_sizes(), vec![10, 10, 5]);
        assert_eq!(p.current().len(), 10);

        p.go_to(2);
        assert_eq!(p.current().len(), 5);
    }

    #[test]
    fn test_construction_shows_only_first_page() {
        let mut vis = VisibleSet::new();
        let p = Paginator::new(rows(12), 5, &mut vis).unwrap();
        assert_eq!(vis.len(), 5);
        for item in p.items() {
            let on_first = p.page_items().iter().any(|i| i.id() == item.id());
            assert_eq!(vis.is_visible(item.id()), on_first);
        }
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(Vec::<DefaultItem>::new(), 10, &mut vis).unwrap();
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.current_page(), 0);
        assert!(p.current().is_empty());
        assert!(p.next().is_empty());
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.next();
        p.next();
        assert!(p.on_last_page());
        let last = ids(p.next());
        assert_eq!(p.current_page(), 2);
        assert_eq!(last.len(), 5);
        assert!(!p.has_next_page());
    }

    #[test]
    fn test_previous_clamps_at_first_page() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        assert_eq!(p.previous().len(), 10);
        assert_eq!(p.current_page(), 0);
        assert!(!p.has_previous_page());
    }

    #[test]
    fn test_navigation_leaves_presenter_alone() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        let before = vis.clone();
        p.next();
        assert_eq!(vis, before);
        assert!(vis.is_visible("r0"));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.reset(1, &mut vis);
        let once = vis.ids();
        p.reset(1, &mut vis);
        assert_eq!(vis.ids(), once);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_reset_clamps_requested_page() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.reset(3, &mut vis);
        assert_eq!(p.current_page(), 2);
        p.reset(usize::MAX, &mut vis);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_filter_then_reset_restores_initial_partition() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        let initial = p.page_sizes();
        let initial_visible = vis.ids();

        p.filter(|i: &DefaultItem| i.id().ends_with('3'), 0, &mut vis);
        assert_eq!(p.visible_len(), 3);
        assert!(p.is_filtered());

        p.reset(0, &mut vis);
        assert!(!p.is_filtered());
        assert_eq!(p.page_sizes(), initial);
        assert_eq!(vis.ids(), initial_visible);
    }

    #[test]
    fn test_filter_is_repeatable() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(40), 4, &mut vis).unwrap();
        let odd = |i: &DefaultItem| i.label().ends_with(['1', '3', '5', '7', '9']);

        p.filter(odd, 0, &mut vis);
        let first: Vec<Vec<String>> = (0..p.total_pages()).map(|n| ids(p.go_to(n))).collect();
        p.reset(0, &mut vis);
        p.filter(odd, 0, &mut vis);
        let second: Vec<Vec<String>> = (0..p.total_pages()).map(|n| ids(p.go_to(n))).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_filter_matching_nothing() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.filter_query("no such resource", 2, &mut vis);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.current_page(), 0);
        assert!(p.current().is_empty());
        assert!(vis.is_empty());
        assert!(p.indicator().is_empty());
    }

    #[test]
    fn test_filter_query_is_case_insensitive_substring() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.filter_query("RESOURCE 1", 0, &mut vis);
        // 1, 10..=19
        assert_eq!(p.visible_len(), 11);
        assert_eq!(p.page_sizes(), vec![10, 1]);
        assert!(vis.is_visible("r1"));
        assert!(!vis.is_visible("r2"));
    }

    #[test]
    fn test_blank_query_resets() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.filter_query("resource 2", 0, &mut vis);
        p.filter_query("   ", 0, &mut vis);
        assert!(!p.is_filtered());
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn test_query_spaces_are_significant() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();

        p.filter_query("resource 1 ", 0, &mut vis);
        assert!(p.is_filtered());
        assert_eq!(p.visible_len(), 0);

        // 2, 20..=24 but not 12
        p.filter_query(" 2", 0, &mut vis);
        assert_eq!(p.visible_len(), 6);
        assert!(!vis.is_visible("r12"));
    }

    #[test]
    fn test_filter_page_clamps_to_filtered_range() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.filter_query("resource 2", 5, &mut vis);
        // 2, 20..=24
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_set_per_page_waits_for_reapply() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        p.set_per_page(5).unwrap();
        assert_eq!(p.per_page(), 5);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.current().len(), 10);

        p.reset(p.current_page(), &mut vis);
        assert_eq!(p.total_pages(), 5);
        assert_eq!(vis.len(), 5);
    }

    #[test]
    fn test_set_per_page_rejects_zero() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(5), 2, &mut vis).unwrap();
        assert!(p.set_per_page(0).is_err());
        assert_eq!(p.per_page(), 2);
    }

    #[test]
    fn test_selection_spans_all_pages_and_is_live() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(25), 10, &mut vis).unwrap();
        let items = p.items().to_vec();
        let mut sel = SelectionSet::new();
        sel.set_selected(&items[3], true);
        sel.set_selected(&items[24], true);

        p.filter_query("resource 3", 0, &mut vis);
        assert_eq!(p.selected_ids(|i| sel.is_selected(i)), vec!["r3", "r24"]);

        sel.set_selected(&items[3], false);
        assert_eq!(p.selected_ids(|i| sel.is_selected(i)), vec!["r24"]);
    }

    #[test]
    fn test_indicator_tracks_navigation() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::builder(rows(25))
            .id("links")
            .per_page(10)
            .build(&mut vis)
            .unwrap();
        let rev = p.indicator().revision;
        assert_eq!(p.indicator().paginator_id, "links");
        assert_eq!(p.indicator().total_pages, 3);

        p.next();
        assert_eq!(p.indicator().current_page, 1);
        assert!(p.indicator().revision > rev);

        p.filter_query("resource 1", 0, &mut vis);
        assert_eq!(p.indicator().page_sizes, vec![10, 1]);
        assert_eq!(p.indicator().current_page, 0);
    }

    #[test]
    fn test_update_pages_with_keys() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(6), 2, &mut vis).unwrap();

        assert!(p.update(&key(KeyCode::PageDown), &mut vis));
        assert!(p.update(&key(KeyCode::Char('l')), &mut vis));
        assert_eq!(vis.ids(), vec!["r4", "r5"]);
        assert!(!p.update(&key(KeyCode::Right), &mut vis));

        assert!(p.update(&key(KeyCode::Left), &mut vis));
        assert_eq!(vis.ids(), vec!["r2", "r3"]);
        assert!(!p.update(&key(KeyCode::Char('x')), &mut vis));
    }

    #[test]
    fn test_update_ignores_non_key_messages() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::new(rows(6), 2, &mut vis).unwrap();
        let msg: Msg = Box::new(42u32);
        assert!(!p.update(&msg, &mut vis));
    }

    #[test]
    fn test_fuzzy_mode() {
        let mut vis = VisibleSet::new();
        let mut p = Paginator::builder(vec![
            DefaultItem::new("a", "Meeting room Aurora"),
            DefaultItem::new("b", "Sauna"),
        ])
        .match_mode(MatchMode::Fuzzy)
        .build(&mut vis)
        .unwrap();
        p.filter_query("mra", 0, &mut vis);
        assert_eq!(ids(p.current()), vec!["a"]);
    }
}
