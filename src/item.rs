//! Item and presenter traits.
//!
//! An [`Item`] is an opaque handle to one presentable record (a resource row,
//! a user row, an outlook link card). The paginator never looks inside an item
//! except through these two accessors. Visibility is delegated to a host
//! [`Presenter`], so the paginator never assumes how rows are drawn.

use std::collections::HashSet;

/// Trait for records managed by a [`Paginator`](crate::paginator::Paginator).
///
/// Items are cloned into page partitions, so they should be cheap handles
/// (ids, `Rc`s, small structs) rather than large owned documents.
///
/// # Examples
///
/// ```
/// use console_paginator::item::Item;
///
/// #[derive(Clone)]
/// struct Resource {
///     id: String,
///     name: String,
/// }
///
/// impl Item for Resource {
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait Item: Clone {
    /// Stable identifier, sent to the backend by bulk actions.
    fn id(&self) -> &str;

    /// Text matched against filter queries.
    fn label(&self) -> String;
}

/// A plain id + label item.
///
/// ```
/// use console_paginator::item::{DefaultItem, Item};
///
/// let item = DefaultItem::new("42", "Meeting room Aurora");
/// assert_eq!(item.id(), "42");
/// assert_eq!(item.label(), "Meeting room Aurora");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultItem {
    id: String,
    label: String,
}

impl DefaultItem {
    /// Creates an item from an id and a label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Item for DefaultItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Host-supplied visibility callbacks.
///
/// `reset` and `filter` call `hide` with every item and then `show` with the
/// new current page. Page navigation leaves both calls to the caller.
pub trait Presenter<I> {
    /// Makes the given items visible.
    fn show(&mut self, items: &[I]);

    /// Makes the given items hidden.
    fn hide(&mut self, items: &[I]);
}

/// In-memory presenter that tracks which item ids are visible.
///
/// Useful for hosts that redraw from state (terminal UIs) and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    visible: HashSet<String>,
    shows: usize,
    hides: usize,
}

impl VisibleSet {
    /// Creates an empty set with nothing visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the item with `id` is currently shown.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns true if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.visible.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// How many `show` calls this presenter has received.
    pub fn show_calls(&self) -> usize {
        self.shows
    }

    /// How many `hide` calls this presenter has received.
    pub fn hide_calls(&self) -> usize {
        self.hides
    }
}

impl<I: Item> Presenter<I> for VisibleSet {
    fn show(&mut self, items: &[I]) {
        self.shows += 1;
        for item in items {
            self.visible.insert(item.id().to_string());
        }
    }

    fn hide(&mut self, items: &[I]) {
        self.hides += 1;
        for item in items {
            self.visible.remove(item.id());
        }
    }
}

/// Host-owned selection state (the checkbox on each row).
///
/// The paginator never caches selection; it asks through a predicate at
/// query time, so toggling here is observed immediately.
pub trait Selection<I> {
    /// Returns true if `item` is selected.
    fn is_selected(&self, item: &I) -> bool;

    /// Selects or deselects `item`.
    fn set_selected(&mut self, item: &I, selected: bool);
}

/// Selection state keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: HashSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl<I: Item> Selection<I> for SelectionSet {
    fn is_selected(&self, item: &I) -> bool {
        self.selected.contains(item.id())
    }

    fn set_selected(&mut self, item: &I, selected: bool) {
        if selected {
            self.selected.insert(item.id().to_string());
        } else {
            self.selected.remove(item.id());
        }
    }
}
