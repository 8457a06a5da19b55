//! List screen controller: filter box, per-page menu, select-all and bulk
//! actions wired to one [`Paginator`].
//!
//! Every list screen in the admin console (resource restore, quality-tool
//! targets, user management) follows the same script. The controller owns
//! its paginator outright, so there is no shared registry of paginators.

use crate::error::Result;
use crate::indicator::IndicatorView;
use crate::item::{Item, Presenter, Selection};
use crate::locale::{Catalog, Locale, Text};
use crate::paginator::Paginator;
use crate::report::{self, DateRange};
use crate::request::{Method, Request};
use serde_json::{json, Map, Value};

/// Result of applying filter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// At least one item matched.
    Results,
    /// Nothing matched; show the no-results text instead of page controls.
    NoResults,
}

/// Button labels derived from the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Number of selected items across all pages.
    pub count: usize,
    /// Label for the select-all button.
    pub select_all_label: String,
    /// Label for the clear-selection button, shown only when something is selected.
    pub remove_all_label: Option<String>,
}

/// Drives one paginated list screen.
///
/// # Examples
///
/// ```rust
/// use console_paginator::prelude::*;
///
/// let items: Vec<DefaultItem> = (0..25)
///     .map(|i| DefaultItem::new(i.to_string(), format!("Resource {i}")))
///     .collect();
/// let mut rows = VisibleSet::new();
/// let paginator = Paginator::new(items, 10, &mut rows)?;
/// let mut screen = ListController::new(paginator).with_locale(Locale::Fi);
///
/// assert_eq!(screen.on_filter_input("resource 2", &mut rows), FilterOutcome::Results);
/// assert_eq!(rows.len(), 6);
/// assert_eq!(screen.on_filter_input("sauna", &mut rows), FilterOutcome::NoResults);
/// assert_eq!(screen.render_indicator(&BuiltinCatalog), "Ei tuloksia");
/// # Ok::<(), console_paginator::Error>(())
/// ```
#[derive(Debug)]
pub struct ListController<I> {
    paginator: Paginator<I>,
    query: String,
    locale: Locale,
    select_state: bool,
}

impl<I: Item + 'static> ListController<I> {
    /// Wraps an already-built paginator.
    pub fn new(paginator: Paginator<I>) -> Self {
        Self {
            paginator,
            query: String::new(),
            locale: Locale::default(),
            select_state: false,
        }
    }

    /// Sets the UI language (builder pattern).
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The wrapped paginator.
    pub fn paginator(&self) -> &Paginator<I> {
        &self.paginator
    }

    /// Mutable access for page navigation.
    pub fn paginator_mut(&mut self) -> &mut Paginator<I> {
        &mut self.paginator
    }

    /// The filter text last applied.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// UI language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Applies new filter input, starting again from the first page.
    pub fn on_filter_input<P>(&mut self, query: &str, presenter: &mut P) -> FilterOutcome
    where
        P: Presenter<I> + ?Sized,
    {
        self.query = query.to_string();
        self.paginator.filter_query(query, 0, presenter);
        self.outcome()
    }

    /// Changes the page size and re-applies the current filter, keeping the
    /// current page where it still exists.
    pub fn on_per_page<P>(&mut self, per_page: usize, presenter: &mut P) -> Result<FilterOutcome>
    where
        P: Presenter<I> + ?Sized,
    {
        self.paginator.set_per_page(per_page)?;
        let page = self.paginator.current_page();
        self.paginator.filter_query(&self.query, page, presenter);
        Ok(self.outcome())
    }

    /// Selects every unselected item on the current page.
    ///
    /// Items on other pages, and items hidden by the filter, keep their
    /// state. Returns how many items changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::prelude::*;
    ///
    /// let items: Vec<DefaultItem> =
    ///     (0..15).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
    /// let mut rows = VisibleSet::new();
    /// let screen = ListController::new(Paginator::new(items, 10, &mut rows)?);
    /// let mut selection = SelectionSet::new();
    ///
    /// assert_eq!(screen.select_all(&mut selection), 10);
    /// assert_eq!(screen.select_all(&mut selection), 0);
    /// # Ok::<(), console_paginator::Error>(())
    /// ```
    pub fn select_all<S>(&self, selection: &mut S) -> usize
    where
        S: Selection<I> + ?Sized,
    {
        let mut changed = 0;
        for item in self.paginator.page_items() {
            if !selection.is_selected(item) {
                selection.set_selected(item, true);
                changed += 1;
            }
        }
        changed
    }

    /// Flips between selecting and deselecting every item, on every page.
    ///
    /// Returns the label the toggle button should show next:
    /// [`Text::DeselectAll`] after selecting, [`Text::SelectAll`] after
    /// deselecting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_paginator::prelude::*;
    ///
    /// let items: Vec<DefaultItem> =
    ///     (0..15).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
    /// let mut rows = VisibleSet::new();
    /// let mut screen = ListController::new(Paginator::new(items, 10, &mut rows)?);
    /// let mut selection = SelectionSet::new();
    ///
    /// assert_eq!(screen.toggle_all(&mut selection), Text::DeselectAll);
    /// assert_eq!(selection.len(), 15);
    /// assert_eq!(screen.toggle_all(&mut selection), Text::SelectAll);
    /// assert!(selection.is_empty());
    /// # Ok::<(), console_paginator::Error>(())
    /// ```
    pub fn toggle_all<S>(&mut self, selection: &mut S) -> Text
    where
        S: Selection<I> + ?Sized,
    {
        self.select_state = !self.select_state;
        for item in self.paginator.items() {
            selection.set_selected(item, self.select_state);
        }
        self.toggle_text()
    }

    /// Current label key of the select-all toggle.
    pub fn toggle_text(&self) -> Text {
        if self.select_state {
            Text::DeselectAll
        } else {
            Text::SelectAll
        }
    }

    /// Deselects every item on every page.
    pub fn clear_selection<S>(&self, selection: &mut S)
    where
        S: Selection<I> + ?Sized,
    {
        for item in self.paginator.items() {
            selection.set_selected(item, false);
        }
    }

    /// Ids of all selected items.
    pub fn selected_ids<S>(&self, selection: &S) -> Vec<String>
    where
        S: Selection<I> + ?Sized,
    {
        self.paginator.selected_ids(|item| selection.is_selected(item))
    }

    /// Labels for the select-all and clear-selection buttons.
    ///
    /// The count covers every page, filtered or not, and is read live from
    /// `selection`.
    pub fn selection_summary<S>(&self, selection: &S, catalog: &dyn Catalog) -> SelectionSummary
    where
        S: Selection<I> + ?Sized,
    {
        let count = self
            .paginator
            .selected_items(|item| selection.is_selected(item))
            .len();
        SelectionSummary {
            count,
            select_all_label: catalog.text(self.locale, Text::SelectAll),
            remove_all_label: (count > 0)
                .then(|| catalog.text(self.locale, Text::RemoveAllSelected(count))),
        }
    }

    /// Builds the POST that submits the selected ids under `field`.
    ///
    /// # Arguments
    ///
    /// * `url` - Endpoint of the bulk action
    /// * `csrf_token` - Token sent as the CSRF header
    /// * `field` - Payload key holding the id list
    /// * `selection` - Where selection state is read from
    pub fn bulk_request<S>(&self, url: &str, csrf_token: &str, field: &str, selection: &S) -> Request
    where
        S: Selection<I> + ?Sized,
    {
        let mut payload = Map::new();
        payload.insert(field.to_string(), json!(self.selected_ids(selection)));
        Request::new(Method::Post, url)
            .with_payload(Value::Object(payload))
            .with_csrf(csrf_token)
    }

    /// Builds the report download for the selected items over `range`.
    pub fn report_request<S>(&self, origin: &str, range: &DateRange, selection: &S) -> Request
    where
        S: Selection<I> + ?Sized,
    {
        report::report_request(origin, &self.selected_ids(selection), range)
    }

    /// Renders the page indicator for the current state with a custom view.
    pub fn indicator_view(&self, view: &IndicatorView, catalog: &dyn Catalog) -> String {
        view.view(self.paginator.indicator(), catalog)
    }

    /// Renders the page indicator in the paginator's configured style and
    /// the controller's language.
    pub fn render_indicator(&self, catalog: &dyn Catalog) -> String {
        let view = IndicatorView::new()
            .with_type(self.paginator.indicator_type())
            .with_locale(self.locale);
        self.indicator_view(&view, catalog)
    }

    fn outcome(&mut self) -> FilterOutcome {
        if self.paginator.current().is_empty() {
            FilterOutcome::NoResults
        } else {
            FilterOutcome::Results
        }
    }
}
