//! Page indicator state and its text rendering.
//!
//! The paginator rebuilds a [`PageIndicator`] snapshot on every reset, filter,
//! navigation and `current()` query. Hosts read it to build their page
//! controls; [`IndicatorView`] renders it as text for terminal hosts.

use crate::config::PaginatorConfig;
use crate::locale::{Catalog, Locale, Text};
use lipgloss_extras::prelude::*;
use serde::Deserialize;

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Page numbers, e.g. "2/5".
    #[default]
    Arabic,
    /// One dot per page, e.g. "○ • ○".
    Dots,
    /// Localised label, e.g. "Page: 2".
    Label,
}

/// What a page control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Step back one page.
    Previous,
    /// Jump to a specific page.
    Page,
    /// Step forward one page.
    Next,
}

/// One page control a host should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    /// Stable element id, unique per paginator.
    pub id: String,
    /// Zero-based page the control leads to.
    pub page: usize,
    /// Kind of control.
    pub kind: ControlKind,
    /// True for the jump control of the page currently shown.
    pub active: bool,
}

/// Snapshot of everything a host needs to draw page controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndicator {
    /// Id of the paginator this snapshot belongs to.
    pub paginator_id: String,
    /// Number of pages in the current partition. Zero when nothing matched.
    pub total_pages: usize,
    /// Zero-based current page.
    pub current_page: usize,
    /// Item count of each page, in order.
    pub page_sizes: Vec<usize>,
    /// Bumped every time the snapshot is rebuilt.
    pub revision: u64,
}

impl PageIndicator {
    /// True if there is a page before the current one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 0 && self.total_pages > 0
    }

    /// True if there is a non-empty page after the current one.
    pub fn has_next(&self) -> bool {
        self.page_sizes
            .get(self.current_page + 1)
            .is_some_and(|size| *size > 0)
    }

    /// True if the partition holds no pages at all.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Controls in display order: previous, one per page, next.
    ///
    /// Previous and next only appear when they lead somewhere. An empty
    /// partition yields no controls.
    ///
    /// ```
    /// use console_paginator::indicator::{ControlKind, PageIndicator};
    ///
    /// let indicator = PageIndicator {
    ///     paginator_id: "links".to_string(),
    ///     total_pages: 3,
    ///     current_page: 1,
    ///     page_sizes: vec![10, 10, 5],
    ///     revision: 1,
    /// };
    /// let ids: Vec<String> = indicator.controls().into_iter().map(|c| c.id).collect();
    /// assert_eq!(
    ///     ids,
    ///     ["prev_page_links", "page_links_0", "page_links_1", "page_links_2", "next_page_links"]
    /// );
    /// ```
    pub fn controls(&self) -> Vec<PageControl> {
        let mut controls = Vec::with_capacity(self.total_pages + 2);
        if self.has_previous() {
            controls.push(PageControl {
                id: format!("prev_page_{}", self.paginator_id),
                page: self.current_page - 1,
                kind: ControlKind::Previous,
                active: false,
            });
        }
        for page in 0..self.total_pages {
            controls.push(PageControl {
                id: format!("page_{}_{}", self.paginator_id, page),
                page,
                kind: ControlKind::Page,
                active: page == self.current_page,
            });
        }
        if self.has_next() {
            controls.push(PageControl {
                id: format!("next_page_{}", self.paginator_id),
                page: self.current_page + 1,
                kind: ControlKind::Next,
                active: false,
            });
        }
        controls
    }
}

/// Text renderer for a [`PageIndicator`].
#[derive(Debug, Clone)]
pub struct IndicatorView {
    /// Display type.
    pub indicator_type: Type,
    /// Character for the active page in dots mode.
    pub active_dot: String,
    /// Character for inactive pages in dots mode.
    pub inactive_dot: String,
    /// Format string for arabic mode, two `%d` placeholders.
    pub arabic_format: String,
    /// Style applied to the active dot.
    pub active_style: Style,
    /// Language for label mode and the no-results text.
    pub locale: Locale,
}

impl Default for IndicatorView {
    fn default() -> Self {
        Self {
            indicator_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            active_style: Style::new().bold(true),
            locale: Locale::default(),
        }
    }
}

impl IndicatorView {
    /// Creates a renderer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer using the display type from `config`.
    ///
    /// ```
    /// use console_paginator::config::PaginatorConfig;
    /// use console_paginator::indicator::{IndicatorView, Type};
    ///
    /// let config: PaginatorConfig = serde_json::from_str(r#"{"indicator": "dots"}"#).unwrap();
    /// assert_eq!(IndicatorView::from_config(&config).indicator_type, Type::Dots);
    /// ```
    pub fn from_config(config: &PaginatorConfig) -> Self {
        Self::default().with_type(config.indicator)
    }

    /// Sets the display type (builder pattern).
    pub fn with_type(mut self, indicator_type: Type) -> Self {
        self.indicator_type = indicator_type;
        self
    }

    /// Sets the language (builder pattern).
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the active dot character (builder pattern).
    pub fn with_active_dot(mut self, dot: &str) -> Self {
        self.active_dot = dot.to_string();
        self
    }

    /// Sets the inactive dot character (builder pattern).
    pub fn with_inactive_dot(mut self, dot: &str) -> Self {
        self.inactive_dot = dot.to_string();
        self
    }

    /// Renders the indicator. An empty partition renders the no-results text.
    pub fn view(&self, indicator: &PageIndicator, catalog: &dyn Catalog) -> String {
        if indicator.is_empty() {
            return catalog.text(self.locale, Text::NoResults);
        }
        match self.indicator_type {
            Type::Arabic => self.arabic_view(indicator),
            Type::Dots => self.dots_view(indicator),
            Type::Label => self.label_view(indicator, catalog),
        }
    }

    fn arabic_view(&self, indicator: &PageIndicator) -> String {
        self.arabic_format
            .replacen("%d", &(indicator.current_page + 1).to_string(), 1)
            .replacen("%d", &indicator.total_pages.to_string(), 1)
    }

    fn dots_view(&self, indicator: &PageIndicator) -> String {
        (0..indicator.total_pages)
            .map(|i| {
                if i == indicator.current_page {
                    self.active_style.render(&self.active_dot)
                } else {
                    self.inactive_dot.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn label_view(&self, indicator: &PageIndicator, catalog: &dyn Catalog) -> String {
        format!(
            "{}: {}",
            catalog.text(self.locale, Text::Page),
            indicator.current_page + 1
        )
    }
}
