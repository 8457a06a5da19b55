#![warn(missing_docs)]

//! # console-paginator
//!
//! Client-side pagination, filtering and selection state for the list
//! screens of an administrative console (resources, users, outlook links,
//! quality-tool targets, resource restore).
//!
//! ## Overview
//!
//! The heart of the crate is [`Paginator`]: it owns a fixed collection of
//! items, splits them into pages, applies an optional filter, and tells a
//! host [`Presenter`] which rows to show and hide. It never renders anything
//! and never does I/O. Everything runs synchronously on the calling thread.
//!
//! Around it sit the pieces every list screen needs:
//!
//! - **Page indicator**: a [`PageIndicator`] snapshot of page count, current
//!   page and per-page control ids, plus an [`IndicatorView`] text renderer
//! - **Locale**: [`Locale`] and an injectable [`Catalog`] for the handful of
//!   UI strings (page label, no results, select all)
//! - **Notifications**: a [`Notifier`] trait and a timed [`NoticeBoard`]
//! - **Requests**: a [`Transport`] boundary with CSRF-carrying [`Request`]s
//!   and [`Failure`] messages routed to the notifier
//! - **Controller**: [`ListController`] wires filter input, the per-page
//!   menu, select-all and bulk submit to one paginator
//! - **Reports**: a validated [`DateRange`] and the spreadsheet download request
//!
//! ## Quick Start
//!
//! ```rust
//! use console_paginator::prelude::*;
//!
//! let items: Vec<DefaultItem> = (1..=25)
//!     .map(|i| DefaultItem::new(i.to_string(), format!("Meeting room {i}")))
//!     .collect();
//!
//! let mut rows = VisibleSet::new();
//! let mut paginator = Paginator::builder(items)
//!     .id("resources")
//!     .per_page(10)
//!     .build(&mut rows)?;
//!
//! assert_eq!(paginator.total_pages(), 3);
//! assert_eq!(rows.len(), 10);
//!
//! // Navigation is two-step: the caller hides the old page and shows the new one.
//! rows.hide(paginator.current());
//! rows.show(paginator.next());
//! assert!(rows.is_visible("11"));
//!
//! // Filtering hides and shows rows itself.
//! paginator.filter_query("room 2", 0, &mut rows);
//! assert_eq!(paginator.visible_len(), 7);
//!
//! let view = IndicatorView::new().with_type(IndicatorType::Label).with_locale(Locale::En);
//! assert_eq!(view.view(paginator.indicator(), &BuiltinCatalog), "Page: 1");
//! # Ok::<(), console_paginator::Error>(())
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Terminal hosts forward messages to [`Paginator::update`], which turns
//! pages on the configured [`PaginatorKeyMap`] keys:
//!
//! ```rust
//! use bubbletea_rs::{KeyMsg, Msg};
//! use console_paginator::prelude::*;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let items: Vec<DefaultItem> = (0..30).map(|i| DefaultItem::new(i.to_string(), "row")).collect();
//! let mut rows = VisibleSet::new();
//! let mut paginator = Paginator::new(items, 10, &mut rows)?;
//!
//! let msg: Msg = Box::new(KeyMsg { key: KeyCode::PageDown, modifiers: KeyModifiers::NONE });
//! paginator.update(&msg, &mut rows);
//! assert_eq!(paginator.current_page(), 1);
//! # Ok::<(), console_paginator::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` on repartition and request
//! submission, `trace` on navigation, `warn` on failed requests). Install a
//! subscriber in the host to see them.

pub mod config;
pub mod controller;
pub mod error;
pub mod indicator;
pub mod item;
pub mod key;
pub mod locale;
pub mod matcher;
pub mod notify;
pub mod paginator;
pub mod report;
pub mod request;

pub use config::{PaginatorConfig, PerPage, DEFAULT_PER_PAGE};
pub use controller::{FilterOutcome, ListController, SelectionSummary};
pub use error::{Error, Result};
pub use indicator::{
    ControlKind, IndicatorView, PageControl, PageIndicator, Type as IndicatorType,
};
pub use item::{DefaultItem, Item, Presenter, Selection, SelectionSet, VisibleSet};
pub use key::{Binding, Help as KeyHelp, KeyMap};
pub use locale::{BuiltinCatalog, Catalog, Locale, Text};
pub use matcher::MatchMode;
pub use notify::{Notice, NoticeBoard, NoticeKind, Notifier, DEFAULT_NOTICE_DURATION};
pub use paginator::{Paginator, PaginatorBuilder, PaginatorKeyMap};
pub use report::{report_request, DateRange};
pub use request::{submit_with_notice, Failure, Method, Request, Response, Transport};

/// Convenience re-exports for hosts.
pub mod prelude {
    pub use crate::config::{PaginatorConfig, PerPage};
    pub use crate::controller::{FilterOutcome, ListController, SelectionSummary};
    pub use crate::error::{Error, Result};
    pub use crate::indicator::{
        ControlKind, IndicatorView, PageControl, PageIndicator, Type as IndicatorType,
    };
    pub use crate::item::{DefaultItem, Item, Presenter, Selection, SelectionSet, VisibleSet};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::locale::{BuiltinCatalog, Catalog, Locale, Text};
    pub use crate::matcher::MatchMode;
    pub use crate::notify::{Notice, NoticeBoard, NoticeKind, Notifier};
    pub use crate::paginator::{Paginator, PaginatorKeyMap};
    pub use crate::report::DateRange;
    pub use crate::request::{submit_with_notice, Failure, Method, Request, Response, Transport};
}
