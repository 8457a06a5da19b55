//! Notification surface: a timed success/error banner.
//!
//! Controllers report the outcome of backend requests through a
//! [`Notifier`]. [`NoticeBoard`] is an in-memory implementation that keeps
//! the latest notice and hides it once its duration has passed.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::time::{Duration, Instant};

/// How long a notice stays up unless told otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// Kind of notice, which decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    /// Operation succeeded.
    #[default]
    Success,
    /// Operation failed.
    Error,
}

/// A message shown for a limited time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text to show.
    pub message: String,
    /// Success or error.
    pub kind: NoticeKind,
    /// How long the notice stays visible.
    pub duration: Duration,
}

impl Notice {
    /// A success notice with the default duration.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    /// An error notice with the default duration.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    /// Overrides the display duration (builder pattern).
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Anything that can display a [`Notice`].
pub trait Notifier {
    /// Shows `notice`, replacing whatever was shown before.
    fn notify(&mut self, notice: Notice);
}

/// Collects notices, mostly useful in tests and logs.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Single-slot banner that remembers when its notice went up.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<(Notice, Instant)>,
    /// Style for success notices.
    pub success_style: Style,
    /// Style for error notices.
    pub error_style: Style,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self {
            current: None,
            success_style: Style::new().foreground(lipgloss::Color::from("#04B575")),
            error_style: Style::new().foreground(lipgloss::Color::from("#FF5F87")),
        }
    }
}

impl NoticeBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notice` as of `at`.
    pub fn notify_at(&mut self, notice: Notice, at: Instant) {
        self.current = Some((notice, at));
    }

    /// The notice still visible at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        self.current.as_ref().and_then(|(notice, shown_at)| {
            (now.saturating_duration_since(*shown_at) < notice.duration).then_some(notice)
        })
    }

    /// Drops the notice once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.visible(now).is_none() {
            self.current = None;
        }
    }

    /// Renders the visible notice, or an empty string.
    pub fn view(&self, now: Instant) -> String {
        match self.visible(now) {
            Some(notice) => {
                let style = match notice.kind {
                    NoticeKind::Success => &self.success_style,
                    NoticeKind::Error => &self.error_style,
                };
                style.render(&notice.message)
            }
            None => String::new(),
        }
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, notice: Notice) {
        self.notify_at(notice, Instant::now());
    }
}
